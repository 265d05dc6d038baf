//! `erd-core` — foundational types for the emergency response dispatch
//! workspace.
//!
//! This crate is a dependency of every other `erd-*` crate.  It intentionally
//! has no dependencies of its own: ids, coordinates, and timestamps are plain
//! arithmetic.
//!
//! # What lives here
//!
//! | Module    | Contents                                      |
//! |-----------|-----------------------------------------------|
//! | [`ids`]   | `LocationId`, `IncidentId`, `UnitId`          |
//! | [`geo`]   | `GeoPoint`, haversine distance                |
//! | [`time`]  | `Timestamp` and its calendar arithmetic       |
//! | [`kinds`] | `IncidentKind`, `UnitKind`, capability matrix |

pub mod geo;
pub mod ids;
pub mod kinds;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{IncidentId, LocationId, UnitId};
pub use kinds::{IncidentKind, UnitKind};
pub use time::Timestamp;
