//! `erd-network` — weighted transportation network and routing.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`location`] | `Location`, `LocationKind`, `Route`                       |
//! | [`network`]  | `Network` — location set + mutable adjacency structure    |
//! | [`pathfind`] | `Pathfinder` trait, `Path`, Dijkstra and A* engines       |
//!
//! # Result convention
//!
//! Unreachable destinations are a normal negative result, not a fault: every
//! routing query returns `Option<Path>` and callers branch on `None`.

pub mod location;
pub mod network;
pub mod pathfind;

#[cfg(test)]
mod tests;

pub use location::{Location, LocationKind, Route};
pub use network::Network;
pub use pathfind::{AStarPathfinder, DijkstraPathfinder, Path, Pathfinder};
