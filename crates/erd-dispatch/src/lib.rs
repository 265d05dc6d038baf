//! `erd-dispatch` — the dispatch orchestrator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`incident`]  | `Incident`, `IncidentStatus`                            |
//! | [`unit`]      | `ResponseUnit`, `UnitStatus`                            |
//! | [`queue`]     | `IncidentQueue` — severity/FIFO priority queue          |
//! | [`observer`]  | `DispatchObserver` trait, `DispatchEvent`, `NoopObserver` |
//! | [`scheduler`] | `Dispatcher` — matching, resolution, repositioning      |
//!
//! # Call model
//!
//! Reporting an incident synchronously attempts a dispatch before
//! returning; resolving one re-attempts the queue head.  There is no
//! background retry — an unservable incident stays queued until a later
//! report/resolve call finds capacity.  Callers needing concurrent access
//! must serialize report/resolve/dispatch as atomic units.

pub mod incident;
pub mod observer;
pub mod queue;
pub mod scheduler;
pub mod unit;


pub use incident::{Incident, IncidentStatus};
pub use observer::{DispatchEvent, DispatchObserver, NoopObserver};
pub use queue::IncidentQueue;
pub use scheduler::{Dispatcher, RepositionAdvice, Strategy};
pub use unit::{ResponseUnit, UnitStatus};
