//! `erd-metrics` — the outcome sink.
//!
//! [`MetricsRecorder`] implements
//! [`DispatchObserver`](erd_dispatch::DispatchObserver): it consumes
//! dispatch outcomes and search timings, derives summary statistics, and
//! exports the dispatch log as CSV.  Strictly write-only from the
//! dispatcher's perspective — nothing here ever feeds back into a dispatch
//! decision.

pub mod csv;
pub mod error;
pub mod recorder;


pub use error::MetricsError;
pub use recorder::{DispatchRow, MetricsRecorder, StrategyStats};
