//! Dispatch observer trait for outcome recording.
//!
//! The dispatcher is write-only toward this surface: it reports outcomes and
//! search timings but never reads anything back, so observers can never
//! influence a dispatch decision.

use erd_core::{IncidentId, UnitId};

use crate::incident::Incident;
use crate::scheduler::Strategy;

/// A successful assignment, as reported to the observer.
#[derive(Copy, Clone, Debug)]
pub struct DispatchEvent {
    pub incident_id: IncidentId,
    pub severity: u8,
    pub unit_id: UnitId,
    /// Route travel time, minutes.
    pub response_min: f64,
    /// Route length, kilometres.
    pub path_km: f64,
    pub strategy: Strategy,
}

/// Callbacks invoked by [`Dispatcher`](crate::Dispatcher) at decision points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait DispatchObserver {
    /// A unit was assigned to an incident.
    fn on_dispatch(&mut self, _event: &DispatchEvent) {}

    /// No available, capable unit could reach the incident; it stays queued.
    fn on_failed_dispatch(&mut self, _incident: &Incident) {}

    /// One candidate shortest-path search completed (reachable candidates
    /// only), with its wall-clock duration.
    fn on_search(&mut self, _strategy: Strategy, _nanos: u64) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
