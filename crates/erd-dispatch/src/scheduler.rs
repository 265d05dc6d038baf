//! The `Dispatcher`: incident backlog, unit registry, matching, and
//! proactive repositioning advice.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Instant;

use rustc_hash::FxHashMap;

use erd_core::{IncidentId, LocationId, UnitId};
use erd_network::pathfind::{AStarPathfinder, DijkstraPathfinder, Path, Pathfinder};
use erd_network::Network;
use erd_predict::{HotspotScore, PredictiveAnalyzer};

use crate::incident::Incident;
use crate::observer::{DispatchEvent, DispatchObserver};
use crate::queue::IncidentQueue;
use crate::unit::ResponseUnit;

// ── Strategy ──────────────────────────────────────────────────────────────────

/// Which shortest-path engine the dispatcher runs.
///
/// Switching is a pure configuration change: it takes effect on the next
/// dispatch attempt and never touches already-assigned incidents.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Strategy {
    Dijkstra,
    AStar,
}

impl Strategy {
    pub fn find(self, network: &Network, from: LocationId, to: LocationId) -> Option<Path> {
        match self {
            Strategy::Dijkstra => DijkstraPathfinder.shortest_path(network, from, to),
            Strategy::AStar => AStarPathfinder.shortest_path(network, from, to),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Dijkstra => "dijkstra",
            Strategy::AStar => "astar",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RepositionAdvice ──────────────────────────────────────────────────────────

/// One proactive-repositioning recommendation: a demand hotspot and the
/// dispatch center closest to it by travel time.  Advisory only — the
/// dispatcher never moves units itself.
#[derive(Clone, Debug)]
pub struct RepositionAdvice {
    pub hotspot: HotspotScore,
    /// `None` when no dispatch center can reach the hotspot.
    pub nearest_center: Option<LocationId>,
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

/// The orchestrator: owns the network, the incident backlog, the unit
/// registry, and the predictive analyzer, and reports outcomes to a
/// [`DispatchObserver`].
///
/// Reference semantics are single-threaded and synchronous — reporting an
/// incident performs matching and mutates unit/incident state before
/// returning.
pub struct Dispatcher<O: DispatchObserver> {
    /// The transportation network dispatch routes over.  Public so callers
    /// can apply congestion updates (e.g. learned write-backs) between
    /// dispatch calls.
    pub network: Network,

    /// Incident-history model, notified on every report.  Public for direct
    /// probability/allocation queries.
    pub analyzer: PredictiveAnalyzer,

    /// Outcome sink (metrics recorder, test probe, …).
    pub observer: O,

    strategy: Strategy,
    pending: IncidentQueue,
    /// Unit registry.  A `BTreeMap` so candidate evaluation walks units in
    /// ascending id order — score ties resolve to the lowest unit id.
    units: BTreeMap<UnitId, ResponseUnit>,
    active: FxHashMap<IncidentId, Incident>,
}

impl<O: DispatchObserver> Dispatcher<O> {
    /// New dispatcher with the heuristic-guided engine selected.
    pub fn new(network: Network, analyzer: PredictiveAnalyzer, observer: O) -> Self {
        Self {
            network,
            analyzer,
            observer,
            strategy: Strategy::AStar,
            pending: IncidentQueue::new(),
            units: BTreeMap::new(),
            active: FxHashMap::default(),
        }
    }

    // ── Configuration ─────────────────────────────────────────────────────

    /// Register a unit.  Re-registering an id replaces the previous unit.
    pub fn register_unit(&mut self, unit: ResponseUnit) {
        self.units.insert(unit.id, unit);
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    // ── Incident lifecycle ────────────────────────────────────────────────

    /// Enqueue a new incident, feed it to the analyzer, and immediately
    /// attempt to dispatch the head of the queue.
    pub fn report_incident(&mut self, incident: Incident) {
        self.analyzer.record_incident(
            incident.location,
            incident.kind,
            incident.severity(),
            incident.reported_at,
        );
        self.pending.push(incident.id, incident.severity(), incident.reported_at);
        self.active.insert(incident.id, incident);

        self.dispatch_next();
    }

    /// Attempt to match the highest-priority pending incident.
    ///
    /// On success the incident leaves the queue and both sides are bound; on
    /// failure a failed-dispatch outcome is recorded and the incident stays
    /// queued for the next report/resolve call — there is no timer-driven
    /// retry.
    pub fn dispatch_next(&mut self) {
        let Some(incident_id) = self.pending_head() else {
            return;
        };
        let Some(incident) = self.active.get(&incident_id) else {
            return;
        };
        let (kind, severity, target) = (incident.kind, incident.severity(), incident.location);
        let strategy = self.strategy;

        // Score every available, capable unit that can reach the incident.
        // Higher severity shrinks the divisor's complement — a severe
        // incident tolerates a longer route before losing a candidate.
        let mut best: Option<(UnitId, Path, f64)> = None;
        for unit in self.units.values() {
            if !unit.is_available() || !unit.kind.can_respond_to(kind) {
                continue;
            }

            let started = Instant::now();
            let found = strategy.find(&self.network, unit.location, target);
            let elapsed = started.elapsed().as_nanos() as u64;

            let Some(path) = found else { continue };
            self.observer.on_search(strategy, elapsed);

            let score = path.total_min / (severity as f64 * 0.2 + 0.8);
            if best.as_ref().is_none_or(|&(_, _, s)| score < s) {
                best = Some((unit.id, path, score));
            }
        }

        match best {
            Some((unit_id, path, _)) => {
                self.pending.pop();
                if let Some(unit) = self.units.get_mut(&unit_id) {
                    unit.assign(incident_id);
                }
                if let Some(incident) = self.active.get_mut(&incident_id) {
                    incident.assign(unit_id);
                }
                self.observer.on_dispatch(&DispatchEvent {
                    incident_id,
                    severity,
                    unit_id,
                    response_min: path.total_min,
                    path_km: path.total_km,
                    strategy,
                });
            }
            None => {
                if let Some(incident) = self.active.get(&incident_id) {
                    self.observer.on_failed_dispatch(incident);
                }
            }
        }
    }

    /// Resolve an active incident: free its unit back to `Available`, mark
    /// it `Resolved`, and re-attempt dispatch of the queue head (a
    /// resolution may unblock a previously-unservable incident).
    ///
    /// Unknown id → `None`, no-op.
    pub fn resolve_incident(&mut self, id: IncidentId) -> Option<Incident> {
        let mut incident = self.active.remove(&id)?;
        if let Some(unit_id) = incident.assigned_unit
            && let Some(unit) = self.units.get_mut(&unit_id)
        {
            unit.complete();
        }
        incident.resolve();

        self.dispatch_next();
        Some(incident)
    }

    // ── Proactive repositioning ───────────────────────────────────────────

    /// For each of the analyzer's top-`n` hotspots, recommend the dispatch
    /// center nearest by shortest-path time (one full pathfind per center
    /// per hotspot, using the active strategy).
    pub fn reposition_recommendations(&self, n: usize) -> Vec<RepositionAdvice> {
        self.analyzer
            .top_hotspots(n)
            .into_iter()
            .map(|hotspot| RepositionAdvice {
                nearest_center: self.nearest_dispatch_center(hotspot.location),
                hotspot,
            })
            .collect()
    }

    fn nearest_dispatch_center(&self, target: LocationId) -> Option<LocationId> {
        let mut nearest: Option<(LocationId, f64)> = None;
        for center in self.network.dispatch_centers() {
            let Some(path) = self.strategy.find(&self.network, center, target) else {
                continue;
            };
            if nearest.is_none_or(|(_, best)| path.total_min < best) {
                nearest = Some((center, path.total_min));
            }
        }
        nearest.map(|(center, _)| center)
    }

    // ── Observable state ──────────────────────────────────────────────────

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn incident(&self, id: IncidentId) -> Option<&Incident> {
        self.active.get(&id)
    }

    pub fn unit(&self, id: UnitId) -> Option<&ResponseUnit> {
        self.units.get(&id)
    }

    /// All registered units in ascending id order.
    pub fn units(&self) -> impl Iterator<Item = &ResponseUnit> {
        self.units.values()
    }

    pub fn available_unit_count(&self) -> usize {
        self.units.values().filter(|u| u.is_available()).count()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Head of the pending queue, discarding stale entries — incidents that
    /// were resolved while still queued — along the way.
    fn pending_head(&mut self) -> Option<IncidentId> {
        while let Some(id) = self.pending.peek() {
            if self.active.contains_key(&id) {
                return Some(id);
            }
            self.pending.pop();
        }
        None
    }
}

impl<O: DispatchObserver> fmt::Display for Dispatcher<O> {
    /// One-line status summary.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let available = self.available_unit_count();
        write!(
            f,
            "dispatch: {} active, {} pending | units: {} available, {} busy | {} | strategy {}",
            self.active_count(),
            self.pending_count(),
            available,
            self.units.len() - available,
            self.network,
            self.strategy,
        )
    }
}
