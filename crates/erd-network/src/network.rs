//! The mutable transportation network: location set plus adjacency structure.
//!
//! # Data layout
//!
//! Adjacency is a map from location id to that location's outgoing routes.
//! Unlike a packed CSR graph this layout stays cheap to mutate, which the
//! dispatch domain needs: locations come and go mid-run and congestion
//! factors are rewritten edge-by-edge as traffic is learned.
//!
//! # Invariant
//!
//! Every route's `from`/`to` refer to locations currently in the set.
//! `remove_location` purges all inbound routes; `add_connection` refuses
//! endpoints that were never registered.

use rustc_hash::FxHashMap;

use erd_core::LocationId;

use crate::location::{Location, LocationKind, Route};

/// Weighted directed graph over [`Location`]s.
///
/// All pathfinding and adaptive-weight learning operates on this structure.
#[derive(Default)]
pub struct Network {
    locations: FxHashMap<LocationId, Location>,
    adjacency: FxHashMap<LocationId, Vec<Route>>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Add a location.  Idempotent by id: a second add with an id already in
    /// the set is ignored, keeping the first registration.
    pub fn add_location(&mut self, location: Location) {
        if !self.locations.contains_key(&location.id) {
            self.adjacency.entry(location.id).or_default();
            self.locations.insert(location.id, location);
        }
    }

    /// Remove a location and purge every route referencing it as a
    /// destination from all other adjacency lists.  Routes where it was the
    /// source vanish with its own adjacency entry.  Unknown id → no-op.
    pub fn remove_location(&mut self, id: LocationId) {
        if self.locations.remove(&id).is_none() {
            return;
        }
        self.adjacency.remove(&id);
        for routes in self.adjacency.values_mut() {
            routes.retain(|r| r.to != id);
        }
    }

    /// Declare an undirected connection between `a` and `b`: two directed
    /// routes are created, each with its own congestion state.
    ///
    /// No-op unless both endpoints are registered (preserves the invariant
    /// that routes only reference known locations).
    pub fn add_connection(&mut self, a: LocationId, b: LocationId, distance_km: f64, travel_min: f64) {
        if !self.locations.contains_key(&a) || !self.locations.contains_key(&b) {
            return;
        }
        if let Some(routes) = self.adjacency.get_mut(&a) {
            routes.push(Route::new(a, b, distance_km, travel_min));
        }
        if let Some(routes) = self.adjacency.get_mut(&b) {
            routes.push(Route::new(b, a, distance_km, travel_min));
        }
    }

    /// Set the congestion factor of the single directed route `from → to`,
    /// clamped to ≥ 1.0.  No-op if the route does not exist.
    pub fn update_congestion(&mut self, from: LocationId, to: LocationId, factor: f64) {
        if let Some(routes) = self.adjacency.get_mut(&from)
            && let Some(route) = routes.iter_mut().find(|r| r.to == to)
        {
            route.set_congestion(factor);
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Outgoing routes of `id`.  Empty slice for an unknown location.
    pub fn neighbors(&self, id: LocationId) -> &[Route] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    /// All registered locations, in unspecified order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// All locations of kind [`LocationKind::DispatchCenter`], sorted by id
    /// so callers iterate deterministically.
    pub fn dispatch_centers(&self) -> Vec<LocationId> {
        let mut centers: Vec<LocationId> = self
            .locations
            .values()
            .filter(|l| l.kind == LocationKind::DispatchCenter)
            .map(|l| l.id)
            .collect();
        centers.sort_unstable();
        centers
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Undirected edge count: directed routes / 2.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "network: {} locations, {} connections",
            self.location_count(),
            self.edge_count()
        )
    }
}
