//! Points of interest and the directed routes connecting them.

use std::fmt;
use std::hash::{Hash, Hasher};

use erd_core::{GeoPoint, LocationId};

// ── LocationKind ──────────────────────────────────────────────────────────────

/// What a network node represents.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum LocationKind {
    City,
    DispatchCenter,
    IncidentSite,
}

impl LocationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LocationKind::City => "city",
            LocationKind::DispatchCenter => "dispatch_center",
            LocationKind::IncidentSite => "incident_site",
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Location ──────────────────────────────────────────────────────────────────

/// An immutable point of interest on the network.
///
/// Equality and hashing are **by `id` alone** — two `Location` values with
/// the same id denote the same node even if name or position differ.  The
/// network and every learner/analyzer map relies on this.
#[derive(Clone, Debug)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub kind: LocationKind,
    pub position: GeoPoint,
}

impl Location {
    pub fn new(
        id: LocationId,
        name: impl Into<String>,
        kind: LocationKind,
        lat: f64,
        lon: f64,
    ) -> Self {
        Self { id, name: name.into(), kind, position: GeoPoint::new(lat, lon) }
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.name, self.id, self.kind)
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// A directed, weighted connection between two locations.
///
/// Connections are declared undirected but stored as two independent `Route`
/// values (one per direction) so congestion can differ by direction.  The
/// congestion factor is mutated only through
/// [`Network::update_congestion`](crate::Network::update_congestion) and is
/// clamped to a floor of 1.0 — congestion can slow travel, never speed it up
/// below baseline.
#[derive(Clone, Debug)]
pub struct Route {
    pub from: LocationId,
    pub to: LocationId,
    pub distance_km: f64,
    pub base_travel_min: f64,
    congestion: f64,
}

impl Route {
    pub fn new(from: LocationId, to: LocationId, distance_km: f64, base_travel_min: f64) -> Self {
        Self { from, to, distance_km, base_travel_min, congestion: 1.0 }
    }

    #[inline]
    pub fn congestion(&self) -> f64 {
        self.congestion
    }

    /// Set the congestion factor, clamped to ≥ 1.0.
    pub(crate) fn set_congestion(&mut self, factor: f64) {
        self.congestion = factor.max(1.0);
    }

    /// Effective travel time in minutes: `base_travel_min × congestion`.
    /// This is the edge weight used by both shortest-path engines.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.base_travel_min * self.congestion
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({:.2} km, {:.2} min, congestion {:.2}x)",
            self.from, self.to, self.distance_km, self.base_travel_min, self.congestion
        )
    }
}
