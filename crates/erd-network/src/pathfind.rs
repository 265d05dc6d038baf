//! Shortest-path engines: uniform-cost (Dijkstra) and heuristic-guided (A*).
//!
//! # Pluggability
//!
//! Both engines implement the [`Pathfinder`] trait and produce the same
//! [`Path`] result type, so the dispatcher swaps between them with no
//! result-shape differences.  "No path" is `None`, never an error.
//!
//! # Cost units
//!
//! Edge weight is effective travel time in minutes
//! (`base_travel_min × congestion`); all totals are minutes.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use erd_core::LocationId;

use crate::Network;

/// Reference road speed (km/h) used to convert the great-circle heuristic
/// distance into minutes.
const HEURISTIC_SPEED_KMH: f64 = 80.0;

// ── Path ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: the ordered stop sequence (source and
/// destination inclusive) plus totals.
#[derive(Debug, Clone)]
pub struct Path {
    pub stops: Vec<LocationId>,
    /// Total weighted travel time in minutes.
    pub total_min: f64,
    /// Total physical distance in kilometres, summed over traversed routes.
    pub total_km: f64,
}

impl Path {
    /// `true` if source and destination were the same location.
    pub fn is_trivial(&self) -> bool {
        self.stops.len() <= 1
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "path ({:.2} min): ", self.total_min)?;
        for (i, stop) in self.stops.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{stop}")?;
        }
        Ok(())
    }
}

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// A shortest-path engine over the [`Network`].
///
/// Returns `None` when the destination is unreachable — callers must treat
/// this as a normal negative result and branch on it.
pub trait Pathfinder {
    fn shortest_path(&self, network: &Network, from: LocationId, to: LocationId) -> Option<Path>;
}

// ── Priority-queue entry ──────────────────────────────────────────────────────

/// Heap entry ordered by key (cost or f-score), then by location id.
///
/// The secondary id key makes tie-breaking deterministic; keys are finite
/// (weights are non-negative, heuristics finite) so `total_cmp` is a true
/// total order here.
#[derive(Copy, Clone, Debug)]
struct QueueEntry {
    key: f64,
    node: LocationId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.total_cmp(&other.key).then_with(|| self.node.cmp(&other.node))
    }
}

// ── DijkstraPathfinder ────────────────────────────────────────────────────────

/// Uniform-cost search: label-correcting relaxation over a min-heap.
///
/// Terminates at the first pop of the destination, which is optimal because
/// all edge weights are ≥ 0.
pub struct DijkstraPathfinder;

impl Pathfinder for DijkstraPathfinder {
    fn shortest_path(&self, network: &Network, from: LocationId, to: LocationId) -> Option<Path> {
        if network.location(from).is_none() || network.location(to).is_none() {
            return None;
        }

        let mut dist: FxHashMap<LocationId, f64> = FxHashMap::default();
        let mut prev: FxHashMap<LocationId, LocationId> = FxHashMap::default();
        let mut heap: BinaryHeap<Reverse<QueueEntry>> = BinaryHeap::new();

        dist.insert(from, 0.0);
        heap.push(Reverse(QueueEntry { key: 0.0, node: from }));

        while let Some(Reverse(QueueEntry { key: cost, node })) = heap.pop() {
            if node == to {
                return Some(reconstruct(network, &prev, to, cost));
            }

            // Skip stale heap entries.
            if dist.get(&node).is_some_and(|&best| cost > best) {
                continue;
            }

            for route in network.neighbors(node) {
                let next = route.to;
                let new_cost = cost + route.weight();
                if dist.get(&next).is_none_or(|&best| new_cost < best) {
                    dist.insert(next, new_cost);
                    prev.insert(next, node);
                    heap.push(Reverse(QueueEntry { key: new_cost, node: next }));
                }
            }
        }

        None
    }
}

impl DijkstraPathfinder {
    /// One-to-all variant: best-known travel time in minutes from `source`
    /// to every reachable location.  Locations absent from the map are
    /// unreachable; an unknown source yields an empty map.
    pub fn distance_map(&self, network: &Network, source: LocationId) -> FxHashMap<LocationId, f64> {
        let mut dist: FxHashMap<LocationId, f64> = FxHashMap::default();
        if network.location(source).is_none() {
            return dist;
        }

        let mut heap: BinaryHeap<Reverse<QueueEntry>> = BinaryHeap::new();
        dist.insert(source, 0.0);
        heap.push(Reverse(QueueEntry { key: 0.0, node: source }));

        while let Some(Reverse(QueueEntry { key: cost, node })) = heap.pop() {
            if dist.get(&node).is_some_and(|&best| cost > best) {
                continue;
            }
            for route in network.neighbors(node) {
                let next = route.to;
                let new_cost = cost + route.weight();
                if dist.get(&next).is_none_or(|&best| new_cost < best) {
                    dist.insert(next, new_cost);
                    heap.push(Reverse(QueueEntry { key: new_cost, node: next }));
                }
            }
        }

        dist
    }
}

// ── AStarPathfinder ───────────────────────────────────────────────────────────

/// Heuristic-guided search: identical relaxation structure to
/// [`DijkstraPathfinder`], but the heap is ordered by
/// `known cost + heuristic(node, destination)`.
///
/// The heuristic is the great-circle distance between the two locations
/// converted to minutes at an 80 km/h reference speed.  It is an admissible
/// lower bound only while no route's effective speed exceeds 80 km/h at
/// congestion 1.0; that is an assumption on the input network, not something
/// this engine enforces.  On networks that violate it the search degrades to
/// best-effort rather than optimal.
pub struct AStarPathfinder;

impl AStarPathfinder {
    /// Straight-line lower bound in minutes from `a` to `b`.
    fn heuristic(network: &Network, a: LocationId, b: LocationId) -> f64 {
        match (network.location(a), network.location(b)) {
            (Some(from), Some(to)) => {
                from.position.distance_km(to.position) / HEURISTIC_SPEED_KMH * 60.0
            }
            _ => 0.0,
        }
    }
}

impl Pathfinder for AStarPathfinder {
    fn shortest_path(&self, network: &Network, from: LocationId, to: LocationId) -> Option<Path> {
        if network.location(from).is_none() || network.location(to).is_none() {
            return None;
        }

        let mut g_score: FxHashMap<LocationId, f64> = FxHashMap::default();
        let mut f_score: FxHashMap<LocationId, f64> = FxHashMap::default();
        let mut prev: FxHashMap<LocationId, LocationId> = FxHashMap::default();
        let mut open: BinaryHeap<Reverse<QueueEntry>> = BinaryHeap::new();

        g_score.insert(from, 0.0);
        let f0 = Self::heuristic(network, from, to);
        f_score.insert(from, f0);
        open.push(Reverse(QueueEntry { key: f0, node: from }));

        while let Some(Reverse(QueueEntry { key, node })) = open.pop() {
            if node == to {
                let cost = g_score.get(&to).copied().unwrap_or(0.0);
                return Some(reconstruct(network, &prev, to, cost));
            }

            if f_score.get(&node).is_some_and(|&best| key > best) {
                continue;
            }

            let g_node = g_score.get(&node).copied().unwrap_or(f64::INFINITY);
            for route in network.neighbors(node) {
                let next = route.to;
                let tentative = g_node + route.weight();
                if g_score.get(&next).is_none_or(|&best| tentative < best) {
                    prev.insert(next, node);
                    g_score.insert(next, tentative);
                    let f = tentative + Self::heuristic(network, next, to);
                    f_score.insert(next, f);
                    open.push(Reverse(QueueEntry { key: f, node: next }));
                }
            }
        }

        None
    }
}

// ── Path reconstruction ───────────────────────────────────────────────────────

/// Walk the predecessor map back from `to`, then sum the physical distance
/// of the traversed routes.
fn reconstruct(network: &Network, prev: &FxHashMap<LocationId, LocationId>, to: LocationId, total_min: f64) -> Path {
    let mut stops = vec![to];
    let mut cur = to;
    while let Some(&p) = prev.get(&cur) {
        stops.push(p);
        cur = p;
    }
    stops.reverse();

    let total_km = stops
        .windows(2)
        .filter_map(|leg| {
            network
                .neighbors(leg[0])
                .iter()
                .find(|r| r.to == leg[1])
                .map(|r| r.distance_km)
        })
        .sum();

    Path { stops, total_min, total_km }
}
