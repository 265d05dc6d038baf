//! Unit tests for erd-network.
//!
//! All tests use a hand-crafted UK network so costs can be asserted exactly.

#[cfg(test)]
mod helpers {
    use erd_core::LocationId;

    use crate::{Location, LocationKind, Network};

    pub const LONDON: LocationId = LocationId(1);
    pub const MANCHESTER: LocationId = LocationId(2);
    pub const BIRMINGHAM: LocationId = LocationId(3);

    /// London–Birmingham–Manchester triangle.
    ///
    /// ```text
    /// London–Birmingham     163 km, 120 min
    /// Birmingham–Manchester 135 km,  90 min
    /// London–Manchester     290 km, 250 min (direct, slower)
    /// ```
    ///
    /// Shortest London→Manchester is via Birmingham: 210 min.
    pub fn uk_triangle() -> Network {
        let mut net = Network::new();
        net.add_location(Location::new(LONDON, "London", LocationKind::City, 51.5074, -0.1278));
        net.add_location(Location::new(MANCHESTER, "Manchester", LocationKind::City, 53.4808, -2.2426));
        net.add_location(Location::new(BIRMINGHAM, "Birmingham", LocationKind::City, 52.4862, -1.8904));

        net.add_connection(LONDON, BIRMINGHAM, 163.0, 120.0);
        net.add_connection(BIRMINGHAM, MANCHESTER, 135.0, 90.0);
        net.add_connection(LONDON, MANCHESTER, 290.0, 250.0);
        net
    }
}

// ── Network structure ─────────────────────────────────────────────────────────

#[cfg(test)]
mod network {
    use erd_core::LocationId;

    use super::helpers::{BIRMINGHAM, LONDON, MANCHESTER, uk_triangle};
    use crate::{Location, LocationKind};

    #[test]
    fn counts() {
        let net = uk_triangle();
        assert_eq!(net.location_count(), 3);
        assert_eq!(net.edge_count(), 3); // 6 directed routes
    }

    #[test]
    fn add_location_is_idempotent() {
        let mut net = uk_triangle();
        net.add_location(Location::new(LONDON, "Londinium", LocationKind::IncidentSite, 0.0, 0.0));
        assert_eq!(net.location_count(), 3);
        // First registration wins.
        assert_eq!(net.location(LONDON).unwrap().name, "London");
    }

    #[test]
    fn remove_location_purges_inbound_routes() {
        let mut net = uk_triangle();
        net.remove_location(BIRMINGHAM);

        assert_eq!(net.location_count(), 2);
        assert!(net.location(BIRMINGHAM).is_none());
        // No surviving adjacency list still points at Birmingham.
        for loc in [LONDON, MANCHESTER] {
            assert!(net.neighbors(loc).iter().all(|r| r.to != BIRMINGHAM));
        }
        // The direct London–Manchester connection survives.
        assert_eq!(net.edge_count(), 1);
    }

    #[test]
    fn remove_unknown_location_is_noop() {
        let mut net = uk_triangle();
        net.remove_location(LocationId(99));
        assert_eq!(net.location_count(), 3);
        assert_eq!(net.edge_count(), 3);
    }

    #[test]
    fn connection_with_unknown_endpoint_is_noop() {
        let mut net = uk_triangle();
        net.add_connection(LONDON, LocationId(99), 10.0, 10.0);
        assert_eq!(net.edge_count(), 3);
        assert!(net.neighbors(LONDON).iter().all(|r| r.to != LocationId(99)));
    }

    #[test]
    fn congestion_update_and_clamp() {
        let mut net = uk_triangle();

        net.update_congestion(LONDON, BIRMINGHAM, 2.0);
        let out = net.neighbors(LONDON).iter().find(|r| r.to == BIRMINGHAM).unwrap();
        assert_eq!(out.congestion(), 2.0);
        assert_eq!(out.weight(), 240.0);

        // The reverse direction is an independent route.
        let back = net.neighbors(BIRMINGHAM).iter().find(|r| r.to == LONDON).unwrap();
        assert_eq!(back.congestion(), 1.0);

        // Clamped to the 1.0 floor — congestion never speeds travel up.
        net.update_congestion(LONDON, BIRMINGHAM, 0.25);
        let out = net.neighbors(LONDON).iter().find(|r| r.to == BIRMINGHAM).unwrap();
        assert_eq!(out.congestion(), 1.0);
    }

    #[test]
    fn congestion_on_missing_route_is_noop() {
        let mut net = uk_triangle();
        net.update_congestion(LocationId(99), LONDON, 3.0);
        net.remove_location(BIRMINGHAM);
        net.update_congestion(LONDON, BIRMINGHAM, 3.0); // route gone
        assert_eq!(net.edge_count(), 1);
    }

    #[test]
    fn neighbors_of_unknown_location_is_empty() {
        let net = uk_triangle();
        assert!(net.neighbors(LocationId(42)).is_empty());
    }

    #[test]
    fn dispatch_centers_filter_sorted() {
        let mut net = uk_triangle();
        net.add_location(Location::new(LocationId(20), "North DC", LocationKind::DispatchCenter, 53.5, -2.3));
        net.add_location(Location::new(LocationId(10), "South DC", LocationKind::DispatchCenter, 51.5, -0.2));
        assert_eq!(net.dispatch_centers(), vec![LocationId(10), LocationId(20)]);
    }

    #[test]
    fn location_equality_is_by_id() {
        let a = Location::new(LONDON, "London", LocationKind::City, 51.5, -0.1);
        let b = Location::new(LONDON, "Renamed", LocationKind::IncidentSite, 0.0, 0.0);
        assert_eq!(a, b);
    }
}

// ── Uniform-cost search ───────────────────────────────────────────────────────

#[cfg(test)]
mod dijkstra {
    use erd_core::LocationId;

    use super::helpers::{BIRMINGHAM, LONDON, MANCHESTER, uk_triangle};
    use crate::{DijkstraPathfinder, Location, LocationKind, Pathfinder};

    #[test]
    fn routes_via_birmingham() {
        let net = uk_triangle();
        let path = DijkstraPathfinder.shortest_path(&net, LONDON, MANCHESTER).unwrap();

        assert_eq!(path.stops, vec![LONDON, BIRMINGHAM, MANCHESTER]);
        assert!((path.total_min - 210.0).abs() < 1e-9);
        assert!((path.total_km - 298.0).abs() < 1e-9); // 163 + 135
    }

    #[test]
    fn trivial_same_location() {
        let net = uk_triangle();
        let path = DijkstraPathfinder.shortest_path(&net, LONDON, LONDON).unwrap();
        assert!(path.is_trivial());
        assert_eq!(path.total_min, 0.0);
        assert_eq!(path.total_km, 0.0);
    }

    #[test]
    fn unreachable_is_none() {
        let mut net = uk_triangle();
        let isolated = LocationId(50);
        net.add_location(Location::new(isolated, "Isolated", LocationKind::City, 55.0, -3.0));
        assert!(DijkstraPathfinder.shortest_path(&net, LONDON, isolated).is_none());
        assert!(DijkstraPathfinder.shortest_path(&net, isolated, LONDON).is_none());
    }

    #[test]
    fn unknown_endpoint_is_none() {
        let net = uk_triangle();
        assert!(DijkstraPathfinder.shortest_path(&net, LONDON, LocationId(99)).is_none());
    }

    #[test]
    fn congestion_reroutes_to_direct_edge() {
        let mut net = uk_triangle();
        // Via Birmingham: 120×2 + 90 = 330 > direct 250.
        net.update_congestion(LONDON, BIRMINGHAM, 2.0);
        let path = DijkstraPathfinder.shortest_path(&net, LONDON, MANCHESTER).unwrap();
        assert_eq!(path.stops, vec![LONDON, MANCHESTER]);
        assert!((path.total_min - 250.0).abs() < 1e-9);
    }

    #[test]
    fn congestion_never_lowers_optimal_cost() {
        let mut net = uk_triangle();
        let before = DijkstraPathfinder
            .shortest_path(&net, LONDON, MANCHESTER)
            .unwrap()
            .total_min;

        for factor in [1.1, 1.5, 2.0, 5.0] {
            net.update_congestion(LONDON, BIRMINGHAM, factor);
            let after = DijkstraPathfinder
                .shortest_path(&net, LONDON, MANCHESTER)
                .unwrap()
                .total_min;
            assert!(after >= before, "factor {factor}: {after} < {before}");
        }
    }

    #[test]
    fn distance_map_covers_reachable_set() {
        let mut net = uk_triangle();
        let isolated = LocationId(50);
        net.add_location(Location::new(isolated, "Isolated", LocationKind::City, 55.0, -3.0));

        let dist = DijkstraPathfinder.distance_map(&net, LONDON);
        assert_eq!(dist[&LONDON], 0.0);
        assert!((dist[&BIRMINGHAM] - 120.0).abs() < 1e-9);
        assert!((dist[&MANCHESTER] - 210.0).abs() < 1e-9);
        assert!(!dist.contains_key(&isolated));
    }
}

// ── Heuristic-guided search ───────────────────────────────────────────────────

#[cfg(test)]
mod astar {
    use erd_core::LocationId;

    use super::helpers::{BIRMINGHAM, LONDON, MANCHESTER, uk_triangle};
    use crate::{AStarPathfinder, DijkstraPathfinder, Location, LocationKind, Pathfinder};

    #[test]
    fn matches_uniform_cost_on_scenario() {
        let net = uk_triangle();
        let path = AStarPathfinder.shortest_path(&net, LONDON, MANCHESTER).unwrap();
        assert_eq!(path.stops, vec![LONDON, BIRMINGHAM, MANCHESTER]);
        assert!((path.total_min - 210.0).abs() < 1e-9);
    }

    #[test]
    fn cost_parity_across_all_pairs() {
        let net = uk_triangle();
        let ids = [LONDON, MANCHESTER, BIRMINGHAM];
        for from in ids {
            for to in ids {
                let d = DijkstraPathfinder.shortest_path(&net, from, to);
                let a = AStarPathfinder.shortest_path(&net, from, to);
                match (d, a) {
                    (Some(d), Some(a)) => {
                        assert!(
                            (d.total_min - a.total_min).abs() < 1e-9,
                            "{from}->{to}: dijkstra {} vs astar {}",
                            d.total_min,
                            a.total_min
                        );
                    }
                    (None, None) => {}
                    (d, a) => panic!("{from}->{to}: reachability disagrees ({d:?} vs {a:?})"),
                }
            }
        }
    }

    #[test]
    fn no_path_agreement() {
        let mut net = uk_triangle();
        let isolated = LocationId(50);
        net.add_location(Location::new(isolated, "Isolated", LocationKind::City, 55.0, -3.0));
        assert!(AStarPathfinder.shortest_path(&net, LONDON, isolated).is_none());
    }

    #[test]
    fn trivial_same_location() {
        let net = uk_triangle();
        let path = AStarPathfinder.shortest_path(&net, BIRMINGHAM, BIRMINGHAM).unwrap();
        assert!(path.is_trivial());
        assert_eq!(path.total_min, 0.0);
    }
}
