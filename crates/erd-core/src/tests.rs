//! Unit tests for erd-core.

#[cfg(test)]
mod ids {
    use crate::{IncidentId, LocationId, UnitId};

    #[test]
    fn display_carries_type_name() {
        assert_eq!(LocationId(3).to_string(), "LocationId(3)");
        assert_eq!(IncidentId(17).to_string(), "IncidentId(17)");
        assert_eq!(UnitId(0).to_string(), "UnitId(0)");
    }

    #[test]
    fn ordering_and_from() {
        assert!(LocationId(1) < LocationId(2));
        assert_eq!(UnitId::from(9), UnitId(9));
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    const LONDON: GeoPoint = GeoPoint { lat: 51.5074, lon: -0.1278 };
    const BIRMINGHAM: GeoPoint = GeoPoint { lat: 52.4862, lon: -1.8904 };

    #[test]
    fn haversine_london_birmingham() {
        // Great-circle distance is ~163 km.
        let d = LONDON.distance_km(BIRMINGHAM);
        assert!((d - 162.5).abs() < 2.0, "got {d}");
    }

    #[test]
    fn haversine_is_symmetric() {
        let fwd = LONDON.distance_km(BIRMINGHAM);
        let rev = BIRMINGHAM.distance_km(LONDON);
        assert!((fwd - rev).abs() < 1e-9);
    }

    #[test]
    fn zero_distance_to_self() {
        assert_eq!(LONDON.distance_km(LONDON), 0.0);
    }
}

#[cfg(test)]
mod kinds {
    use crate::{IncidentKind, UnitKind};

    const ALL_INCIDENTS: [IncidentKind; 5] = [
        IncidentKind::Fire,
        IncidentKind::Medical,
        IncidentKind::Police,
        IncidentKind::Hazmat,
        IncidentKind::Rescue,
    ];

    #[test]
    fn ground_units_serve_exactly_one_kind() {
        let pairs = [
            (UnitKind::Ambulance, IncidentKind::Medical),
            (UnitKind::FireTruck, IncidentKind::Fire),
            (UnitKind::PoliceCar, IncidentKind::Police),
            (UnitKind::HazmatTeam, IncidentKind::Hazmat),
        ];
        for (unit, served) in pairs {
            for incident in ALL_INCIDENTS {
                assert_eq!(unit.can_respond_to(incident), incident == served, "{unit} vs {incident}");
            }
        }
    }

    #[test]
    fn helicopter_serves_everything() {
        for incident in ALL_INCIDENTS {
            assert!(UnitKind::RescueHelicopter.can_respond_to(incident));
        }
    }

    #[test]
    fn rescue_is_helicopter_only() {
        let ground = [
            UnitKind::Ambulance,
            UnitKind::FireTruck,
            UnitKind::PoliceCar,
            UnitKind::HazmatTeam,
        ];
        for unit in ground {
            assert!(!unit.can_respond_to(IncidentKind::Rescue));
        }
    }
}

#[cfg(test)]
mod time {
    use crate::Timestamp;
    use crate::time::{DAY_SECS, HOUR_SECS};

    /// 2024-01-01 00:00 UTC — a Monday.
    const MONDAY: Timestamp = Timestamp(1_704_067_200);

    #[test]
    fn epoch_is_thursday() {
        assert_eq!(Timestamp(0).day_of_week(), 3);
    }

    #[test]
    fn monday_is_zero() {
        assert_eq!(MONDAY.day_of_week(), 0);
        assert_eq!(MONDAY.plus_hours(24 * 6).day_of_week(), 6); // Sunday
    }

    #[test]
    fn hour_of_day() {
        assert_eq!(MONDAY.hour_of_day(), 0);
        assert_eq!(MONDAY.plus_hours(8).hour_of_day(), 8);
        assert_eq!(MONDAY.plus_hours(25).hour_of_day(), 1);
    }

    #[test]
    fn deltas_truncate_toward_zero() {
        let t = Timestamp(MONDAY.0 + 2 * HOUR_SECS - 1);
        assert_eq!(t.hours_since(MONDAY), 1);

        let d = Timestamp(MONDAY.0 + 2 * DAY_SECS - 1);
        assert_eq!(d.days_since(MONDAY), 1);
    }

    #[test]
    fn arithmetic_helpers() {
        assert_eq!(MONDAY.plus_minutes(90).0, MONDAY.0 + 5_400);
        assert_eq!(MONDAY.plus_hours(-1).hour_of_day(), 23);
    }

    #[test]
    fn display_day_and_clock() {
        let t = Timestamp(DAY_SECS + 8 * HOUR_SECS + 30 * 60);
        assert_eq!(t.to_string(), "d1 08:30");
    }
}
