//! The demonstration topology: five UK cities, three dispatch centers, and
//! three recurring incident sites.

use erd_core::LocationId;
use erd_network::{Location, LocationKind, Network};

// ── Cities ────────────────────────────────────────────────────────────────────

pub const LONDON: LocationId = LocationId(1);
pub const MANCHESTER: LocationId = LocationId(2);
pub const BIRMINGHAM: LocationId = LocationId(3);
pub const LEEDS: LocationId = LocationId(4);
pub const LIVERPOOL: LocationId = LocationId(5);

// ── Dispatch centers ──────────────────────────────────────────────────────────

pub const DC_LONDON: LocationId = LocationId(10);
pub const DC_BIRMINGHAM: LocationId = LocationId(11);
pub const DC_MANCHESTER: LocationId = LocationId(12);

// ── Incident sites ────────────────────────────────────────────────────────────

pub const INDUSTRIAL_ESTATE: LocationId = LocationId(20);
pub const STADIUM: LocationId = LocationId(21);
pub const MOTORWAY_JUNCTION: LocationId = LocationId(22);

/// Build the full demonstration network.
///
/// City-to-city travel times are motorway estimates; the direct
/// London–Manchester link is deliberately slower than routing via
/// Birmingham, so shortest-path output is easy to eyeball.
pub fn build_network() -> Network {
    let mut net = Network::new();

    net.add_location(Location::new(LONDON, "London", LocationKind::City, 51.5074, -0.1278));
    net.add_location(Location::new(MANCHESTER, "Manchester", LocationKind::City, 53.4808, -2.2426));
    net.add_location(Location::new(BIRMINGHAM, "Birmingham", LocationKind::City, 52.4862, -1.8904));
    net.add_location(Location::new(LEEDS, "Leeds", LocationKind::City, 53.8008, -1.5491));
    net.add_location(Location::new(LIVERPOOL, "Liverpool", LocationKind::City, 53.4084, -2.9916));

    net.add_location(Location::new(DC_LONDON, "London Dispatch", LocationKind::DispatchCenter, 51.5155, -0.0922));
    net.add_location(Location::new(DC_BIRMINGHAM, "Birmingham Dispatch", LocationKind::DispatchCenter, 52.4797, -1.9026));
    net.add_location(Location::new(DC_MANCHESTER, "Manchester Dispatch", LocationKind::DispatchCenter, 53.4723, -2.2935));

    net.add_location(Location::new(INDUSTRIAL_ESTATE, "Industrial Estate", LocationKind::IncidentSite, 52.5101, -1.8320));
    net.add_location(Location::new(STADIUM, "Stadium", LocationKind::IncidentSite, 53.4631, -2.2913));
    net.add_location(Location::new(MOTORWAY_JUNCTION, "Motorway Junction", LocationKind::IncidentSite, 51.5890, -0.2270));

    // City backbone.
    net.add_connection(LONDON, BIRMINGHAM, 163.0, 120.0);
    net.add_connection(BIRMINGHAM, MANCHESTER, 135.0, 90.0);
    net.add_connection(LONDON, MANCHESTER, 290.0, 250.0);
    net.add_connection(MANCHESTER, LEEDS, 70.0, 60.0);
    net.add_connection(LEEDS, BIRMINGHAM, 185.0, 150.0);
    net.add_connection(MANCHESTER, LIVERPOOL, 55.0, 45.0);
    net.add_connection(LIVERPOOL, BIRMINGHAM, 160.0, 135.0);

    // Dispatch centers sit just off their city.
    net.add_connection(DC_LONDON, LONDON, 5.0, 10.0);
    net.add_connection(DC_BIRMINGHAM, BIRMINGHAM, 4.0, 8.0);
    net.add_connection(DC_MANCHESTER, MANCHESTER, 5.0, 9.0);

    // Incident sites hang off the nearest city.
    net.add_connection(INDUSTRIAL_ESTATE, BIRMINGHAM, 12.0, 18.0);
    net.add_connection(STADIUM, MANCHESTER, 8.0, 14.0);
    net.add_connection(MOTORWAY_JUNCTION, LONDON, 15.0, 20.0);

    net
}
