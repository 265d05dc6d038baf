//! Incident and response-unit categories, shared across the workspace.
//!
//! The capability matrix lives here with the enums: which unit kinds can
//! serve which incident kinds is a fixed property of the domain, not a
//! configurable policy.

use std::fmt;

// ── IncidentKind ──────────────────────────────────────────────────────────────

/// Category of a reported emergency.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum IncidentKind {
    Fire,
    Medical,
    Police,
    Hazmat,
    Rescue,
}

impl IncidentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IncidentKind::Fire => "fire",
            IncidentKind::Medical => "medical",
            IncidentKind::Police => "police",
            IncidentKind::Hazmat => "hazmat",
            IncidentKind::Rescue => "rescue",
        }
    }
}

impl fmt::Display for IncidentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── UnitKind ──────────────────────────────────────────────────────────────────

/// Category of a mobile response unit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum UnitKind {
    Ambulance,
    FireTruck,
    PoliceCar,
    HazmatTeam,
    RescueHelicopter,
}

impl UnitKind {
    /// Fixed capability rule.  Each ground unit serves exactly one incident
    /// kind; a rescue helicopter serves anything — which makes it the only
    /// unit kind that can answer a `Rescue` incident.
    pub fn can_respond_to(self, incident: IncidentKind) -> bool {
        match self {
            UnitKind::Ambulance => incident == IncidentKind::Medical,
            UnitKind::FireTruck => incident == IncidentKind::Fire,
            UnitKind::PoliceCar => incident == IncidentKind::Police,
            UnitKind::HazmatTeam => incident == IncidentKind::Hazmat,
            UnitKind::RescueHelicopter => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnitKind::Ambulance => "ambulance",
            UnitKind::FireTruck => "fire_truck",
            UnitKind::PoliceCar => "police_car",
            UnitKind::HazmatTeam => "hazmat_team",
            UnitKind::RescueHelicopter => "rescue_helicopter",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
