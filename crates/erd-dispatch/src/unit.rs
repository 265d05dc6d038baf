//! Mobile response units.

use std::fmt;

use erd_core::{IncidentId, LocationId, UnitId, UnitKind};

// ── UnitStatus ────────────────────────────────────────────────────────────────

/// Availability state of a response unit.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum UnitStatus {
    Available,
    Dispatched,
    OnScene,
    Returning,
}

impl UnitStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UnitStatus::Available => "available",
            UnitStatus::Dispatched => "dispatched",
            UnitStatus::OnScene => "on_scene",
            UnitStatus::Returning => "returning",
        }
    }
}

impl fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ResponseUnit ──────────────────────────────────────────────────────────────

/// A registered unit.  Created at registration, mutated only by the
/// assignment/completion transitions, never destroyed during a run.
#[derive(Clone, Debug)]
pub struct ResponseUnit {
    pub id: UnitId,
    pub call_sign: String,
    pub kind: UnitKind,
    pub location: LocationId,
    pub status: UnitStatus,
    pub current_incident: Option<IncidentId>,
}

impl ResponseUnit {
    pub fn new(id: UnitId, call_sign: impl Into<String>, kind: UnitKind, location: LocationId) -> Self {
        Self {
            id,
            call_sign: call_sign.into(),
            kind,
            location,
            status: UnitStatus::Available,
            current_incident: None,
        }
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.status == UnitStatus::Available
    }

    /// Bind to `incident` and move to `Dispatched`.
    pub(crate) fn assign(&mut self, incident: IncidentId) {
        self.current_incident = Some(incident);
        self.status = UnitStatus::Dispatched;
    }

    /// Clear the binding and return to `Available`.
    pub(crate) fn complete(&mut self) {
        self.current_incident = None;
        self.status = UnitStatus::Available;
    }
}

impl fmt::Display for ResponseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] at {} - {}", self.call_sign, self.kind, self.location, self.status)
    }
}
