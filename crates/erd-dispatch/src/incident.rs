//! Reported emergencies and their lifecycle.

use std::fmt;

use erd_core::{IncidentId, IncidentKind, LocationId, Timestamp, UnitId};

// ── IncidentStatus ────────────────────────────────────────────────────────────

/// Lifecycle state of an incident.
///
/// `Reported → Assigned → Resolved` is the path the dispatcher drives today;
/// `InProgress` is reserved for a future on-scene phase and is never entered
/// by the scheduler.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum IncidentStatus {
    Reported,
    Assigned,
    InProgress,
    Resolved,
}

impl IncidentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            IncidentStatus::Reported => "reported",
            IncidentStatus::Assigned => "assigned",
            IncidentStatus::InProgress => "in_progress",
            IncidentStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Incident ──────────────────────────────────────────────────────────────────

/// A reported emergency awaiting (or receiving) response.
///
/// Scheduling priority is (severity descending, reported_at ascending) —
/// most severe first, ties first-come-first-served.
#[derive(Clone, Debug)]
pub struct Incident {
    pub id: IncidentId,
    pub location: LocationId,
    pub kind: IncidentKind,
    severity: u8,
    pub reported_at: Timestamp,
    pub status: IncidentStatus,
    pub assigned_unit: Option<UnitId>,
}

impl Incident {
    /// Create a freshly reported incident.  Severity outside `[1, 5]` is
    /// clamped, not rejected.
    pub fn new(
        id: IncidentId,
        location: LocationId,
        kind: IncidentKind,
        severity: i32,
        reported_at: Timestamp,
    ) -> Self {
        Self {
            id,
            location,
            kind,
            severity: severity.clamp(1, 5) as u8,
            reported_at,
            status: IncidentStatus::Reported,
            assigned_unit: None,
        }
    }

    /// Severity in `[1, 5]`; 5 is most severe.
    #[inline]
    pub fn severity(&self) -> u8 {
        self.severity
    }

    /// Bind `unit` and move to `Assigned`.
    pub(crate) fn assign(&mut self, unit: UnitId) {
        self.assigned_unit = Some(unit);
        self.status = IncidentStatus::Assigned;
    }

    /// Move to `Resolved` (the unit binding is kept for the record).
    pub(crate) fn resolve(&mut self) {
        self.status = IncidentStatus::Resolved;
    }
}

impl fmt::Display for Incident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} at {} (severity {}, {})",
            self.id, self.kind, self.location, self.severity, self.status
        )
    }
}
