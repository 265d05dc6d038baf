//! Hotspot scoring and incident forecasting.
//!
//! # Scoring model
//!
//! Every record contributes with an exponential time decay
//! `exp(-hoursAgo / 168)` — about one week to fall to 1/e — so chronic
//! history fades while recent clusters dominate.  Three decayed signals
//! (frequency, severity, time-of-day proximity) are blended 0.4/0.4/0.2 and
//! boosted 1.5× when more than three records landed inside the last 24 h.
//!
//! Scores are recomputed from scratch on every recording; with per-location
//! histories in the hundreds this costs microseconds and avoids incremental
//! drift.

use std::fmt;

use rustc_hash::FxHashMap;

use erd_core::{IncidentKind, LocationId, Timestamp};

/// Decay constant in hours (one week).
const DECAY_HOURS: f64 = 168.0;

/// More than this many records inside 24 h marks a surge.
const SURGE_THRESHOLD: usize = 3;
const SURGE_MULTIPLIER: f64 = 1.5;

// ── Records & scores ──────────────────────────────────────────────────────────

/// One historical incident at a location.
#[derive(Copy, Clone, Debug)]
pub struct IncidentRecord {
    pub kind: IncidentKind,
    pub severity: u8,
    pub at: Timestamp,
}

/// A location's current demand score.
#[derive(Copy, Clone, Debug)]
pub struct HotspotScore {
    pub location: LocationId,
    pub score: f64,
    pub incident_count: usize,
}

impl fmt::Display for HotspotScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2} (n={})", self.location, self.score, self.incident_count)
    }
}

// ── PredictiveAnalyzer ────────────────────────────────────────────────────────

/// Per-location incident history and the demand model derived from it.
#[derive(Default)]
pub struct PredictiveAnalyzer {
    history: FxHashMap<LocationId, Vec<IncidentRecord>>,
    hotspots: FxHashMap<LocationId, HotspotScore>,
}

impl PredictiveAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an incident to `location`'s history and recompute every
    /// location's hotspot score with `at` as the reference clock.
    pub fn record_incident(
        &mut self,
        location: LocationId,
        kind: IncidentKind,
        severity: u8,
        at: Timestamp,
    ) {
        self.history
            .entry(location)
            .or_default()
            .push(IncidentRecord { kind, severity, at });
        self.update_hotspots(at);
    }

    /// Recompute all hotspot scores against `now`.
    pub fn update_hotspots(&mut self, now: Timestamp) {
        self.hotspots.clear();
        for (&location, records) in &self.history {
            self.hotspots.insert(
                location,
                HotspotScore {
                    location,
                    score: hotspot_score(records, now),
                    incident_count: records.len(),
                },
            );
        }
    }

    /// The `n` highest-scoring locations, descending.  Only locations with
    /// recorded history appear — a never-hit location is absent, not
    /// zero-scored.
    pub fn top_hotspots(&self, n: usize) -> Vec<HotspotScore> {
        let mut scores: Vec<HotspotScore> = self.hotspots.values().copied().collect();
        scores.sort_unstable_by(|a, b| {
            b.score.total_cmp(&a.score).then_with(|| a.location.cmp(&b.location))
        });
        scores.truncate(n);
        scores
    }

    /// Probability estimate that `location` sees an incident around
    /// `hours_ahead` hours after `now`, in `[0, 1]`.  Returns 0.0 with no
    /// history — insufficient data, not a real signal.
    pub fn predict_incident_probability(
        &self,
        location: LocationId,
        hours_ahead: i64,
        now: Timestamp,
    ) -> f64 {
        let Some(records) = self.history.get(&location) else {
            return 0.0;
        };
        let Some(first) = records.first() else {
            return 0.0;
        };

        let target = now.plus_hours(hours_ahead);
        let target_hour = target.hour_of_day() as i64;
        let matching = records
            .iter()
            .filter(|r| {
                (r.at.hour_of_day() as i64 - target_hour).abs() <= 2
                    && r.at.day_of_week() == target.day_of_week()
            })
            .count();

        let base_rate = records.len() as f64 / now.days_since(first.at).max(1) as f64;
        let pattern_factor = 1.0 + matching as f64 / records.len() as f64;

        (base_rate * pattern_factor).min(1.0)
    }

    /// Distribute `total_units` across the current top hotspots in
    /// proportion to score share, flooring each at one unit.  The floor plus
    /// ceiling rounding can over-allocate the nominal total; that is
    /// accepted, not corrected.
    pub fn suggest_resource_allocation(&self, total_units: usize) -> Vec<(LocationId, usize)> {
        let hotspots = self.top_hotspots(total_units);
        let total_score: f64 = hotspots.iter().map(|h| h.score).sum();

        hotspots
            .iter()
            .map(|h| {
                let units = if total_score > 0.0 {
                    ((h.score / total_score) * total_units as f64).ceil() as usize
                } else {
                    0
                };
                (h.location, units.max(1))
            })
            .collect()
    }

    /// Full history of a location, oldest first.  Empty for unknown ids.
    pub fn records(&self, location: LocationId) -> &[IncidentRecord] {
        self.history.get(&location).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn tracked_location_count(&self) -> usize {
        self.history.len()
    }

    pub fn total_record_count(&self) -> usize {
        self.history.values().map(Vec::len).sum()
    }
}

impl fmt::Display for PredictiveAnalyzer {
    /// Textual analysis summary: counts plus the current top five.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== predictive analysis ===")?;
        writeln!(f, "locations tracked: {}", self.tracked_location_count())?;
        writeln!(f, "historical incidents: {}", self.total_record_count())?;
        for (i, hotspot) in self.top_hotspots(5).iter().enumerate() {
            writeln!(f, "{}. {hotspot}", i + 1)?;
        }
        Ok(())
    }
}

// ── Scoring internals ─────────────────────────────────────────────────────────

fn hotspot_score(records: &[IncidentRecord], now: Timestamp) -> f64 {
    if records.is_empty() {
        return 0.0;
    }

    let mut frequency = 0.0;
    let mut severity = 0.0;
    let mut time_score = 0.0;
    let mut recent = 0usize;

    let now_hour = now.hour_of_day() as i64;
    for record in records {
        let hours_ago = now.hours_since(record.at);
        let decay = (-(hours_ago as f64) / DECAY_HOURS).exp();

        frequency += decay;
        severity += record.severity as f64 * decay;

        let hour_diff = (record.at.hour_of_day() as i64 - now_hour).abs();
        time_score += (24 - hour_diff) as f64 / 24.0 * decay;

        if hours_ago < 24 {
            recent += 1;
        }
    }

    let n = records.len().max(1) as f64;
    frequency /= n;
    severity /= 5.0 * n;
    time_score /= n;

    let surge = if recent > SURGE_THRESHOLD { SURGE_MULTIPLIER } else { 1.0 };

    (frequency * 0.4 + severity * 0.4 + time_score * 0.2) * surge * 100.0
}
