//! Dispatch-outcome recording and derived statistics.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use erd_dispatch::{DispatchEvent, DispatchObserver, Incident, Strategy};

// ── DispatchRow ───────────────────────────────────────────────────────────────

/// One successful dispatch, flattened for export.  Field names double as the
/// CSV header.
#[derive(Clone, Debug, Serialize)]
pub struct DispatchRow {
    pub incident_id: u32,
    pub severity: u8,
    pub unit_id: u32,
    pub response_min: f64,
    pub path_km: f64,
    pub strategy: &'static str,
}

impl From<&DispatchEvent> for DispatchRow {
    fn from(event: &DispatchEvent) -> Self {
        Self {
            incident_id: event.incident_id.0,
            severity: event.severity,
            unit_id: event.unit_id.0,
            response_min: event.response_min,
            path_km: event.path_km,
            strategy: event.strategy.as_str(),
        }
    }
}

// ── StrategyStats ─────────────────────────────────────────────────────────────

/// Per-strategy comparison line.
#[derive(Clone, Debug)]
pub struct StrategyStats {
    pub strategy: &'static str,
    pub dispatches: usize,
    pub avg_response_min: f64,
    pub avg_path_km: f64,
    /// Accumulated candidate-search time divided by dispatch count.
    pub avg_search_nanos: u64,
}

// ── MetricsRecorder ───────────────────────────────────────────────────────────

/// Accumulates dispatch outcomes and answers summary queries.
#[derive(Default)]
pub struct MetricsRecorder {
    history: Vec<DispatchRow>,
    failed: usize,
    search_nanos: BTreeMap<&'static str, u64>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Counters ──────────────────────────────────────────────────────────

    pub fn successful_dispatches(&self) -> usize {
        self.history.len()
    }

    pub fn failed_dispatches(&self) -> usize {
        self.failed
    }

    pub fn total_incidents(&self) -> usize {
        self.history.len() + self.failed
    }

    /// Percentage of incidents that found a unit; 0.0 before any outcome.
    pub fn success_rate(&self) -> f64 {
        if self.total_incidents() == 0 {
            return 0.0;
        }
        self.history.len() as f64 / self.total_incidents() as f64 * 100.0
    }

    // ── Aggregates ────────────────────────────────────────────────────────

    pub fn average_response_min(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        self.history.iter().map(|r| r.response_min).sum::<f64>() / self.history.len() as f64
    }

    /// Mean response time per severity, keyed ascending.
    pub fn response_by_severity(&self) -> BTreeMap<u8, f64> {
        let mut sums: BTreeMap<u8, (f64, usize)> = BTreeMap::new();
        for row in &self.history {
            let entry = sums.entry(row.severity).or_insert((0.0, 0));
            entry.0 += row.response_min;
            entry.1 += 1;
        }
        sums.into_iter().map(|(sev, (sum, n))| (sev, sum / n as f64)).collect()
    }

    /// Per-strategy dispatch counts and averages, in strategy-name order.
    pub fn strategy_comparison(&self) -> Vec<StrategyStats> {
        let mut grouped: BTreeMap<&'static str, (usize, f64, f64)> = BTreeMap::new();
        for row in &self.history {
            let entry = grouped.entry(row.strategy).or_insert((0, 0.0, 0.0));
            entry.0 += 1;
            entry.1 += row.response_min;
            entry.2 += row.path_km;
        }

        grouped
            .into_iter()
            .map(|(strategy, (n, min_sum, km_sum))| StrategyStats {
                strategy,
                dispatches: n,
                avg_response_min: min_sum / n as f64,
                avg_path_km: km_sum / n as f64,
                avg_search_nanos: self.search_nanos.get(strategy).copied().unwrap_or(0)
                    / n.max(1) as u64,
            })
            .collect()
    }

    /// The recorded dispatch log, oldest first.
    pub fn rows(&self) -> &[DispatchRow] {
        &self.history
    }
}

impl DispatchObserver for MetricsRecorder {
    fn on_dispatch(&mut self, event: &DispatchEvent) {
        self.history.push(DispatchRow::from(event));
    }

    fn on_failed_dispatch(&mut self, _incident: &Incident) {
        self.failed += 1;
    }

    fn on_search(&mut self, strategy: Strategy, nanos: u64) {
        *self.search_nanos.entry(strategy.as_str()).or_insert(0) += nanos;
    }
}

impl fmt::Display for MetricsRecorder {
    /// Performance report: overall statistics, severity breakdown, strategy
    /// comparison, and the last five dispatches.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== dispatch performance ===")?;
        writeln!(
            f,
            "incidents: {} ({} dispatched, {} failed, {:.2}% success)",
            self.total_incidents(),
            self.successful_dispatches(),
            self.failed_dispatches(),
            self.success_rate()
        )?;
        writeln!(f, "average response: {:.2} min", self.average_response_min())?;

        for (severity, avg) in self.response_by_severity().iter().rev() {
            writeln!(f, "severity {severity}: {avg:.2} min")?;
        }

        for stats in self.strategy_comparison() {
            writeln!(
                f,
                "{}: {} dispatches, {:.2} min avg, {:.2} km avg, {:.3} ms search",
                stats.strategy,
                stats.dispatches,
                stats.avg_response_min,
                stats.avg_path_km,
                stats.avg_search_nanos as f64 / 1_000_000.0
            )?;
        }

        if !self.history.is_empty() {
            writeln!(f, "recent dispatches:")?;
            for row in self.history.iter().rev().take(5) {
                writeln!(
                    f,
                    "  incident {}: {:.2} min (severity {})",
                    row.incident_id, row.response_min, row.severity
                )?;
            }
        }
        Ok(())
    }
}
