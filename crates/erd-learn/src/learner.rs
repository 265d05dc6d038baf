//! The adaptive weight learner.
//!
//! # Model
//!
//! Per directed edge the learner keeps two things:
//!
//! - a bounded sliding window of the most recent observations (oldest
//!   evicted first), from which the time-pattern factors are computed, and
//! - a single scalar "learned weight", updated on every observation by
//!   exponential moving average and seeded to the first observation.
//!
//! # Congestion estimate
//!
//! A query `(edge, timestamp)` blends three signals, each a ratio of a
//! conditional mean against the window's overall mean (divisor floored at
//! 0.1 so near-zero data cannot blow the ratio up):
//!
//! | Signal      | Weight | Conditional slice                              |
//! |-------------|--------|------------------------------------------------|
//! | time-of-day | 0.4    | observations within ±2 clock hours of the query |
//! | day-of-week | 0.3    | observations on the query's weekday             |
//! | trend       | 0.3    | OLS slope over the last ≤5 observations         |
//!
//! An edge with no observations answers the neutral 1.0.  Hour distance is
//! plain `|a − b|`, not circular: 23:00 and 01:00 are 22 hours apart.

use std::collections::VecDeque;
use std::fmt;

use rustc_hash::FxHashMap;

use erd_core::{LocationId, Timestamp};

use crate::error::LearnError;

/// Directed edge key: `(source, destination)` location ids.
type EdgeKey = (LocationId, LocationId);

/// Floor for every mean used as a divisor.
const MIN_MEAN_DIVISOR: f64 = 0.1;

/// How many trailing observations feed the trend fit.
const TREND_WINDOW: usize = 5;

// ── Observations ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
struct Observation {
    travel_min: f64,
    at: Timestamp,
}

#[derive(Default)]
struct EdgeHistory {
    window: VecDeque<Observation>,
}

impl EdgeHistory {
    fn push(&mut self, obs: Observation, cap: usize) {
        if self.window.len() == cap {
            self.window.pop_front();
        }
        self.window.push_back(obs);
    }

    fn mean(&self) -> f64 {
        if self.window.is_empty() {
            return 0.0;
        }
        self.window.iter().map(|o| o.travel_min).sum::<f64>() / self.window.len() as f64
    }
}

// ── Statistics bundle ─────────────────────────────────────────────────────────

/// Snapshot of the learner's reporting surface.
#[derive(Copy, Clone, Debug)]
pub struct LearnerStats {
    pub edges_learned: usize,
    pub total_observations: usize,
    pub learning_rate: f64,
    pub window_size: usize,
    /// `100 × (1 − mean(|predicted − actual| / actual))` over all edges with
    /// both a prediction and observations.  Systematically wrong predictions
    /// push this negative; it is reported as-is, never clamped.
    pub average_accuracy_pct: f64,
}

// ── AdaptiveWeightLearner ─────────────────────────────────────────────────────

/// Learns per-edge travel behavior from observed travel times.
pub struct AdaptiveWeightLearner {
    histories: FxHashMap<EdgeKey, EdgeHistory>,
    learned: FxHashMap<EdgeKey, f64>,
    learning_rate: f64,
    window_size: usize,
}

impl AdaptiveWeightLearner {
    /// `learning_rate` must be in `(0, 1]`, `window_size` at least 1.
    pub fn new(learning_rate: f64, window_size: usize) -> Result<Self, LearnError> {
        if !(learning_rate > 0.0 && learning_rate <= 1.0) {
            return Err(LearnError::InvalidLearningRate(learning_rate));
        }
        if window_size == 0 {
            return Err(LearnError::InvalidWindowSize(window_size));
        }
        Ok(Self {
            histories: FxHashMap::default(),
            learned: FxHashMap::default(),
            learning_rate,
            window_size,
        })
    }

    // ── Ingestion ─────────────────────────────────────────────────────────

    /// Record an observed travel time (minutes) for the directed edge
    /// `from → to`, evicting the oldest window entry once full, and fold the
    /// observation into the edge's EMA weight.
    pub fn record_travel_time(
        &mut self,
        from: LocationId,
        to: LocationId,
        travel_min: f64,
        at: Timestamp,
    ) {
        let key = (from, to);
        self.histories
            .entry(key)
            .or_default()
            .push(Observation { travel_min, at }, self.window_size);

        let weight = self.learned.entry(key).or_insert(travel_min);
        *weight = self.learning_rate * travel_min + (1.0 - self.learning_rate) * *weight;
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Time-context-aware congestion estimate for `from → to` at `at`.
    ///
    /// Neutral 1.0 for an edge with no observations.  The estimate is
    /// advisory — nothing here writes it back into a network.
    pub fn congestion_factor(&self, from: LocationId, to: LocationId, at: Timestamp) -> f64 {
        let Some(history) = self.histories.get(&(from, to)) else {
            return 1.0;
        };
        if history.window.is_empty() {
            return 1.0;
        }

        let overall = history.mean().max(MIN_MEAN_DIVISOR);

        let time_of_day = conditional_ratio(history, overall, |o| {
            (o.at.hour_of_day() as i64 - at.hour_of_day() as i64).abs() <= 2
        });
        let day_of_week =
            conditional_ratio(history, overall, |o| o.at.day_of_week() == at.day_of_week());
        let trend = trend_factor(history);

        time_of_day * 0.4 + day_of_week * 0.3 + trend * 0.3
    }

    /// The EMA-learned weight for `from → to`, if any observation has been
    /// recorded.
    pub fn predicted_weight(&self, from: LocationId, to: LocationId) -> Option<f64> {
        self.learned.get(&(from, to)).copied()
    }

    pub fn stats(&self) -> LearnerStats {
        LearnerStats {
            edges_learned: self.learned.len(),
            total_observations: self.histories.values().map(|h| h.window.len()).sum(),
            learning_rate: self.learning_rate,
            window_size: self.window_size,
            average_accuracy_pct: self.average_accuracy_pct(),
        }
    }

    fn average_accuracy_pct(&self) -> f64 {
        let mut total_error = 0.0;
        let mut count = 0usize;

        for (key, history) in &self.histories {
            let Some(&predicted) = self.learned.get(key) else { continue };
            if history.window.is_empty() {
                continue;
            }
            let actual = history.mean();
            total_error += (predicted - actual).abs() / actual;
            count += 1;
        }

        if count == 0 {
            return 0.0;
        }
        (1.0 - total_error / count as f64) * 100.0
    }
}

impl fmt::Display for AdaptiveWeightLearner {
    /// Learning report: parameters, outcomes, and the five most-observed
    /// edges.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats();
        writeln!(f, "=== adaptive learning ===")?;
        writeln!(f, "learning rate: {:.3}, window: {} observations", stats.learning_rate, stats.window_size)?;
        writeln!(f, "edges learned: {}, observations: {}", stats.edges_learned, stats.total_observations)?;
        writeln!(f, "prediction accuracy: {:.2}%", stats.average_accuracy_pct)?;

        let mut edges: Vec<(&EdgeKey, usize)> =
            self.histories.iter().map(|(k, h)| (k, h.window.len())).collect();
        edges.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        for (i, &(&(from, to), observed)) in edges.iter().take(5).enumerate() {
            write!(f, "{}. {from} -> {to}: {observed} observations", i + 1)?;
            if let Some(weight) = self.learned.get(&(from, to)) {
                write!(f, ", learned {weight:.2} min")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ── Factor internals ──────────────────────────────────────────────────────────

/// Mean of the observations matching `pred`, divided by the overall mean;
/// 1.0 when nothing matches.
fn conditional_ratio<F: Fn(&Observation) -> bool>(
    history: &EdgeHistory,
    overall_mean: f64,
    pred: F,
) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for obs in history.window.iter().filter(|&o| pred(o)) {
        sum += obs.travel_min;
        count += 1;
    }
    if count == 0 {
        return 1.0;
    }
    (sum / count as f64) / overall_mean
}

/// Ordinary-least-squares slope over the last ≤5 observations (x = index,
/// y = travel time), expressed as `1 + 2 × slope/mean` and clamped to
/// `[0.5, 2.0]`.  Needs at least 3 observations, else neutral.
fn trend_factor(history: &EdgeHistory) -> f64 {
    let len = history.window.len();
    if len < 3 {
        return 1.0;
    }

    let start = len.saturating_sub(TREND_WINDOW);
    let recent: Vec<f64> = history.window.iter().skip(start).map(|o| o.travel_min).collect();
    let n = recent.len() as f64;

    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);
    for (i, &y) in recent.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x);
    let mean = (sum_y / n).max(MIN_MEAN_DIVISOR);

    (1.0 + (slope / mean) * 2.0).clamp(0.5, 2.0)
}
