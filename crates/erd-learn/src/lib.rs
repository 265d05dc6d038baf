//! `erd-learn` — online learning of per-edge congestion from observed
//! travel times.
//!
//! The learner is deliberately independent of the network: it ingests
//! `(from, to, minutes, timestamp)` samples and answers congestion-factor
//! queries, but writing an estimate back into the network's live weights is
//! an explicit caller action.  Live weights and learned estimates may
//! diverge until the caller synchronizes them.

pub mod error;
pub mod learner;


pub use error::LearnError;
pub use learner::{AdaptiveWeightLearner, LearnerStats};
