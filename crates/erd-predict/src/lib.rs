//! `erd-predict` — demand forecasting from incident history.
//!
//! The analyzer keeps an append-only incident history per location and
//! derives three things from it: time-decayed hotspot scores, forward-looking
//! incident probabilities, and proportional resource-allocation suggestions.
//! Its output is advisory — it never moves a unit or touches the network.
//!
//! Every query takes an explicit "now" timestamp, so identical inputs always
//! produce identical output.

pub mod analyzer;


pub use analyzer::{HotspotScore, PredictiveAnalyzer};
