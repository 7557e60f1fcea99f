//! Deal-level valuation: one shared calculator feeding every portfolio view.

mod deal_metrics_calculator;
mod fee_calculator;
mod metrics_model;

pub use deal_metrics_calculator::*;
pub use fee_calculator::*;
pub use metrics_model::*;
