//! Investor-level portfolio totals.

mod aggregation_model;
mod portfolio_aggregator;

pub use aggregation_model::*;
pub use portfolio_aggregator::*;
