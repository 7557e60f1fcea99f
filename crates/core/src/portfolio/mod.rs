//! Portfolio valuation: company resolution, per-deal metrics, investor
//! aggregation and segment breakdowns.

pub mod aggregation;
pub mod distribution;
pub mod investor;
pub mod metrics;
pub mod resolver;

pub use aggregation::*;
pub use distribution::*;
pub use investor::*;
pub use metrics::*;
pub use resolver::*;
