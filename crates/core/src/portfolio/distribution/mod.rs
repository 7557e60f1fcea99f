//! Segment distributions by company, sector and transaction month.

mod distribution_model;
mod segment_distribution;

pub use distribution_model::*;
pub use segment_distribution::*;
