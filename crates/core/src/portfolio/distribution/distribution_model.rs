//! Segment distribution models for company, industry and monthly breakdowns.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dimension a distribution groups company contributions by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKey {
    CompanyName,
    Sector,
    /// Calendar month of the transaction, as `YYYY-MM`
    TransactionMonth,
}

/// Invested amount grouped under one segment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SegmentAllocation {
    /// Company name, sector or month. Missing names and sectors are "Unknown".
    pub segment: String,
    pub amount: Decimal,
    /// Share of the distribution total (0-100)
    pub percentage: Decimal,
}

/// Unrealized profit grouped under one segment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SegmentProfit {
    pub segment: String,
    pub profit: Decimal,
    /// Share of total profit (0-100), 0 unless total profit is positive
    pub percentage: Decimal,
}

/// Invested and current value of all transactions made in one month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReturn {
    /// `YYYY-MM`
    pub month: String,
    pub invested: Decimal,
    pub current_value: Decimal,
    pub return_percent: Decimal,
    /// Share of total invested capital (0-100)
    pub percentage: Decimal,
}
