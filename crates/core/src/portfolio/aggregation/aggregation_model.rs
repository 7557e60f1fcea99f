use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::metrics::DealMetrics;

/// Investor-level totals across every deal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub current_value: Decimal,
    pub total_return_percent: Decimal,
    /// `current_value / total_invested`, 0 when nothing was invested
    pub moic: Decimal,
    pub first_investment_date: Option<DateTime<Utc>>,
    pub total_invested: Decimal,
    pub capital_earned: Decimal,
}

impl Default for PortfolioSummary {
    fn default() -> Self {
        Self {
            current_value: Decimal::ZERO,
            total_return_percent: Decimal::ZERO,
            moic: Decimal::ZERO,
            first_investment_date: None,
            total_invested: Decimal::ZERO,
            capital_earned: Decimal::ZERO,
        }
    }
}

/// Full portfolio view: totals plus one entry per transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestorPortfolio {
    pub portfolio: PortfolioSummary,
    pub investments: Vec<DealMetrics>,
}
