use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;

use super::PortfolioSummary;
use crate::portfolio::metrics::DealMetrics;
use crate::utils::decimal_utils::{ratio_or, return_percent};

/// Running totals over per-deal metrics.
///
/// Sums are order independent; the first investment date is the minimum
/// transaction date seen, whatever order deals arrive in.
#[derive(Debug, Clone, Default)]
pub struct PortfolioTotals {
    total_invested: Decimal,
    total_current_value: Decimal,
    first_investment_date: Option<DateTime<Utc>>,
    deal_count: usize,
}

impl PortfolioTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, deal: &DealMetrics) {
        self.total_invested += deal.invested_amount;
        self.total_current_value += deal.current_value;
        self.first_investment_date = Some(match self.first_investment_date {
            Some(current) => current.min(deal.transaction_date),
            None => deal.transaction_date,
        });
        self.deal_count += 1;
    }

    /// Final ratios. Unlike the per-deal MOIC, the portfolio MOIC is 0 when
    /// nothing was invested.
    pub fn finish(self) -> PortfolioSummary {
        let moic = ratio_or(self.total_current_value, self.total_invested, Decimal::ZERO);
        let total_return_percent = return_percent(self.total_current_value, self.total_invested);

        debug!(
            "Aggregated {} deals: invested {}, current value {}, MOIC {}",
            self.deal_count, self.total_invested, self.total_current_value, moic
        );

        PortfolioSummary {
            current_value: self.total_current_value,
            total_return_percent,
            moic,
            first_investment_date: self.first_investment_date,
            total_invested: self.total_invested,
            capital_earned: self.total_current_value - self.total_invested,
        }
    }
}

/// Reduces per-deal metrics into investor-level totals.
pub fn aggregate_portfolio<'a, I>(deals: I) -> PortfolioSummary
where
    I: IntoIterator<Item = &'a DealMetrics>,
{
    let mut totals = PortfolioTotals::new();
    for deal in deals {
        totals.add(deal);
    }
    totals.finish()
}
