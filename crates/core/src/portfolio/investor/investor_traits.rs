//! Investor portfolio service traits.

use async_trait::async_trait;

use super::InvestmentDetail;
use crate::errors::Result;
use crate::ledger::{DealId, InvestorId};
use crate::portfolio::aggregation::{InvestorPortfolio, PortfolioSummary};
use crate::portfolio::distribution::{MonthlyReturn, SegmentAllocation, SegmentProfit};

/// Trait defining the contract for investor portfolio views.
///
/// Every view is derived from the same per-deal metrics, so totals agree
/// across views for the same ledger state.
#[async_trait]
pub trait InvestorPortfolioServiceTrait: Send + Sync {
    /// Portfolio totals plus one valued entry per transaction.
    async fn get_portfolio(&self, investor_id: InvestorId) -> Result<InvestorPortfolio>;

    /// Portfolio totals only.
    async fn get_portfolio_overview(&self, investor_id: InvestorId) -> Result<PortfolioSummary>;

    /// Invested amount by company name.
    async fn get_company_distribution(
        &self,
        investor_id: InvestorId,
    ) -> Result<Vec<SegmentAllocation>>;

    /// Invested amount by company sector.
    async fn get_industry_distribution(
        &self,
        investor_id: InvestorId,
    ) -> Result<Vec<SegmentAllocation>>;

    /// Unrealized profit by company sector.
    async fn get_industry_profit_distribution(
        &self,
        investor_id: InvestorId,
    ) -> Result<Vec<SegmentProfit>>;

    /// Invested and current value by transaction month.
    async fn get_monthly_returns(&self, investor_id: InvestorId) -> Result<Vec<MonthlyReturn>>;

    /// Valued position and fees for the investor's transaction in a deal.
    ///
    /// # Errors
    /// `Error::NotFound` when the investor has no transaction in the deal.
    async fn get_investment_details(
        &self,
        investor_id: InvestorId,
        deal_id: DealId,
    ) -> Result<InvestmentDetail>;
}
