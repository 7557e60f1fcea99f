use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use log::debug;

use super::{DealFacts, InvestmentDetail, InvestorPortfolioServiceTrait};
use crate::errors::{Error, Result};
use crate::ledger::{
    Company, CompanyId, DealId, InvestorId, LatestValuationIndex, LedgerRepositoryTrait,
    Transaction,
};
use crate::portfolio::aggregation::{aggregate_portfolio, InvestorPortfolio, PortfolioSummary};
use crate::portfolio::distribution::{
    build_monthly_returns, build_profit_distribution, build_segment_distribution, MonthlyReturn,
    SegmentAllocation, SegmentKey, SegmentProfit,
};
use crate::portfolio::metrics::{
    calculate_deal_metrics, calculate_fees, DealMetrics, PositionContribution,
};
use crate::portfolio::resolver::{
    candidate_company_ids, fallback_company_id, resolve_deal_companies,
};

/// Computes investor portfolio views from the ledger store.
///
/// Each call loads the investor's transactions once, pre-fetches the latest
/// valuation of every referenced company in one batch, and values every
/// transaction with the shared deal metrics calculator.
#[derive(Clone)]
pub struct InvestorPortfolioService {
    ledger_repository: Arc<dyn LedgerRepositoryTrait>,
}

impl InvestorPortfolioService {
    pub fn new(ledger_repository: Arc<dyn LedgerRepositoryTrait>) -> Self {
        Self { ledger_repository }
    }

    /// Values every transaction of the investor, in store order.
    async fn evaluate_investments(&self, investor_id: InvestorId) -> Result<Vec<DealMetrics>> {
        let start = Instant::now();
        let transactions = self
            .ledger_repository
            .get_transactions_for_investor(investor_id)
            .await?;

        if transactions.is_empty() {
            debug!("Investor {} has no transactions", investor_id);
            return Ok(Vec::new());
        }

        let company_ids: Vec<CompanyId> = transactions
            .iter()
            .flat_map(|tx| candidate_company_ids(&tx.deal))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let fallback_ids: Vec<CompanyId> = transactions
            .iter()
            .filter_map(|tx| fallback_company_id(&tx.deal))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let repository = &self.ledger_repository;
        let fallback_companies = async {
            if fallback_ids.is_empty() {
                Ok(HashMap::new())
            } else {
                repository.get_companies(&fallback_ids).await
            }
        };
        let (latest_valuations, companies) = futures::try_join!(
            repository.get_latest_valuations(&company_ids),
            fallback_companies
        )?;
        let valuations = LatestValuationIndex::from(latest_valuations);

        let investments: Vec<DealMetrics> = transactions
            .iter()
            .map(|tx| {
                let resolution = resolve_deal_companies(&tx.deal, &companies);
                calculate_deal_metrics(tx, &resolution, &valuations)
            })
            .collect();

        debug!(
            "Valued {} transactions for investor {} ({} companies, {} with valuations) in {:?}",
            investments.len(),
            investor_id,
            company_ids.len(),
            valuations.len(),
            start.elapsed()
        );
        Ok(investments)
    }

    async fn contributions(&self, investor_id: InvestorId) -> Result<Vec<PositionContribution>> {
        let investments = self.evaluate_investments(investor_id).await?;
        Ok(investments
            .iter()
            .flat_map(DealMetrics::contributions)
            .collect())
    }

    /// Values a single transaction using point lookups against the store.
    async fn evaluate_single(&self, transaction: &Transaction) -> Result<DealMetrics> {
        let mut companies: HashMap<CompanyId, Company> = HashMap::new();
        if let Some(company_id) = fallback_company_id(&transaction.deal) {
            if let Some(company) = self.ledger_repository.get_company(company_id).await? {
                companies.insert(company_id, company);
            }
        }

        let resolution = resolve_deal_companies(&transaction.deal, &companies);

        let mut valuations = LatestValuationIndex::new();
        for resolved in resolution.companies() {
            if let Some(valuation) = self
                .ledger_repository
                .get_latest_valuation(resolved.company.id)
                .await?
            {
                valuations.offer(valuation);
            }
        }

        Ok(calculate_deal_metrics(transaction, &resolution, &valuations))
    }
}

#[async_trait]
impl InvestorPortfolioServiceTrait for InvestorPortfolioService {
    async fn get_portfolio(&self, investor_id: InvestorId) -> Result<InvestorPortfolio> {
        debug!("Computing portfolio for investor {}", investor_id);
        let investments = self.evaluate_investments(investor_id).await?;
        let portfolio = aggregate_portfolio(&investments);
        Ok(InvestorPortfolio {
            portfolio,
            investments,
        })
    }

    async fn get_portfolio_overview(&self, investor_id: InvestorId) -> Result<PortfolioSummary> {
        let investments = self.evaluate_investments(investor_id).await?;
        Ok(aggregate_portfolio(&investments))
    }

    async fn get_company_distribution(
        &self,
        investor_id: InvestorId,
    ) -> Result<Vec<SegmentAllocation>> {
        let contributions = self.contributions(investor_id).await?;
        Ok(build_segment_distribution(
            &contributions,
            SegmentKey::CompanyName,
        ))
    }

    async fn get_industry_distribution(
        &self,
        investor_id: InvestorId,
    ) -> Result<Vec<SegmentAllocation>> {
        let contributions = self.contributions(investor_id).await?;
        Ok(build_segment_distribution(&contributions, SegmentKey::Sector))
    }

    async fn get_industry_profit_distribution(
        &self,
        investor_id: InvestorId,
    ) -> Result<Vec<SegmentProfit>> {
        let contributions = self.contributions(investor_id).await?;
        Ok(build_profit_distribution(&contributions, SegmentKey::Sector))
    }

    async fn get_monthly_returns(&self, investor_id: InvestorId) -> Result<Vec<MonthlyReturn>> {
        let contributions = self.contributions(investor_id).await?;
        Ok(build_monthly_returns(&contributions))
    }

    async fn get_investment_details(
        &self,
        investor_id: InvestorId,
        deal_id: DealId,
    ) -> Result<InvestmentDetail> {
        let transaction = self
            .ledger_repository
            .get_transaction_for_deal(investor_id, deal_id)
            .await?
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "Investment in deal {} for investor {}",
                    deal_id, investor_id
                ))
            })?;

        let investment = self.evaluate_single(&transaction).await?;

        Ok(InvestmentDetail {
            investment,
            deal: DealFacts::from(&transaction.deal),
            fees: calculate_fees(&transaction),
        })
    }
}
