//! Repository traits for the investor ledger.

use async_trait::async_trait;
use std::collections::HashMap;

use super::{Company, CompanyId, DealId, InvestorId, Transaction, Valuation};
use crate::errors::Result;

/// Read-only access to the external ledger store.
///
/// Implementations load transactions with their deal, the deal's company
/// investments and legacy company links already embedded.
#[async_trait]
pub trait LedgerRepositoryTrait: Send + Sync {
    /// All transactions of an investor, in store order.
    async fn get_transactions_for_investor(
        &self,
        investor_id: InvestorId,
    ) -> Result<Vec<Transaction>>;

    /// The first transaction (in store order) of an investor in a deal.
    async fn get_transaction_for_deal(
        &self,
        investor_id: InvestorId,
        deal_id: DealId,
    ) -> Result<Option<Transaction>>;

    /// Most recent valuation of a company by valuation date.
    async fn get_latest_valuation(&self, company_id: CompanyId) -> Result<Option<Valuation>>;

    /// Most recent valuation for each of the given companies. Companies
    /// without any valuation are absent from the map.
    async fn get_latest_valuations(
        &self,
        company_ids: &[CompanyId],
    ) -> Result<HashMap<CompanyId, Valuation>>;

    async fn get_company(&self, company_id: CompanyId) -> Result<Option<Company>>;

    async fn get_companies(&self, company_ids: &[CompanyId])
        -> Result<HashMap<CompanyId, Company>>;
}
