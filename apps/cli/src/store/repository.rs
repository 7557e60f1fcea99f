use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use dealfolio_core::errors::{Error, Result, ValidationError};
use dealfolio_core::ledger::{
    Company, CompanyId, Deal, DealCompanyInvestment, DealId, DealUnderlyingCompany, InvestorId,
    LedgerRepositoryTrait, Transaction, Valuation,
};

use super::model::{DealRecord, LedgerSnapshot};

/// In-memory ledger loaded from a JSON snapshot.
///
/// Transactions are assembled with their deal and company links once at load
/// time. Valuations are kept per company, latest first; rows sharing a date
/// keep their snapshot order so the first one wins.
pub struct JsonLedgerRepository {
    transactions: Vec<Transaction>,
    companies: HashMap<CompanyId, Company>,
    valuations: HashMap<CompanyId, Vec<Valuation>>,
}

impl JsonLedgerRepository {
    /// Reads and assembles the snapshot at `path`.
    pub async fn open(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::Repository(format!("Failed to read ledger {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let snapshot: LedgerSnapshot = serde_json::from_str(raw)?;
        Self::from_snapshot(snapshot)
    }

    /// Joins the flat snapshot tables into nested ledger entities.
    ///
    /// # Errors
    /// `ValidationError::InvalidInput` when a row references a deal or
    /// company that is not in the snapshot.
    pub fn from_snapshot(snapshot: LedgerSnapshot) -> Result<Self> {
        let companies: HashMap<CompanyId, Company> = snapshot
            .companies
            .into_iter()
            .map(|record| (record.id, Company::from(record)))
            .collect();

        let find_company = |company_id: CompanyId, referrer: &str| -> Result<Company> {
            companies.get(&company_id).cloned().ok_or_else(|| {
                invalid(format!(
                    "{} references unknown company {}",
                    referrer, company_id
                ))
            })
        };

        let mut deals: HashMap<DealId, Deal> = snapshot
            .deals
            .into_iter()
            .map(|record| (record.id, deal_from_record(record)))
            .collect();

        for record in snapshot.deal_company_investments {
            let company = find_company(record.company_id, "Company investment")?;
            let deal = deals.get_mut(&record.deal_id).ok_or_else(|| {
                invalid(format!(
                    "Company investment references unknown deal {}",
                    record.deal_id
                ))
            })?;
            deal.company_investments.push(DealCompanyInvestment {
                company,
                investment_amount: record.investment_amount,
                entry_valuation: record.entry_valuation,
            });
        }

        for record in snapshot.deals_underlying_companies {
            let company = find_company(record.company_id, "Underlying company link")?;
            let deal = deals.get_mut(&record.deal_id).ok_or_else(|| {
                invalid(format!(
                    "Underlying company link references unknown deal {}",
                    record.deal_id
                ))
            })?;
            deal.underlying_companies
                .push(DealUnderlyingCompany { company });
        }

        let transactions = snapshot
            .transactions
            .into_iter()
            .map(|record| -> Result<Transaction> {
                let deal = deals.get(&record.deal_id).cloned().ok_or_else(|| {
                    invalid(format!(
                        "Transaction {} references unknown deal {}",
                        record.id, record.deal_id
                    ))
                })?;
                Ok(Transaction {
                    id: record.id,
                    investor_id: record.investor_id,
                    deal,
                    initial_net_capital: record.initial_net_capital,
                    transaction_date: record.transaction_date,
                    management_fee_percent: record.management_fee_percent,
                    performance_fee_percent: record.performance_fee_percent,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut valuations: HashMap<CompanyId, Vec<Valuation>> = HashMap::new();
        for record in snapshot.valuations {
            valuations
                .entry(record.company_id)
                .or_default()
                .push(Valuation::from(record));
        }
        for rows in valuations.values_mut() {
            // Stable sort: equal dates keep snapshot order.
            rows.sort_by(|a, b| b.valuation_date.cmp(&a.valuation_date));
        }

        tracing::debug!(
            "Loaded ledger snapshot: {} transactions, {} deals, {} companies",
            transactions.len(),
            deals.len(),
            companies.len()
        );

        Ok(Self {
            transactions,
            companies,
            valuations,
        })
    }

    fn latest_for(&self, company_id: CompanyId) -> Option<&Valuation> {
        self.valuations.get(&company_id).and_then(|rows| rows.first())
    }
}

fn invalid(message: String) -> Error {
    Error::Validation(ValidationError::InvalidInput(message))
}

fn deal_from_record(record: DealRecord) -> Deal {
    Deal {
        id: record.id,
        name: record.name,
        deal_date: record.deal_date,
        deal_type: record.deal_type,
        deal_status: record.deal_status,
        partner_name: record.partner_name,
        description: record.description,
        entry_valuation: record.entry_valuation,
        underlying_company_id: record.underlying_company_id,
        company_investments: Vec::new(),
        underlying_companies: Vec::new(),
    }
}

#[async_trait]
impl LedgerRepositoryTrait for JsonLedgerRepository {
    async fn get_transactions_for_investor(
        &self,
        investor_id: InvestorId,
    ) -> Result<Vec<Transaction>> {
        Ok(self
            .transactions
            .iter()
            .filter(|tx| tx.investor_id == investor_id)
            .cloned()
            .collect())
    }

    async fn get_transaction_for_deal(
        &self,
        investor_id: InvestorId,
        deal_id: DealId,
    ) -> Result<Option<Transaction>> {
        Ok(self
            .transactions
            .iter()
            .find(|tx| tx.investor_id == investor_id && tx.deal.id == deal_id)
            .cloned())
    }

    async fn get_latest_valuation(&self, company_id: CompanyId) -> Result<Option<Valuation>> {
        Ok(self.latest_for(company_id).cloned())
    }

    async fn get_latest_valuations(
        &self,
        company_ids: &[CompanyId],
    ) -> Result<HashMap<CompanyId, Valuation>> {
        Ok(company_ids
            .iter()
            .filter_map(|id| self.latest_for(*id).map(|v| (*id, v.clone())))
            .collect())
    }

    async fn get_company(&self, company_id: CompanyId) -> Result<Option<Company>> {
        Ok(self.companies.get(&company_id).cloned())
    }

    async fn get_companies(
        &self,
        company_ids: &[CompanyId],
    ) -> Result<HashMap<CompanyId, Company>> {
        Ok(company_ids
            .iter()
            .filter_map(|id| self.companies.get(id).map(|c| (*id, c.clone())))
            .collect())
    }
}
