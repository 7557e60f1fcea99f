//! Flat records of a ledger snapshot, one list per table.

use chrono::{DateTime, NaiveDate, Utc};
use dealfolio_core::ledger::{
    Company, CompanyId, DealId, InvestorId, TransactionId, Valuation,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whole ledger export as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub companies: Vec<CompanyRecord>,
    #[serde(default)]
    pub deals: Vec<DealRecord>,
    #[serde(default)]
    pub deal_company_investments: Vec<DealCompanyInvestmentRecord>,
    #[serde(default)]
    pub deals_underlying_companies: Vec<DealUnderlyingCompanyRecord>,
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
    #[serde(default)]
    pub valuations: Vec<ValuationRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub id: CompanyId,
    pub name: Option<String>,
    pub sector: Option<String>,
    pub description: Option<String>,
}

impl From<CompanyRecord> for Company {
    fn from(record: CompanyRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            sector: record.sector,
            description: record.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealRecord {
    pub id: DealId,
    pub name: String,
    pub deal_date: Option<NaiveDate>,
    pub deal_type: Option<String>,
    pub deal_status: Option<String>,
    pub partner_name: Option<String>,
    pub description: Option<String>,
    pub entry_valuation: Option<Decimal>,
    pub underlying_company_id: Option<CompanyId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealCompanyInvestmentRecord {
    pub deal_id: DealId,
    pub company_id: CompanyId,
    pub investment_amount: Option<Decimal>,
    pub entry_valuation: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealUnderlyingCompanyRecord {
    pub deal_id: DealId,
    pub company_id: CompanyId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: TransactionId,
    pub investor_id: InvestorId,
    pub deal_id: DealId,
    pub initial_net_capital: Option<Decimal>,
    pub transaction_date: DateTime<Utc>,
    pub management_fee_percent: Option<Decimal>,
    pub performance_fee_percent: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRecord {
    pub company_id: CompanyId,
    pub post_money: Decimal,
    pub valuation_date: NaiveDate,
}

impl From<ValuationRecord> for Valuation {
    fn from(record: ValuationRecord) -> Self {
        Self {
            company_id: record.company_id,
            post_money: record.post_money,
            valuation_date: record.valuation_date,
        }
    }
}
