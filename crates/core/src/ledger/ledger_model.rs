//! Ledger domain models: transactions, deals, companies and valuations.
//!
//! These are read-only inputs owned by the external store. The engine never
//! mutates them; it only derives summary values.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_utils::or_zero;

pub type InvestorId = i64;
pub type DealId = i64;
pub type CompanyId = i64;
pub type TransactionId = i64;

/// A portfolio company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    pub name: Option<String>,
    pub sector: Option<String>,
    pub description: Option<String>,
}

/// A post-money valuation of a company at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Valuation {
    pub company_id: CompanyId,
    pub post_money: Decimal,
    pub valuation_date: NaiveDate,
}

/// Capital a deal committed to one specific company, with that company's
/// entry valuation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DealCompanyInvestment {
    pub company: Company,
    pub investment_amount: Option<Decimal>,
    pub entry_valuation: Option<Decimal>,
}

impl DealCompanyInvestment {
    pub fn investment_amount(&self) -> Decimal {
        or_zero(self.investment_amount)
    }

    pub fn entry_valuation(&self) -> Decimal {
        or_zero(self.entry_valuation)
    }
}

/// Legacy deal-to-company link from the single-company schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DealUnderlyingCompany {
    pub company: Company,
}

/// A single investment event committing capital to one or more companies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: DealId,
    pub name: String,
    pub deal_date: Option<NaiveDate>,
    pub deal_type: Option<String>,
    pub deal_status: Option<String>,
    pub partner_name: Option<String>,
    pub description: Option<String>,
    pub entry_valuation: Option<Decimal>,
    pub underlying_company_id: Option<CompanyId>,
    #[serde(default)]
    pub company_investments: Vec<DealCompanyInvestment>,
    #[serde(default)]
    pub underlying_companies: Vec<DealUnderlyingCompany>,
}

impl Deal {
    /// A deal is multi-company only when it carries more than one
    /// company investment record.
    pub fn is_multiple_company_deal(&self) -> bool {
        self.company_investments.len() > 1
    }

    pub fn is_single_company_deal(&self) -> bool {
        self.company_investments.len() == 1
    }

    /// Sum of `investment_amount` over all company investment records.
    pub fn total_company_investment(&self) -> Decimal {
        self.company_investments
            .iter()
            .map(DealCompanyInvestment::investment_amount)
            .sum()
    }
}

/// One investor's capital commitment into a deal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub investor_id: InvestorId,
    pub deal: Deal,
    pub initial_net_capital: Option<Decimal>,
    pub transaction_date: DateTime<Utc>,
    pub management_fee_percent: Option<Decimal>,
    pub performance_fee_percent: Option<Decimal>,
}

impl Transaction {
    /// Net capital invested; a missing amount counts as zero.
    pub fn net_capital(&self) -> Decimal {
        or_zero(self.initial_net_capital)
    }
}
