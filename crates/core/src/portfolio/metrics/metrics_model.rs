//! Per-deal and per-company valuation metrics.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{CompanyId, DealId, TransactionId};

/// An investor's position in one company of a deal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyMetrics {
    pub company_id: CompanyId,
    pub company_name: Option<String>,
    pub sector: Option<String>,
    pub description: Option<String>,
    /// Share of the deal's capital attributed to this company (0-1)
    pub company_proportion: Decimal,
    pub invested_amount: Decimal,
    pub current_value: Decimal,
    pub moic: Decimal,
    pub entry_valuation: Decimal,
    /// Post-money of the most recent valuation, if any
    pub latest_valuation: Option<Decimal>,
    pub latest_valuation_date: Option<NaiveDate>,
}

/// Valuation of a single transaction into a deal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DealMetrics {
    pub transaction_id: TransactionId,
    pub deal_id: DealId,
    pub deal_name: String,
    /// Comma separated names of the companies in `companies`
    pub company_names: String,
    pub invested_amount: Decimal,
    pub current_value: Decimal,
    pub moic: Decimal,
    pub deal_date: Option<NaiveDate>,
    pub deal_type: Option<String>,
    pub deal_status: Option<String>,
    pub is_multiple_company_deal: bool,
    pub transaction_date: DateTime<Utc>,
    /// Per-company breakdown. Empty when no company could be resolved.
    pub companies: Vec<CompanyMetrics>,
}

impl DealMetrics {
    /// Amounts this deal contributes to segment views.
    ///
    /// A deal without a resolved company still contributes its full
    /// invested and current value, with no company name or sector, so
    /// segment totals reconcile with the portfolio total.
    pub fn contributions(&self) -> Vec<PositionContribution> {
        if self.companies.is_empty() {
            return vec![PositionContribution {
                company_name: None,
                sector: None,
                transaction_date: self.transaction_date,
                invested_amount: self.invested_amount,
                current_value: self.current_value,
            }];
        }

        self.companies
            .iter()
            .map(|company| PositionContribution {
                company_name: company.company_name.clone(),
                sector: company.sector.clone(),
                transaction_date: self.transaction_date,
                invested_amount: company.invested_amount,
                current_value: company.current_value,
            })
            .collect()
    }
}

/// Amounts contributed by one company position, tagged with every key a
/// segment view can group by.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionContribution {
    pub company_name: Option<String>,
    pub sector: Option<String>,
    pub transaction_date: DateTime<Utc>,
    pub invested_amount: Decimal,
    pub current_value: Decimal,
}

/// Fees charged on a transaction's net capital.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    pub management_fee: Decimal,
    pub performance_fee: Decimal,
    pub total_fees: Decimal,
}
