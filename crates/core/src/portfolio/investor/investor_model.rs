use serde::{Deserialize, Serialize};

use crate::ledger::Deal;
use crate::portfolio::metrics::{DealMetrics, FeeBreakdown};

/// Descriptive facts about a deal shown alongside an investment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DealFacts {
    pub fund_vehicle: Option<String>,
    pub partner: Option<String>,
    pub description: Option<String>,
    pub number_of_companies: usize,
    pub is_single_company_deal: bool,
}

impl From<&Deal> for DealFacts {
    fn from(deal: &Deal) -> Self {
        Self {
            fund_vehicle: deal.deal_type.clone(),
            partner: deal.partner_name.clone(),
            description: deal.description.clone(),
            number_of_companies: deal.company_investments.len(),
            is_single_company_deal: deal.is_single_company_deal(),
        }
    }
}

/// One investor's position in one deal, with fees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentDetail {
    pub investment: DealMetrics,
    pub deal: DealFacts,
    pub fees: FeeBreakdown,
}
