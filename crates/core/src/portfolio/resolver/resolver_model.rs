use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::ledger::{Company, CompanyId};

/// Which deal association supplied a resolved company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionSource {
    /// `deal_company_investments` records (current schema).
    CompanyInvestments,
    /// The deal's own `underlying_company_id` column (legacy).
    UnderlyingCompanyId,
    /// The first `deals_underlying_companies` link (legacy).
    UnderlyingCompanyLinks,
}

/// A company a deal's capital is attributed to, with the valuation it was
/// entered at.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCompany {
    pub company: Company,
    pub entry_valuation: Decimal,
    /// Capital the deal committed to this company. Only company investment
    /// records carry it; legacy links leave it empty.
    pub investment_amount: Option<Decimal>,
    pub source: ResolutionSource,
}

/// Outcome of resolving a deal's companies.
#[derive(Debug, Clone, PartialEq)]
pub enum CompanyResolution {
    /// More than one company investment record; capital is split
    /// proportionally across all of them.
    Multiple(Vec<ResolvedCompany>),
    /// Exactly one company receives the full invested amount.
    Single(ResolvedCompany),
    /// No company could be found; the invested amount is carried flat.
    Unresolved,
}

impl CompanyResolution {
    pub fn is_multiple(&self) -> bool {
        matches!(self, CompanyResolution::Multiple(_))
    }

    pub fn companies(&self) -> &[ResolvedCompany] {
        match self {
            CompanyResolution::Multiple(companies) => companies,
            CompanyResolution::Single(company) => std::slice::from_ref(company),
            CompanyResolution::Unresolved => &[],
        }
    }
}

/// Point lookup used by the `underlying_company_id` fallback.
pub trait CompanyLookup {
    fn find_company(&self, company_id: CompanyId) -> Option<&Company>;
}

impl CompanyLookup for HashMap<CompanyId, Company> {
    fn find_company(&self, company_id: CompanyId) -> Option<&Company> {
        self.get(&company_id)
    }
}
