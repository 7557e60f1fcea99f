//! Resolves which companies a deal's capital belongs to.
//!
//! The lookup is a strict priority chain. Deals migrated from the legacy
//! single-company schema can carry links in more than one form at once, and
//! the first matching form always wins:
//!
//! 1. `deal_company_investments` (one or many records)
//! 2. `deal.underlying_company_id` paired with `deal.entry_valuation`
//! 3. the first `deals_underlying_companies` link paired with `deal.entry_valuation`

use log::{debug, warn};

use super::{CompanyLookup, CompanyResolution, ResolutionSource, ResolvedCompany};
use crate::ledger::{CompanyId, Deal, DealCompanyInvestment};
use crate::utils::decimal_utils::or_zero;

/// Resolves the companies of `deal`.
///
/// `companies` is only consulted when the deal has no company investment
/// records but does carry an `underlying_company_id`. If that id is not found
/// the deal is unresolved; the legacy link list is not tried in that case.
pub fn resolve_deal_companies<L>(deal: &Deal, companies: &L) -> CompanyResolution
where
    L: CompanyLookup + ?Sized,
{
    match deal.company_investments.as_slice() {
        [] => resolve_legacy_company(deal, companies),
        [single] => {
            debug!(
                "Deal {} resolved to company {} from company investments",
                deal.id, single.company.id
            );
            CompanyResolution::Single(from_company_investment(single))
        }
        many => {
            debug!(
                "Deal {} is a multi-company deal with {} company investments",
                deal.id,
                many.len()
            );
            CompanyResolution::Multiple(many.iter().map(from_company_investment).collect())
        }
    }
}

fn from_company_investment(dci: &DealCompanyInvestment) -> ResolvedCompany {
    ResolvedCompany {
        company: dci.company.clone(),
        entry_valuation: dci.entry_valuation(),
        investment_amount: dci.investment_amount,
        source: ResolutionSource::CompanyInvestments,
    }
}

fn resolve_legacy_company<L>(deal: &Deal, companies: &L) -> CompanyResolution
where
    L: CompanyLookup + ?Sized,
{
    let entry_valuation = or_zero(deal.entry_valuation);

    if let Some(company_id) = deal.underlying_company_id {
        return match companies.find_company(company_id) {
            Some(company) => {
                debug!(
                    "Deal {} resolved to company {} from underlying_company_id",
                    deal.id, company_id
                );
                CompanyResolution::Single(ResolvedCompany {
                    company: company.clone(),
                    entry_valuation,
                    investment_amount: None,
                    source: ResolutionSource::UnderlyingCompanyId,
                })
            }
            None => {
                warn!(
                    "Deal {} references underlying company {} which does not exist; carrying capital flat",
                    deal.id, company_id
                );
                CompanyResolution::Unresolved
            }
        };
    }

    match deal.underlying_companies.first() {
        Some(link) => {
            debug!(
                "Deal {} resolved to company {} from underlying company links",
                deal.id, link.company.id
            );
            CompanyResolution::Single(ResolvedCompany {
                company: link.company.clone(),
                entry_valuation,
                investment_amount: None,
                source: ResolutionSource::UnderlyingCompanyLinks,
            })
        }
        None => {
            debug!("No company found for deal {}", deal.id);
            CompanyResolution::Unresolved
        }
    }
}

/// Company ids whose valuations may be needed to value `deal`.
pub fn candidate_company_ids(deal: &Deal) -> Vec<CompanyId> {
    if !deal.company_investments.is_empty() {
        return deal
            .company_investments
            .iter()
            .map(|dci| dci.company.id)
            .collect();
    }
    if let Some(company_id) = deal.underlying_company_id {
        return vec![company_id];
    }
    deal.underlying_companies
        .first()
        .map(|link| vec![link.company.id])
        .unwrap_or_default()
}

/// Company id that must be fetched from the store before `deal` can be
/// resolved, if any.
pub fn fallback_company_id(deal: &Deal) -> Option<CompanyId> {
    if deal.company_investments.is_empty() {
        deal.underlying_company_id
    } else {
        None
    }
}
