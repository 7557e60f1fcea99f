use log::{debug, warn};
use rust_decimal::Decimal;

use super::{CompanyMetrics, DealMetrics};
use crate::constants::UNKNOWN_SEGMENT;
use crate::ledger::{Transaction, Valuation, ValuationLookup};
use crate::portfolio::resolver::{CompanyResolution, ResolvedCompany};
use crate::utils::decimal_utils::{or_zero, ratio_or};

/// Values one transaction against its deal's resolved companies.
///
/// Multi-company deals split the invested amount across companies in
/// proportion to each company's `investment_amount` within the deal. A single
/// resolved company receives the full amount. An unresolved deal keeps its
/// invested amount as current value.
///
/// The deal MOIC is `current_value / invested_amount`, or 1 when nothing was
/// invested.
///
/// # Arguments
///
/// * `transaction` - The investor transaction, with its deal embedded.
/// * `resolution` - The deal's companies as returned by the resolver.
/// * `valuations` - Latest valuation lookup for the referenced companies.
pub fn calculate_deal_metrics<V>(
    transaction: &Transaction,
    resolution: &CompanyResolution,
    valuations: &V,
) -> DealMetrics
where
    V: ValuationLookup + ?Sized,
{
    let deal = &transaction.deal;
    let invested_amount = transaction.net_capital();

    let companies: Vec<CompanyMetrics> = match resolution {
        CompanyResolution::Multiple(resolved) => {
            let total_deal_investment: Decimal = resolved
                .iter()
                .map(|c| or_zero(c.investment_amount))
                .sum();
            if total_deal_investment <= Decimal::ZERO {
                warn!(
                    "Deal {} has no positive company investment total; company shares default to zero",
                    deal.id
                );
            }
            resolved
                .iter()
                .map(|company| {
                    let proportion = ratio_or(
                        or_zero(company.investment_amount),
                        total_deal_investment,
                        Decimal::ZERO,
                    );
                    value_position(company, invested_amount, proportion, valuations)
                })
                .collect()
        }
        CompanyResolution::Single(company) => {
            vec![value_position(company, invested_amount, Decimal::ONE, valuations)]
        }
        CompanyResolution::Unresolved => Vec::new(),
    };

    let current_value = if companies.is_empty() {
        invested_amount
    } else {
        companies.iter().map(|c| c.current_value).sum()
    };
    let moic = ratio_or(current_value, invested_amount, Decimal::ONE);

    debug!(
        "Deal {} ({}): invested {}, current value {}, MOIC {}",
        deal.id, deal.name, invested_amount, current_value, moic
    );

    DealMetrics {
        transaction_id: transaction.id,
        deal_id: deal.id,
        deal_name: deal.name.clone(),
        company_names: companies
            .iter()
            .map(|c| c.company_name.as_deref().unwrap_or(UNKNOWN_SEGMENT))
            .collect::<Vec<_>>()
            .join(", "),
        invested_amount,
        current_value,
        moic,
        deal_date: deal.deal_date,
        deal_type: deal.deal_type.clone(),
        deal_status: deal.deal_status.clone(),
        is_multiple_company_deal: resolution.is_multiple(),
        transaction_date: transaction.transaction_date,
        companies,
    }
}

/// MOIC of a company position: latest post-money over entry valuation.
///
/// Falls back to 1 when there is no valuation or the entry valuation is not
/// positive, so the invested amount is preserved rather than grown.
pub fn position_moic(latest: Option<&Valuation>, entry_valuation: Decimal) -> Decimal {
    match latest {
        Some(valuation) => ratio_or(valuation.post_money, entry_valuation, Decimal::ONE),
        None => Decimal::ONE,
    }
}

fn value_position<V>(
    resolved: &ResolvedCompany,
    deal_invested_amount: Decimal,
    proportion: Decimal,
    valuations: &V,
) -> CompanyMetrics
where
    V: ValuationLookup + ?Sized,
{
    let company = &resolved.company;
    let invested_amount = deal_invested_amount * proportion;
    let latest = valuations.latest_valuation(company.id);

    if latest.is_some() && resolved.entry_valuation <= Decimal::ZERO {
        warn!(
            "Company {} has a valuation but no entry valuation; keeping invested amount",
            company.id
        );
    }

    let moic = position_moic(latest, resolved.entry_valuation);
    let current_value = invested_amount * moic;

    debug!(
        "Company {}: proportion {}, invested {}, MOIC {}, current value {}",
        company.id, proportion, invested_amount, moic, current_value
    );

    CompanyMetrics {
        company_id: company.id,
        company_name: company.name.clone(),
        sector: company.sector.clone(),
        description: company.description.clone(),
        company_proportion: proportion,
        invested_amount,
        current_value,
        moic,
        entry_valuation: resolved.entry_valuation,
        latest_valuation: latest.map(|v| v.post_money),
        latest_valuation_date: latest.map(|v| v.valuation_date),
    }
}
