//! Groups company contributions into percentage-of-total breakdowns.
//!
//! Every builder works on the contributions produced by the deal metrics
//! calculator, so segment totals always reconcile with the portfolio totals.

use std::cmp::Ordering;
use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use super::{MonthlyReturn, SegmentAllocation, SegmentKey, SegmentProfit};
use crate::constants::UNKNOWN_SEGMENT;
use crate::portfolio::metrics::PositionContribution;
use crate::utils::decimal_utils::{percent_of, return_percent};
use crate::utils::time_utils::month_key;

/// Label of `contribution` under `key`. Missing or blank names and sectors
/// map to "Unknown".
pub fn segment_label(contribution: &PositionContribution, key: SegmentKey) -> String {
    let label = match key {
        SegmentKey::CompanyName => contribution.company_name.as_deref(),
        SegmentKey::Sector => contribution.sector.as_deref(),
        SegmentKey::TransactionMonth => return month_key(contribution.transaction_date),
    };
    match label.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => UNKNOWN_SEGMENT.to_string(),
    }
}

/// Invested amount per segment with its share of the total.
///
/// Months are returned in calendar order; company and sector segments by
/// amount descending, ties broken by label.
pub fn build_segment_distribution(
    contributions: &[PositionContribution],
    key: SegmentKey,
) -> Vec<SegmentAllocation> {
    let amounts = sum_by_segment(contributions, key, |c| c.invested_amount);
    let total: Decimal = amounts.values().copied().sum();

    let mut allocations: Vec<SegmentAllocation> = amounts
        .into_iter()
        .map(|(segment, amount)| SegmentAllocation {
            percentage: percent_of(amount, total),
            segment,
            amount,
        })
        .collect();

    if key == SegmentKey::TransactionMonth {
        allocations.sort_by(|a, b| a.segment.cmp(&b.segment));
    } else {
        allocations
            .sort_by(|a, b| by_value_then_label(a.amount, &a.segment, b.amount, &b.segment));
    }

    debug!(
        "Built {:?} distribution with {} segments totalling {}",
        key,
        allocations.len(),
        total
    );
    allocations
}

/// Unrealized profit (`current_value - invested_amount`) per segment.
///
/// Percentages are only meaningful for a positive total profit; otherwise
/// every segment reports 0.
pub fn build_profit_distribution(
    contributions: &[PositionContribution],
    key: SegmentKey,
) -> Vec<SegmentProfit> {
    let profits = sum_by_segment(contributions, key, |c| c.current_value - c.invested_amount);
    let total_profit: Decimal = profits.values().copied().sum();

    let mut distribution: Vec<SegmentProfit> = profits
        .into_iter()
        .map(|(segment, profit)| SegmentProfit {
            percentage: percent_of(profit, total_profit),
            segment,
            profit,
        })
        .collect();

    distribution
        .sort_by(|a, b| by_value_then_label(a.profit, &a.segment, b.profit, &b.segment));
    distribution
}

/// Invested and current value per transaction month, in calendar order,
/// each month with its own return percentage.
pub fn build_monthly_returns(contributions: &[PositionContribution]) -> Vec<MonthlyReturn> {
    let mut months: HashMap<String, (Decimal, Decimal)> = HashMap::new();
    for contribution in contributions {
        let entry = months
            .entry(month_key(contribution.transaction_date))
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        entry.0 += contribution.invested_amount;
        entry.1 += contribution.current_value;
    }

    let total_invested: Decimal = months.values().map(|(invested, _)| *invested).sum();

    let mut returns: Vec<MonthlyReturn> = months
        .into_iter()
        .map(|(month, (invested, current_value))| MonthlyReturn {
            month,
            invested,
            current_value,
            return_percent: return_percent(current_value, invested),
            percentage: percent_of(invested, total_invested),
        })
        .collect();

    returns.sort_by(|a, b| a.month.cmp(&b.month));
    returns
}

fn sum_by_segment<F>(
    contributions: &[PositionContribution],
    key: SegmentKey,
    amount: F,
) -> HashMap<String, Decimal>
where
    F: Fn(&PositionContribution) -> Decimal,
{
    let mut sums: HashMap<String, Decimal> = HashMap::new();
    for contribution in contributions {
        *sums
            .entry(segment_label(contribution, key))
            .or_insert(Decimal::ZERO) += amount(contribution);
    }
    sums
}

fn by_value_then_label(
    a_value: Decimal,
    a_label: &str,
    b_value: Decimal,
    b_label: &str,
) -> Ordering {
    b_value.cmp(&a_value).then_with(|| a_label.cmp(b_label))
}
