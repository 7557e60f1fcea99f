use super::FeeBreakdown;
use crate::ledger::Transaction;
use crate::utils::decimal_utils::apply_percent;

/// Management and performance fees as percentages of the transaction's
/// net capital. A missing percentage means no fee of that kind.
pub fn calculate_fees(transaction: &Transaction) -> FeeBreakdown {
    let net_capital = transaction.net_capital();
    let management_fee = apply_percent(net_capital, transaction.management_fee_percent);
    let performance_fee = apply_percent(net_capital, transaction.performance_fee_percent);

    FeeBreakdown {
        management_fee,
        performance_fee,
        total_fees: management_fee + performance_fee,
    }
}
