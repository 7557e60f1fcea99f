//! Decimal helpers for money and ratio math.
//!
//! Every ratio in the engine goes through these functions so each
//! denominator is checked before dividing.

use rust_decimal::Decimal;

use crate::constants::PERCENT_SCALE;

/// Treats a missing amount as zero.
pub fn or_zero(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO)
}

/// `numerator / denominator`, or `default` when the denominator is not positive.
pub fn ratio_or(numerator: Decimal, denominator: Decimal, default: Decimal) -> Decimal {
    if denominator > Decimal::ZERO {
        numerator / denominator
    } else {
        default
    }
}

/// `part / total * 100`, or zero when the total is not positive.
pub fn percent_of(part: Decimal, total: Decimal) -> Decimal {
    ratio_or(part, total, Decimal::ZERO) * Decimal::from(PERCENT_SCALE)
}

/// Gain over invested capital in percent, or zero with nothing invested.
pub fn return_percent(current_value: Decimal, invested: Decimal) -> Decimal {
    percent_of(current_value - invested, invested)
}

/// `amount * percent / 100`, zero when the percentage is missing.
pub fn apply_percent(amount: Decimal, percent: Option<Decimal>) -> Decimal {
    match percent {
        Some(p) => amount * p / Decimal::from(PERCENT_SCALE),
        None => Decimal::ZERO,
    }
}
