//! Fixed-scale rendering of amounts, percentages and quantities.
//!
//! Amounts use commercial half-up rounding, the convention of the upstream
//! invoice model. Output never carries thousands separators, currency
//! symbols or a percent sign. The fixed scale holds for every value with at
//! most 26 integer digits; beyond that `Decimal` precision runs out.

use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits of every monetary amount.
pub const AMOUNT_SCALE: u32 = 2;

/// Fractional digits of every percentage.
pub const PERCENTAGE_SCALE: u32 = 4;

/// Render a monetary amount with exactly two fractional digits.
pub fn format_amount(value: Decimal) -> String {
    to_scale(value, AMOUNT_SCALE)
}

/// Render a percentage (22 means 22 %) with exactly four fractional digits.
pub fn format_percentage(value: Decimal) -> String {
    to_scale(value, PERCENTAGE_SCALE)
}

/// Render a quantity with at least two fractional digits, stripping
/// trailing zeros beyond that.
pub fn format_quantity(value: Decimal) -> String {
    let normalized = value.normalize();
    if normalized.scale() < AMOUNT_SCALE {
        to_scale(normalized, AMOUNT_SCALE)
    } else {
        normalized.to_string()
    }
}

/// Round half-up and pad to `scale` fractional digits.
///
/// `Decimal` holds at most 28 significant digits, so a value with more than
/// `28 - scale` integer digits keeps only as many fractional digits as fit
/// (none at all near `Decimal::MAX`). Invoice amounts never come close.
fn to_scale(value: Decimal, scale: u32) -> String {
    let mut d = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    d.rescale(scale);
    if d.is_zero() {
        d.set_sign_positive(true);
    }
    d.to_string()
}
