//! DatiRitenuta: withholding tax rows derived from retained category totals.

use rust_decimal::Decimal;

use crate::core::{FatturaError, Invoice};

use super::document::RetainedTaxRow;
use super::numeric::{format_amount, format_percentage};
use super::registry::TaxRegistry;

/// One row per rate of every retained category, in category then rate order.
///
/// Each retained category must have a withholding type, even when it carries
/// no rate buckets; such a category contributes no rows, since there is no
/// withheld amount to report. Fails on the first category or rate without a
/// configured code; no partial list is returned.
pub fn extract_retained_taxes(
    invoice: &Invoice,
    registry: &TaxRegistry,
) -> Result<Vec<RetainedTaxRow>, FatturaError> {
    let mut rows = Vec::new();

    for category in invoice.totals.taxes.iter().filter(|c| c.retained) {
        let withholding_type = registry.withholding_type_code(&category.code)?;
        for rate in &category.rates {
            let payment_reason =
                registry.payment_reason_code(&category.code, rate.key.as_deref())?;

            rows.push(RetainedTaxRow {
                withholding_type: withholding_type.to_string(),
                amount: format_amount(rate.amount),
                rate: format_percentage(rate.percent.unwrap_or(Decimal::ZERO)),
                payment_reason: payment_reason.to_string(),
            });
        }
    }

    Ok(rows)
}
