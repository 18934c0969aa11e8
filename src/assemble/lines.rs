//! DatiBeniServizi: one row per line, one summary row per VAT rate.

use rust_decimal::Decimal;

use crate::core::{Invoice, Line, NoteKey, TAX_CATEGORY_VAT};

use super::defaults::AssemblyDefaults;
use super::document::{GoodsServicesData, LineRow, SummaryRow};
use super::numeric::{format_amount, format_percentage, format_quantity};

pub fn build_goods_services(invoice: &Invoice, defaults: &AssemblyDefaults) -> GoodsServicesData {
    GoodsServicesData {
        lines: build_line_rows(invoice),
        summary: build_summary_rows(invoice, defaults),
    }
}

/// One row per invoice line, in input order.
pub fn build_line_rows(invoice: &Invoice) -> Vec<LineRow> {
    invoice
        .lines
        .iter()
        .map(|line| LineRow {
            number: line.index,
            description: line_description(line),
            quantity: format_quantity(line.quantity),
            unit_price: format_amount(line.item.price),
            total_price: format_amount(line.sum),
            vat_rate: line
                .taxes
                .iter()
                .find(|t| t.category == TAX_CATEGORY_VAT)
                .and_then(|t| t.percent)
                .map(format_percentage),
        })
        .collect()
}

/// Concatenate the line's goods notes: each fragment trimmed and terminated
/// with a period, fragments joined by a single space.
fn line_description(line: &Line) -> String {
    line.notes
        .iter()
        .filter(|n| n.key == NoteKey::Goods)
        .map(|n| n.text.trim())
        .filter(|text| !text.is_empty())
        .map(|text| {
            if text.ends_with('.') {
                text.to_string()
            } else {
                format!("{text}.")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One summary row per distinct VAT rate of the VAT category totals, in the
/// order each rate first appears. Buckets sharing a rendered rate (including
/// every bucket without a percentage, which renders as zero) are folded
/// together by summing base and tax. Lines are never re-aggregated.
pub fn build_summary_rows(invoice: &Invoice, defaults: &AssemblyDefaults) -> Vec<SummaryRow> {
    let Some(vat) = invoice
        .totals
        .taxes
        .iter()
        .find(|cat| cat.code == TAX_CATEGORY_VAT)
    else {
        return Vec::new();
    };

    let mut groups: Vec<(String, Decimal, Decimal)> = Vec::new();
    for rate in &vat.rates {
        let key = format_percentage(rate.percent.unwrap_or(Decimal::ZERO));
        match groups.iter_mut().find(|(k, _, _)| *k == key) {
            Some((_, base, amount)) => {
                *base += rate.base;
                *amount += rate.amount;
            }
            None => groups.push((key, rate.base, rate.amount)),
        }
    }

    groups
        .into_iter()
        .map(|(vat_rate, base, amount)| SummaryRow {
            vat_rate,
            taxable_amount: format_amount(base),
            tax_amount: format_amount(amount),
            vat_exigibility: defaults.vat_exigibility.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn invoice(lines: Vec<Line>, taxes: Vec<CategoryTotal>) -> Invoice {
        let mut b = InvoiceBuilder::new("L-1", NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
            .supplier(PartyBuilder::new("S").build())
            .customer(PartyBuilder::new("C").build());
        for line in lines {
            b = b.add_line(line);
        }
        for total in taxes {
            b = b.add_tax_total(total);
        }
        b.build().unwrap()
    }

    #[test]
    fn description_joins_goods_notes() {
        let line = LineBuilder::new(1, "Item", dec!(1), dec!(10))
            .goods("  Red widget ")
            .note(NoteKey::General, "ignored")
            .goods("Blue widget.")
            .build();
        assert_eq!(line_description(&line), "Red widget. Blue widget.");
    }

    #[test]
    fn description_skips_trailing_non_goods_notes() {
        let line = LineBuilder::new(1, "Item", dec!(1), dec!(10))
            .goods("Only one")
            .note(NoteKey::Legal, "legal text")
            .build();
        assert_eq!(line_description(&line), "Only one.");
    }

    #[test]
    fn description_empty_without_goods_notes() {
        let line = LineBuilder::new(1, "Item", dec!(1), dec!(10)).build();
        assert_eq!(line_description(&line), "");
    }

    #[test]
    fn row_fields() {
        let inv = invoice(
            vec![
                LineBuilder::new(1, "A", dec!(2), dec!(12.5))
                    .goods("Consulting")
                    .tax("IRPEF", Some("self-employed-habitual"), Some(dec!(20)))
                    .vat(dec!(22))
                    .build(),
                LineBuilder::new(2, "B", dec!(1.5), dec!(3)).build(),
            ],
            Vec::new(),
        );
        let rows = build_line_rows(&inv);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[0].quantity, "2.00");
        assert_eq!(rows[0].unit_price, "12.50");
        assert_eq!(rows[0].total_price, "25.00");
        assert_eq!(rows[0].vat_rate.as_deref(), Some("22.0000"));
        assert_eq!(rows[1].number, 2);
        assert_eq!(rows[1].quantity, "1.50");
        assert_eq!(rows[1].vat_rate, None);
    }

    #[test]
    fn summary_from_totals_in_order() {
        let inv = invoice(
            Vec::new(),
            vec![
                TaxTotalBuilder::new("IRPEF")
                    .retained()
                    .rate(Some("self-employed-habitual"), dec!(100), Some(dec!(20)), dec!(20))
                    .build(),
                TaxTotalBuilder::new(TAX_CATEGORY_VAT)
                    .rate(Some("standard"), dec!(1000), Some(dec!(22)), dec!(220))
                    .rate(Some("reduced"), dec!(50), Some(dec!(10)), dec!(5))
                    .build(),
            ],
        );
        let rows = build_summary_rows(&inv, &AssemblyDefaults::default());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].vat_rate, "22.0000");
        assert_eq!(rows[0].taxable_amount, "1000.00");
        assert_eq!(rows[0].tax_amount, "220.00");
        assert_eq!(rows[0].vat_exigibility, "I");
        assert_eq!(rows[1].vat_rate, "10.0000");
    }

    #[test]
    fn summary_folds_buckets_with_the_same_rate() {
        let inv = invoice(
            Vec::new(),
            vec![
                TaxTotalBuilder::new(TAX_CATEGORY_VAT)
                    .rate(Some("zero"), dec!(100), None, dec!(0))
                    .rate(Some("standard"), dec!(1000), Some(dec!(22)), dec!(220))
                    .rate(Some("exempt"), dec!(40), None, dec!(0))
                    .rate(Some("standard"), dec!(500.50), Some(dec!(22.00)), dec!(110.11))
                    .build(),
            ],
        );
        let rows = build_summary_rows(&inv, &AssemblyDefaults::default());
        let rates: Vec<&str> = rows.iter().map(|r| r.vat_rate.as_str()).collect();
        assert_eq!(rates, vec!["0.0000", "22.0000"]);
        assert_eq!(rows[0].taxable_amount, "140.00");
        assert_eq!(rows[0].tax_amount, "0.00");
        assert_eq!(rows[1].taxable_amount, "1500.50");
        assert_eq!(rows[1].tax_amount, "330.11");
    }

    #[test]
    fn summary_empty_without_vat() {
        let inv = invoice(Vec::new(), Vec::new());
        assert!(build_summary_rows(&inv, &AssemblyDefaults::default()).is_empty());
    }
}
