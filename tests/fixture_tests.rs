//! Assembly of invoices loaded from JSON fixtures.
//!
//! Run with: `cargo test --features json --test fixture_tests`

#![cfg(all(feature = "json", feature = "assemble"))]

use chrono::NaiveDate;
use fatturapa::assemble::*;
use fatturapa::core::*;

const INVOICE_SIMPLE: &str = include_str!("fixtures/invoice-simple.json");

fn load() -> Invoice {
    invoice_from_json(INVOICE_SIMPLE).unwrap()
}

#[test]
fn fixture_decodes() {
    let inv = load();
    assert_eq!(inv.code, "SAMPLE-001");
    assert_eq!(inv.lines.len(), 1);
    assert_eq!(inv.totals.taxes.len(), 2);
    assert!(inv.totals.taxes[1].retained);
}

#[test]
fn fixture_transmission_and_parties() {
    let doc = assemble(&load()).unwrap();

    let dt = &doc.header.transmission;
    assert_eq!(dt.transmitter.country, "IT");
    assert_eq!(dt.transmitter.code, "12345678903");
    assert_eq!(dt.progressive, "0190806e");
    assert_eq!(dt.destination_code, "M5UXCR1");

    let supplier = &doc.header.supplier;
    assert_eq!(supplier.identity.vat_id().unwrap().code, "12345678903");
    assert_eq!(supplier.name.organization, "Studio Legale Verdi");
    assert_eq!(supplier.name.given.as_deref(), Some("Giulia"));
    assert_eq!(supplier.name.title.as_deref(), Some("Avv."));
    assert_eq!(supplier.tax_regime.as_deref(), Some("RF01"));
    let rea = supplier.registration.as_ref().unwrap();
    assert_eq!(rea.capital.as_deref(), Some("10000.00"));

    let customer = &doc.header.customer;
    assert_eq!(customer.identity.vat_id().unwrap().code, "13029381004");
    let addr = customer.address.as_ref().unwrap();
    assert_eq!(addr.province.as_deref(), Some("RM"));
    assert_eq!(addr.postal_code, "00100");
}

#[test]
fn fixture_body() {
    let doc = assemble(&load()).unwrap();

    let g = &doc.body.general;
    assert_eq!(g.document_type, "TD01");
    assert_eq!(g.date, NaiveDate::from_ymd_opt(2023, 3, 2).unwrap());
    assert_eq!(g.reasons, vec!["Prestazione professionale".to_string()]);
    assert_eq!(g.retained_taxes.len(), 1);
    assert_eq!(g.retained_taxes[0].withholding_type, "RT01");
    assert_eq!(g.retained_taxes[0].amount, "360.00");
    assert_eq!(g.retained_taxes[0].rate, "20.0000");
    assert_eq!(g.retained_taxes[0].payment_reason, "A");

    let line = &doc.body.goods_services.lines[0];
    assert_eq!(line.description, "Consulenza legale. Redazione contratto.");
    assert_eq!(line.quantity, "20.00");
    assert_eq!(line.unit_price, "90.00");
    assert_eq!(line.total_price, "1800.00");
    assert_eq!(line.vat_rate.as_deref(), Some("22.0000"));

    let summary = &doc.body.goods_services.summary[0];
    assert_eq!(summary.vat_rate, "22.0000");
    assert_eq!(summary.taxable_amount, "1800.00");
    assert_eq!(summary.tax_amount, "396.00");
    assert_eq!(summary.vat_exigibility, "I");

    let payment = doc.body.payment.as_ref().unwrap();
    assert_eq!(payment.condition, "TP02");
    assert_eq!(payment.details[0].method, "MP05");
    assert_eq!(payment.details[0].amount, "1836.00");
}

#[test]
fn registry_from_json_overrides_codes() {
    let registry = TaxRegistry::from_json(
        r#"{
            "default_regime": "RF19",
            "categories": [
                { "code": "VAT" },
                {
                    "code": "IRPEF",
                    "withholding_type": "RT01",
                    "rates": [ { "key": "self-employed-habitual", "payment_reason": "M" } ]
                }
            ]
        }"#,
    )
    .unwrap();
    let doc = Assembler::new(registry).assemble(&load()).unwrap();
    assert_eq!(doc.header.supplier.tax_regime.as_deref(), Some("RF19"));
    assert_eq!(doc.body.general.retained_taxes[0].payment_reason, "M");
}

#[test]
fn document_serializes_to_json() {
    let doc = assemble(&load()).unwrap();
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value["body"]["general"]["number"], "SAMPLE-001");
    assert_eq!(value["header"]["transmission"]["format"], "FPR12");
}
