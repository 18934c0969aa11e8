use chrono::NaiveDate;
use fatturapa::assemble::{Assembler, FiscalIdentity, TaxRegistry, Transmitter};
use fatturapa::core::*;
use rust_decimal_macros::dec;

fn main() {
    // A freelance consultant invoicing an Italian company, with IRPEF withheld
    let invoice = InvoiceBuilder::new("2024/042", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .uuid("679a2f25-7483-11ec-9722-6ea2147b2e5f")
        .supplier(
            PartyBuilder::new("Marco Neri")
                .tax_id("IT", "12345678903")
                .person("Marco", "Neri")
                .address(
                    AddressBuilder::new("Via Garibaldi", "16124", "Genova", "IT")
                        .number("8")
                        .region("GE")
                        .build(),
                )
                .build(),
        )
        .customer(
            PartyBuilder::new("Porto Servizi S.p.A.")
                .tax_id("IT", "09876543217")
                .inbox(INBOX_KEY_CODICE_DESTINATARIO, "KRRH6B9")
                .build(),
        )
        .note(NoteKey::Reason, "Consulenza logistica giugno 2024")
        .add_line(
            LineBuilder::new(1, "Consulenza", dec!(12), dec!(125))
                .goods("Analisi flussi portuali")
                .vat(dec!(22))
                .tax("IRPEF", Some("self-employed-habitual"), Some(dec!(20)))
                .build(),
        )
        .add_tax_total(
            TaxTotalBuilder::new(TAX_CATEGORY_VAT)
                .rate(Some("standard"), dec!(1500), Some(dec!(22)), dec!(330))
                .build(),
        )
        .add_tax_total(
            TaxTotalBuilder::new("IRPEF")
                .retained()
                .rate(Some("self-employed-habitual"), dec!(1500), Some(dec!(20)), dec!(300))
                .build(),
        )
        .scenario_meta(KEY_REGIME_FISCALE, "RF01")
        .payable(dec!(1830))
        .due(dec!(1530))
        .build()
        .expect("invoice should be valid");

    let assembler = Assembler::new(TaxRegistry::italy())
        .with_transmitter(Transmitter::new("IT", "01879020517"));
    let doc = assembler.assemble(&invoice).expect("assembly should succeed");

    let dt = &doc.header.transmission;
    println!("Transmitter: {}{}", dt.transmitter.country, dt.transmitter.code);
    println!("Progressive: {}", dt.progressive);
    println!("Recipient:   {}", dt.destination_code);
    println!("---");
    for (label, party) in [("Supplier", &doc.header.supplier), ("Customer", &doc.header.customer)] {
        let id = match &party.identity {
            FiscalIdentity::VatId(v) => format!("VAT {}{}", v.country, v.code),
            FiscalIdentity::FiscalCode(cf) => format!("CF {cf}"),
        };
        println!("{label}: {} ({id})", party.name.organization);
    }
    println!("---");
    let g = &doc.body.general;
    println!("{} {} {} {}", g.document_type, g.number, g.date, g.currency);
    for line in &doc.body.goods_services.lines {
        println!(
            "  #{} {} x {} = {} (VAT {})",
            line.number,
            line.quantity,
            line.unit_price,
            line.total_price,
            line.vat_rate.as_deref().unwrap_or("-")
        );
    }
    for row in &doc.body.goods_services.summary {
        println!(
            "  VAT {}%: {} on {}",
            row.vat_rate, row.tax_amount, row.taxable_amount
        );
    }
    for r in &g.retained_taxes {
        println!(
            "  Withholding {} ({}): {} at {}%",
            r.withholding_type, r.payment_reason, r.amount, r.rate
        );
    }
    if let Some(payment) = &doc.body.payment {
        for d in &payment.details {
            println!("Payment {} {}: {}", payment.condition, d.method, d.amount);
        }
    }

    // Unknown withholding categories abort assembly
    let mut registry = TaxRegistry::italy();
    registry.categories.retain(|c| c.code != "IRPEF");
    match Assembler::new(registry).assemble(&invoice) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("Assembly failed: {e}"),
    }
}
