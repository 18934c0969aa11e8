use chrono::NaiveDate;
use fatturapa::core::*;
use fatturapa::{assemble, xml};
use rust_decimal_macros::dec;

fn main() {
    // Cross-border sale to a French customer without a VAT number
    let invoice = InvoiceBuilder::new("FT-2024-310", NaiveDate::from_ymd_opt(2024, 10, 1).unwrap())
        .supplier(
            PartyBuilder::new("Ceramiche Vietri S.r.l.")
                .tax_id("IT", "12345678903")
                .registration("SA", "334455", Some(dec!(20000)))
                .address(
                    AddressBuilder::new("Corso Umberto I", "84019", "Vietri sul Mare", "IT")
                        .number("41")
                        .region("SA")
                        .build(),
                )
                .build(),
        )
        .customer(
            PartyBuilder::new("Claire Martin")
                .tax_id("FR", "")
                .person("Claire", "Martin")
                .address(AddressBuilder::new("Rue Paradis", "13001", "Marseille", "FR").build())
                .build(),
        )
        .note(NoteKey::Reason, "Vendita piastrelle")
        .add_line(
            LineBuilder::new(1, "Piastrelle", dec!(24), dec!(12.50))
                .goods("Piastrelle dipinte a mano 20x20")
                .vat(dec!(22))
                .build(),
        )
        .add_tax_total(
            TaxTotalBuilder::new(TAX_CATEGORY_VAT)
                .rate(Some("standard"), dec!(300), Some(dec!(22)), dec!(66))
                .build(),
        )
        .payable(dec!(366))
        .due_date(NaiveDate::from_ymd_opt(2024, 10, 31).unwrap(), dec!(183))
        .due_date(NaiveDate::from_ymd_opt(2024, 11, 30).unwrap(), dec!(183))
        .build()
        .expect("invoice should be valid");

    let doc = assemble::assemble(&invoice).expect("assembly should succeed");
    let xml = xml::to_xml(&doc).expect("rendering should succeed");
    println!("{xml}");
}
