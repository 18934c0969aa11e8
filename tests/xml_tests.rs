//! FatturaPA XML rendering.
//!
//! Run with: `cargo test --features xml --test xml_tests`

#![cfg(feature = "xml")]

use chrono::NaiveDate;
use fatturapa::assemble::*;
use fatturapa::core::*;
use fatturapa::xml;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn invoice() -> Invoice {
    InvoiceBuilder::new("FT-7", date(2024, 11, 4))
        .uuid("a1b2c3d4-0000-4000-8000-000000000000")
        .supplier(
            PartyBuilder::new("Rossi & Figli S.r.l.")
                .tax_id("IT", "12345678903")
                .address(
                    AddressBuilder::new("Via Po", "10121", "Torino", "IT")
                        .number("3")
                        .region("TO")
                        .build(),
                )
                .build(),
        )
        .customer(
            PartyBuilder::new("Dupont SARL")
                .tax_id("FR", "FR12345678901")
                .address(AddressBuilder::new("Rue de Rivoli", "75001", "Paris", "FR").build())
                .build(),
        )
        .note(NoteKey::Reason, "Fornitura ottobre")
        .add_line(
            LineBuilder::new(1, "Viti", dec!(100), dec!(0.35))
                .goods("Viti inox")
                .vat(dec!(22))
                .build(),
        )
        .add_tax_total(
            TaxTotalBuilder::new(TAX_CATEGORY_VAT)
                .rate(Some("standard"), dec!(35), Some(dec!(22)), dec!(7.70))
                .build(),
        )
        .payable(dec!(42.70))
        .build()
        .unwrap()
}

fn render() -> String {
    let doc = assemble(&invoice()).unwrap();
    xml::to_xml(&doc).unwrap()
}

#[test]
fn root_element_and_namespaces() {
    let xml = render();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<p:FatturaElettronica versione=\"FPR12\""));
    assert!(xml.contains(xml::FATTURAPA_NS));
    assert!(xml.contains(xml::XMLDSIG_NS));
    assert!(xml.trim_end().ends_with("</p:FatturaElettronica>"));
}

#[test]
fn header_fields() {
    let xml = render();
    assert!(xml.contains("<ProgressivoInvio>a1b2c3d4</ProgressivoInvio>"));
    assert!(xml.contains("<CodiceDestinatario>XXXXXXX</CodiceDestinatario>"));
    assert!(xml.contains("<IdPaese>FR</IdPaese>"));
    assert!(xml.contains("<IdCodice>FR12345678901</IdCodice>"));
    assert!(xml.contains("<RegimeFiscale>RF01</RegimeFiscale>"));
    assert!(xml.contains("<Provincia>TO</Provincia>"));
}

#[test]
fn special_characters_are_escaped() {
    let xml = render();
    assert!(xml.contains("<Denominazione>Rossi &amp; Figli S.r.l.</Denominazione>"));
}

#[test]
fn absent_optionals_are_omitted() {
    let xml = render();
    // Customer is foreign: no province, no REA, no regime.
    assert_eq!(xml.matches("<Provincia>").count(), 1);
    assert_eq!(xml.matches("<RegimeFiscale>").count(), 1);
    assert!(!xml.contains("IscrizioneREA"));
    assert!(!xml.contains("DatiRitenuta"));
    assert!(!xml.contains("<Nome>"));
    assert!(!xml.contains("DataScadenzaPagamento"));
    assert!(!xml.contains("<Provincia></Provincia>"));
}

#[test]
fn body_fields() {
    let xml = render();
    assert!(xml.contains("<TipoDocumento>TD01</TipoDocumento>"));
    assert!(xml.contains("<Data>2024-11-04</Data>"));
    assert!(xml.contains("<Causale>Fornitura ottobre</Causale>"));
    assert!(xml.contains("<Descrizione>Viti inox.</Descrizione>"));
    assert!(xml.contains("<Quantita>100.00</Quantita>"));
    assert!(xml.contains("<PrezzoUnitario>0.35</PrezzoUnitario>"));
    assert!(xml.contains("<AliquotaIVA>22.0000</AliquotaIVA>"));
    assert!(xml.contains("<Imposta>7.70</Imposta>"));
    assert!(xml.contains("<ImportoPagamento>42.70</ImportoPagamento>"));
}

#[test]
fn schema_order_within_body() {
    let xml = render();
    let pos = |tag: &str| xml.find(tag).unwrap();
    assert!(pos("<DatiGenerali>") < pos("<DatiBeniServizi>"));
    assert!(pos("<DettaglioLinee>") < pos("<DatiRiepilogo>"));
    assert!(pos("<DatiBeniServizi>") < pos("<DatiPagamento>"));
    assert!(pos("<CedentePrestatore>") < pos("<CessionarioCommittente>"));
}

#[test]
fn retained_rows_rendered() {
    let inv = InvoiceBuilder::new("FT-8", date(2024, 11, 4))
        .supplier(PartyBuilder::new("Studio").tax_id("IT", "12345678903").build())
        .customer(PartyBuilder::new("Cliente").tax_id("IT", "09876543217").build())
        .add_tax_total(
            TaxTotalBuilder::new("INPS")
                .retained()
                .rate(Some("self-employed-habitual"), dec!(1000), Some(dec!(4)), dec!(40))
                .build(),
        )
        .payable(dec!(960))
        .build()
        .unwrap();
    let xml = xml::to_xml(&assemble(&inv).unwrap()).unwrap();
    assert!(xml.contains("<TipoRitenuta>RT03</TipoRitenuta>"));
    assert!(xml.contains("<ImportoRitenuta>40.00</ImportoRitenuta>"));
    assert!(xml.contains("<AliquotaRitenuta>4.0000</AliquotaRitenuta>"));
}
