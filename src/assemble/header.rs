//! DatiTrasmissione.

use crate::core::{INBOX_KEY_CODICE_DESTINATARIO, Invoice, is_italy};

use super::defaults::{AssemblyDefaults, Transmitter};
use super::document::{FiscalIdentity, PartyBlock, TransmissionData, VatId};

/// Length of the progressive number taken from the invoice UUID.
const PROGRESSIVE_UUID_LEN: usize = 8;

/// Maximum length of ProgressivoInvio.
const PROGRESSIVE_MAX_LEN: usize = 10;

/// Build the transmission block.
///
/// Without a configured intermediary the supplier transmits its own
/// documents, so its VAT ID becomes IdTrasmittente.
pub fn build_transmission(
    invoice: &Invoice,
    supplier: &PartyBlock,
    customer: &PartyBlock,
    transmitter: Option<&Transmitter>,
    defaults: &AssemblyDefaults,
) -> TransmissionData {
    let transmitter = match (transmitter, &supplier.identity) {
        (Some(t), _) => VatId {
            country: t.country.clone(),
            code: t.tax_id.clone(),
        },
        (None, FiscalIdentity::VatId(id)) => id.clone(),
        (None, FiscalIdentity::FiscalCode(code)) => VatId {
            country: crate::core::countries::COUNTRY_IT.to_string(),
            code: code.clone(),
        },
    };

    TransmissionData {
        transmitter,
        progressive: progressive_number(invoice),
        format: defaults.transmission_format.clone(),
        destination_code: destination_code(invoice, customer, defaults),
    }
}

/// ProgressivoInvio: the first hex digits of the document UUID, or the
/// alphanumeric part of the invoice code when there is no UUID.
fn progressive_number(invoice: &Invoice) -> String {
    match invoice.uuid.as_deref().filter(|u| !u.trim().is_empty()) {
        Some(uuid) => uuid
            .chars()
            .filter(|c| *c != '-')
            .take(PROGRESSIVE_UUID_LEN)
            .collect(),
        None => invoice
            .code
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .take(PROGRESSIVE_MAX_LEN)
            .collect(),
    }
}

fn destination_code(invoice: &Invoice, customer: &PartyBlock, defaults: &AssemblyDefaults) -> String {
    if let Some(inbox) = invoice
        .customer
        .inboxes
        .iter()
        .find(|i| i.key == INBOX_KEY_CODICE_DESTINATARIO && !i.code.is_empty())
    {
        return inbox.code.clone();
    }

    let domestic = match &customer.identity {
        FiscalIdentity::VatId(id) => is_italy(&id.country),
        FiscalIdentity::FiscalCode(_) => true,
    };
    if domestic {
        defaults.domestic_destination_code.clone()
    } else {
        defaults.foreign_destination_code.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::document::NameBlock;
    use crate::core::*;
    use chrono::NaiveDate;

    fn block(identity: FiscalIdentity) -> PartyBlock {
        PartyBlock {
            identity,
            name: NameBlock {
                organization: "X".into(),
                given: None,
                surname: None,
                title: None,
            },
            tax_regime: None,
            address: None,
            registration: None,
        }
    }

    fn vat(country: &str, code: &str) -> FiscalIdentity {
        FiscalIdentity::VatId(VatId {
            country: country.into(),
            code: code.into(),
        })
    }

    fn invoice(customer: Party) -> InvoiceBuilder {
        InvoiceBuilder::new("2024/INV-0001", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .supplier(PartyBuilder::new("S").tax_id("IT", "12345678903").build())
            .customer(customer)
    }

    #[test]
    fn supplier_transmits_by_default() {
        let inv = invoice(PartyBuilder::new("C").build())
            .uuid("679a2f25-7483-11ec-9722-6ea2147b2e5f")
            .build()
            .unwrap();
        let dt = build_transmission(
            &inv,
            &block(vat("IT", "12345678903")),
            &block(vat("IT", "09876543217")),
            None,
            &AssemblyDefaults::default(),
        );
        assert_eq!(dt.transmitter.country, "IT");
        assert_eq!(dt.transmitter.code, "12345678903");
        assert_eq!(dt.progressive, "679a2f25");
        assert_eq!(dt.format, "FPR12");
        assert_eq!(dt.destination_code, "0000000");
    }

    #[test]
    fn configured_transmitter_wins() {
        let inv = invoice(PartyBuilder::new("C").build()).build().unwrap();
        let t = Transmitter::new("IT", "01234567890");
        let dt = build_transmission(
            &inv,
            &block(vat("IT", "12345678903")),
            &block(vat("IT", "09876543217")),
            Some(&t),
            &AssemblyDefaults::default(),
        );
        assert_eq!(dt.transmitter.code, "01234567890");
        assert_eq!(dt.progressive, "2024INV000");
    }

    #[test]
    fn destination_from_inbox() {
        let customer = PartyBuilder::new("C")
            .inbox(INBOX_KEY_CODICE_DESTINATARIO, "ABCDEF1")
            .build();
        let inv = invoice(customer).build().unwrap();
        let dt = build_transmission(
            &inv,
            &block(vat("IT", "12345678903")),
            &block(vat("IT", "09876543217")),
            None,
            &AssemblyDefaults::default(),
        );
        assert_eq!(dt.destination_code, "ABCDEF1");
    }

    #[test]
    fn foreign_customer_destination() {
        let inv = invoice(PartyBuilder::new("C").build()).build().unwrap();
        let dt = build_transmission(
            &inv,
            &block(vat("IT", "12345678903")),
            &block(vat("US", "99999999999")),
            None,
            &AssemblyDefaults::default(),
        );
        assert_eq!(dt.destination_code, "XXXXXXX");
    }
}
