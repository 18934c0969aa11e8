use crate::core::{FatturaError, Invoice, NoteKey};

use super::defaults::{AssemblyDefaults, Transmitter};
use super::document::{
    Body, Document, GeneralData, Header, PaymentData, PaymentDetail, RetainedTaxRow,
};
use super::header::build_transmission;
use super::lines::build_goods_services;
use super::numeric::format_amount;
use super::parties::{build_customer, build_supplier};
use super::registry::TaxRegistry;
use super::retained::extract_retained_taxes;

/// Turns computed invoices into FatturaPA document aggregates.
///
/// An assembler is immutable configuration: a tax code registry, the fixed
/// document defaults and an optional transmitting intermediary. It can be
/// shared across threads and reused for any number of invoices.
///
/// ```
/// use fatturapa::assemble::{Assembler, TaxRegistry};
/// use fatturapa::core::*;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let invoice = InvoiceBuilder::new("2024-001", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
///     .supplier(PartyBuilder::new("Rossi S.r.l.").tax_id("IT", "12345678903").build())
///     .customer(PartyBuilder::new("Bianchi S.p.A.").tax_id("IT", "09876543217").build())
///     .add_line(LineBuilder::new(1, "Consulenza", dec!(1), dec!(100)).vat(dec!(22)).build())
///     .payable(dec!(122))
///     .build()
///     .unwrap();
///
/// let doc = Assembler::new(TaxRegistry::italy()).assemble(&invoice).unwrap();
/// assert_eq!(doc.body.general.document_type, "TD01");
/// ```
#[derive(Debug, Clone)]
pub struct Assembler {
    registry: TaxRegistry,
    defaults: AssemblyDefaults,
    transmitter: Option<Transmitter>,
}

impl Assembler {
    pub fn new(registry: TaxRegistry) -> Self {
        Self {
            registry,
            defaults: AssemblyDefaults::default(),
            transmitter: None,
        }
    }

    pub fn with_defaults(mut self, defaults: AssemblyDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_transmitter(mut self, transmitter: Transmitter) -> Self {
        self.transmitter = Some(transmitter);
        self
    }

    pub fn registry(&self) -> &TaxRegistry {
        &self.registry
    }

    pub fn defaults(&self) -> &AssemblyDefaults {
        &self.defaults
    }

    /// Assemble the complete document. The first failing component aborts
    /// assembly; no partial document is returned.
    pub fn assemble(&self, invoice: &Invoice) -> Result<Document, FatturaError> {
        tracing::debug!(
            invoice = %invoice.code,
            lines = invoice.lines.len(),
            "assembling FatturaPA document"
        );

        let supplier = build_supplier(invoice, &self.registry, &self.defaults)?;
        let customer = build_customer(invoice)?;
        let retained_taxes = extract_retained_taxes(invoice, &self.registry)?;

        let transmission = build_transmission(
            invoice,
            &supplier,
            &customer,
            self.transmitter.as_ref(),
            &self.defaults,
        );

        let body = Body {
            general: self.general_data(invoice, retained_taxes),
            goods_services: build_goods_services(invoice, &self.defaults),
            payment: Some(self.payment_data(invoice)),
        };

        tracing::debug!(
            invoice = %invoice.code,
            retained = body.general.retained_taxes.len(),
            summary = body.goods_services.summary.len(),
            "assembled FatturaPA document"
        );

        Ok(Document {
            header: Header {
                transmission,
                supplier,
                customer,
            },
            body,
        })
    }

    fn general_data(&self, invoice: &Invoice, retained_taxes: Vec<RetainedTaxRow>) -> GeneralData {
        GeneralData {
            document_type: self.defaults.document_type.clone(),
            currency: invoice.currency.clone(),
            date: invoice.issue_date,
            number: invoice.code.clone(),
            retained_taxes,
            reasons: invoice_reasons(invoice),
        }
    }

    /// One detail row per due date when the invoice has payment terms,
    /// otherwise a single row for the amount due.
    fn payment_data(&self, invoice: &Invoice) -> PaymentData {
        let method = &self.defaults.payment_method;
        let details = match invoice.payment.as_ref().filter(|p| !p.due_dates.is_empty()) {
            Some(terms) => terms
                .due_dates
                .iter()
                .map(|dd| PaymentDetail {
                    method: method.clone(),
                    due_date: Some(dd.date),
                    amount: format_amount(dd.amount),
                })
                .collect(),
            None => vec![PaymentDetail {
                method: method.clone(),
                due_date: None,
                amount: format_amount(invoice.totals.amount_due()),
            }],
        };

        PaymentData {
            condition: self.defaults.payment_condition.clone(),
            details,
        }
    }
}

/// Causale: the text of every reason note, verbatim and in order.
fn invoice_reasons(invoice: &Invoice) -> Vec<String> {
    invoice
        .notes_with_key(NoteKey::Reason)
        .map(|n| n.text.clone())
        .collect()
}

/// Assemble with the Italian registry and default settings.
pub fn assemble(invoice: &Invoice) -> Result<Document, FatturaError> {
    Assembler::new(TaxRegistry::italy()).assemble(invoice)
}
