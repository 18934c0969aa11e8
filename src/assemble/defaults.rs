//! Document-level constants that the invoice model does not carry yet.
//!
//! Payment condition and method, VAT exigibility and liquidation status are
//! not derived from invoice data; they are fixed placeholders kept here so
//! they can be replaced without touching assembly logic.

use serde::{Deserialize, Serialize};

/// TD01: invoice.
pub const TIPO_DOCUMENTO_DEFAULT: &str = "TD01";
/// TP02: payment in full.
pub const CONDIZIONI_PAGAMENTO_DEFAULT: &str = "TP02";
/// MP05: bank transfer.
pub const MODALITA_PAGAMENTO_DEFAULT: &str = "MP05";
/// I: VAT due immediately.
pub const ESIGIBILITA_IVA_DEFAULT: &str = "I";
/// LN: not in liquidation.
pub const STATO_LIQUIDAZIONE_DEFAULT: &str = "LN";
/// FPR12: transmission to private parties.
pub const FORMATO_TRASMISSIONE_DEFAULT: &str = "FPR12";
/// Recipient code for Italian customers without a registered SdI channel.
pub const CODICE_DESTINATARIO_DOMESTIC: &str = "0000000";
/// Recipient code for customers outside Italy.
pub const CODICE_DESTINATARIO_FOREIGN: &str = "XXXXXXX";

/// Fixed codes applied during assembly. Every field can be overridden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyDefaults {
    /// TipoDocumento.
    pub document_type: String,
    /// CondizioniPagamento.
    pub payment_condition: String,
    /// ModalitaPagamento.
    pub payment_method: String,
    /// EsigibilitaIVA on every summary row.
    pub vat_exigibility: String,
    /// StatoLiquidazione on the supplier's REA block.
    pub liquidation_status: String,
    /// FormatoTrasmissione.
    pub transmission_format: String,
    pub domestic_destination_code: String,
    pub foreign_destination_code: String,
}

impl Default for AssemblyDefaults {
    fn default() -> Self {
        Self {
            document_type: TIPO_DOCUMENTO_DEFAULT.into(),
            payment_condition: CONDIZIONI_PAGAMENTO_DEFAULT.into(),
            payment_method: MODALITA_PAGAMENTO_DEFAULT.into(),
            vat_exigibility: ESIGIBILITA_IVA_DEFAULT.into(),
            liquidation_status: STATO_LIQUIDAZIONE_DEFAULT.into(),
            transmission_format: FORMATO_TRASMISSIONE_DEFAULT.into(),
            domestic_destination_code: CODICE_DESTINATARIO_DOMESTIC.into(),
            foreign_destination_code: CODICE_DESTINATARIO_FOREIGN.into(),
        }
    }
}

/// Intermediary transmitting documents to SdI on the supplier's behalf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transmitter {
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
    /// Fiscal code or VAT number of the intermediary.
    pub tax_id: String,
}

impl Transmitter {
    pub fn new(country: impl Into<String>, tax_id: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            tax_id: tax_id.into(),
        }
    }
}
