//! Assembled FatturaPA document aggregate.
//!
//! Field docs name the schema element each field maps to. `Option` fields
//! are optional in the schema and must be omitted, not emitted empty, when
//! `None`. All amounts and percentages are already rendered strings.

use chrono::NaiveDate;
use serde::Serialize;

/// FatturaElettronica.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// FatturaElettronicaHeader.
    pub header: Header,
    /// FatturaElettronicaBody.
    pub body: Body,
}

/// FatturaElettronicaHeader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    /// DatiTrasmissione.
    pub transmission: TransmissionData,
    /// CedentePrestatore.
    pub supplier: PartyBlock,
    /// CessionarioCommittente.
    pub customer: PartyBlock,
}

/// DatiTrasmissione.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransmissionData {
    /// IdTrasmittente.
    pub transmitter: VatId,
    /// ProgressivoInvio.
    pub progressive: String,
    /// FormatoTrasmissione.
    pub format: String,
    /// CodiceDestinatario.
    pub destination_code: String,
}

/// CedentePrestatore / CessionarioCommittente.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartyBlock {
    /// IdFiscaleIVA or CodiceFiscale, never both.
    pub identity: FiscalIdentity,
    /// Anagrafica.
    pub name: NameBlock,
    /// RegimeFiscale, supplier only.
    pub tax_regime: Option<String>,
    /// Sede.
    pub address: Option<AddressBlock>,
    /// IscrizioneREA, supplier only.
    pub registration: Option<RegistrationBlock>,
}

/// Fiscal identity of a party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FiscalIdentity {
    /// IdFiscaleIVA.
    VatId(VatId),
    /// CodiceFiscale.
    FiscalCode(String),
}

impl FiscalIdentity {
    pub fn vat_id(&self) -> Option<&VatId> {
        match self {
            Self::VatId(id) => Some(id),
            Self::FiscalCode(_) => None,
        }
    }

    pub fn fiscal_code(&self) -> Option<&str> {
        match self {
            Self::VatId(_) => None,
            Self::FiscalCode(code) => Some(code),
        }
    }
}

/// IdFiscaleIVA / IdTrasmittente.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VatId {
    /// IdPaese.
    pub country: String,
    /// IdCodice.
    pub code: String,
}

/// Anagrafica.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameBlock {
    /// Denominazione.
    pub organization: String,
    /// Nome.
    pub given: Option<String>,
    /// Cognome.
    pub surname: Option<String>,
    /// Titolo.
    pub title: Option<String>,
}

/// Sede.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressBlock {
    /// Indirizzo.
    pub street: String,
    /// NumeroCivico.
    pub number: Option<String>,
    /// CAP.
    pub postal_code: String,
    /// Comune.
    pub locality: String,
    /// Provincia.
    pub province: Option<String>,
    /// Nazione.
    pub country: String,
}

/// IscrizioneREA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationBlock {
    /// Ufficio.
    pub office: String,
    /// NumeroREA.
    pub number: String,
    /// CapitaleSociale.
    pub capital: Option<String>,
    /// StatoLiquidazione.
    pub liquidation_status: String,
}

/// FatturaElettronicaBody.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Body {
    /// DatiGenerali.
    pub general: GeneralData,
    /// DatiBeniServizi.
    pub goods_services: GoodsServicesData,
    /// DatiPagamento.
    pub payment: Option<PaymentData>,
}

/// DatiGeneraliDocumento.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneralData {
    /// TipoDocumento.
    pub document_type: String,
    /// Divisa.
    pub currency: String,
    /// Data.
    pub date: NaiveDate,
    /// Numero.
    pub number: String,
    /// DatiRitenuta.
    pub retained_taxes: Vec<RetainedTaxRow>,
    /// Causale.
    pub reasons: Vec<String>,
}

/// DatiRitenuta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetainedTaxRow {
    /// TipoRitenuta.
    pub withholding_type: String,
    /// ImportoRitenuta.
    pub amount: String,
    /// AliquotaRitenuta.
    pub rate: String,
    /// CausalePagamento.
    pub payment_reason: String,
}

/// DatiBeniServizi.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoodsServicesData {
    /// DettaglioLinee.
    pub lines: Vec<LineRow>,
    /// DatiRiepilogo.
    pub summary: Vec<SummaryRow>,
}

/// DettaglioLinee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineRow {
    /// NumeroLinea.
    pub number: u32,
    /// Descrizione.
    pub description: String,
    /// Quantita.
    pub quantity: String,
    /// PrezzoUnitario.
    pub unit_price: String,
    /// PrezzoTotale.
    pub total_price: String,
    /// AliquotaIVA. `None` when the line has no VAT entry.
    pub vat_rate: Option<String>,
}

/// DatiRiepilogo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    /// AliquotaIVA.
    pub vat_rate: String,
    /// ImponibileImporto.
    pub taxable_amount: String,
    /// Imposta.
    pub tax_amount: String,
    /// EsigibilitaIVA.
    pub vat_exigibility: String,
}

/// DatiPagamento.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentData {
    /// CondizioniPagamento.
    pub condition: String,
    /// DettaglioPagamento.
    pub details: Vec<PaymentDetail>,
}

/// DettaglioPagamento.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentDetail {
    /// ModalitaPagamento.
    pub method: String,
    /// DataScadenzaPagamento.
    pub due_date: Option<NaiveDate>,
    /// ImportoPagamento.
    pub amount: String,
}
