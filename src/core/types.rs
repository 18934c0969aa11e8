use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax category code for value added tax.
pub const TAX_CATEGORY_VAT: &str = "VAT";

/// Scenario metadata key carrying the supplier's Regime Fiscale code.
pub const KEY_REGIME_FISCALE: &str = "fatturapa-regime-fiscale";

/// Identity type for the Italian Codice Fiscale.
pub const IDENTITY_TYPE_CF: &str = "CF";

/// Inbox key for the SdI recipient code (Codice Destinatario).
pub const INBOX_KEY_CODICE_DESTINATARIO: &str = "codice-destinatario";

/// A fully computed invoice, as handed over by the upstream domain model.
///
/// Totals, tax rates and rounding are already final; nothing in this crate
/// recomputes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Document UUID, used for the transmission progressive number.
    #[serde(default)]
    pub uuid: Option<String>,
    /// Invoice number.
    pub code: String,
    /// Issue date.
    pub issue_date: NaiveDate,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Free-text notes, tagged by kind.
    #[serde(default)]
    pub notes: Vec<Note>,
    pub supplier: Party,
    pub customer: Party,
    #[serde(default)]
    pub lines: Vec<Line>,
    pub totals: Totals,
    /// Jurisdiction scenario summary.
    #[serde(default)]
    pub scenario: ScenarioSummary,
    /// Payment terms, if the upstream model carries any.
    #[serde(default)]
    pub payment: Option<PaymentTerms>,
}

impl Invoice {
    /// Notes of the given kind, in invoice order.
    pub fn notes_with_key(&self, key: NoteKey) -> impl Iterator<Item = &Note> {
        self.notes.iter().filter(move |n| n.key == key)
    }
}

/// A free-text note attached to an invoice or line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub key: NoteKey,
    pub text: String,
}

impl Note {
    pub fn new(key: NoteKey, text: impl Into<String>) -> Self {
        Self {
            key,
            text: text.into(),
        }
    }
}

/// Kind of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoteKey {
    /// Reason for issuing the document (Causale).
    Reason,
    /// Description of the goods or services on a line.
    Goods,
    /// General remark.
    General,
    /// Payment remark.
    Payment,
    /// Legal statement.
    Legal,
    /// Anything else.
    Other,
}

/// Supplier or customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Party {
    /// Organisation or display name.
    pub name: String,
    /// Natural persons acting for the party. Only the first one is used.
    #[serde(default)]
    pub people: Vec<Person>,
    /// Fiscal identity (country + code).
    #[serde(default)]
    pub tax_id: Option<TaxId>,
    /// Secondary identities such as the Codice Fiscale.
    #[serde(default)]
    pub identities: Vec<Identity>,
    /// Company register entry (REA).
    #[serde(default)]
    pub registration: Option<Registration>,
    #[serde(default)]
    pub addresses: Vec<Address>,
    /// Electronic inboxes (SdI recipient code, PEC).
    #[serde(default)]
    pub inboxes: Vec<Inbox>,
}

/// Person name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub given: String,
    #[serde(default)]
    pub surname: String,
    /// Title, e.g. "Dott.".
    #[serde(default)]
    pub prefix: String,
}

/// Fiscal identity. The code may be empty when only the country is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxId {
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
    #[serde(default)]
    pub code: String,
}

impl TaxId {
    pub fn new(country: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            code: code.into(),
        }
    }
}

/// Secondary identity with a type label (e.g. "CF").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "type")]
    pub kind: String,
    pub code: String,
}

/// Company register entry (Iscrizione REA).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    /// Province code of the register office.
    pub office: String,
    /// Register entry number.
    pub entry: String,
    /// Share capital.
    #[serde(default)]
    pub capital: Option<Decimal>,
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    /// House number.
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub postal_code: String,
    /// City or town.
    #[serde(default)]
    pub locality: String,
    /// Province or region code.
    #[serde(default)]
    pub region: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
}

/// Electronic inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inbox {
    pub key: String,
    pub code: String,
}

/// Invoice line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    /// 1-based position within the invoice.
    pub index: u32,
    pub quantity: Decimal,
    pub item: Item,
    /// Line total (quantity × price, after line discounts).
    pub sum: Decimal,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub taxes: Vec<LineTax>,
}

/// Item sold on a line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Unit price.
    pub price: Decimal,
}

/// Tax applied to a line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineTax {
    /// Tax category code, e.g. "VAT" or "IRPEF".
    pub category: String,
    /// Rate key within the category.
    #[serde(default)]
    pub rate: Option<String>,
    /// Percentage (22 means 22 %).
    #[serde(default)]
    pub percent: Option<Decimal>,
}

/// Computed document totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Per-category tax totals, in upstream order.
    #[serde(default)]
    pub taxes: Vec<CategoryTotal>,
    /// Total payable.
    pub payable: Decimal,
    /// Amount still due after advances, when different from `payable`.
    #[serde(default)]
    pub due: Option<Decimal>,
}

impl Totals {
    /// The amount the customer has to pay.
    pub fn amount_due(&self) -> Decimal {
        self.due.unwrap_or(self.payable)
    }
}

/// Totals for one tax category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub code: String,
    /// Withheld by the customer rather than charged on top.
    #[serde(default)]
    pub retained: bool,
    /// Per-rate buckets, in upstream order.
    #[serde(default)]
    pub rates: Vec<RateTotal>,
}

/// Totals for one rate within a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTotal {
    #[serde(default)]
    pub key: Option<String>,
    pub base: Decimal,
    #[serde(default)]
    pub percent: Option<Decimal>,
    pub amount: Decimal,
}

/// Jurisdiction scenario summary with free-form metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    #[serde(default)]
    pub meta: BTreeMap<String, String>,
}

/// Payment terms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentTerms {
    #[serde(default)]
    pub due_dates: Vec<DueDate>,
}

/// A single instalment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueDate {
    pub date: NaiveDate,
    pub amount: Decimal,
}
