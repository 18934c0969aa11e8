use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::FatturaError;
use super::types::*;

/// Builder for constructing invoices.
///
/// The upstream model normally hands over computed invoices; the builder is
/// here for tests, demos and callers that assemble data by hand.
///
/// ```
/// use fatturapa::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let invoice = InvoiceBuilder::new("2024-001", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
///     .supplier(PartyBuilder::new("Rossi S.r.l.").tax_id("IT", "12345678903").build())
///     .customer(PartyBuilder::new("Bianchi S.p.A.").tax_id("IT", "09876543217").build())
///     .add_line(LineBuilder::new(1, "Consulenza", dec!(10), dec!(100)).vat(dec!(22)).build())
///     .add_tax_total(TaxTotalBuilder::new(TAX_CATEGORY_VAT).rate(None, dec!(1000), Some(dec!(22)), dec!(220)).build())
///     .payable(dec!(1220))
///     .build()
///     .unwrap();
/// assert_eq!(invoice.lines.len(), 1);
/// ```
pub struct InvoiceBuilder {
    uuid: Option<String>,
    code: String,
    issue_date: NaiveDate,
    currency: String,
    notes: Vec<Note>,
    supplier: Option<Party>,
    customer: Option<Party>,
    lines: Vec<Line>,
    taxes: Vec<CategoryTotal>,
    payable: Decimal,
    due: Option<Decimal>,
    scenario: ScenarioSummary,
    due_dates: Vec<DueDate>,
}

impl InvoiceBuilder {
    pub fn new(code: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            uuid: None,
            code: code.into(),
            issue_date,
            currency: "EUR".to_string(),
            notes: Vec::new(),
            supplier: None,
            customer: None,
            lines: Vec::new(),
            taxes: Vec::new(),
            payable: Decimal::ZERO,
            due: None,
            scenario: ScenarioSummary::default(),
            due_dates: Vec::new(),
        }
    }

    pub fn uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    pub fn note(mut self, key: NoteKey, text: impl Into<String>) -> Self {
        self.notes.push(Note::new(key, text));
        self
    }

    pub fn supplier(mut self, party: Party) -> Self {
        self.supplier = Some(party);
        self
    }

    pub fn customer(mut self, party: Party) -> Self {
        self.customer = Some(party);
        self
    }

    pub fn add_line(mut self, line: Line) -> Self {
        self.lines.push(line);
        self
    }

    pub fn add_tax_total(mut self, total: CategoryTotal) -> Self {
        self.taxes.push(total);
        self
    }

    pub fn payable(mut self, amount: Decimal) -> Self {
        self.payable = amount;
        self
    }

    pub fn due(mut self, amount: Decimal) -> Self {
        self.due = Some(amount);
        self
    }

    /// Set a scenario metadata entry, e.g. [`KEY_REGIME_FISCALE`].
    pub fn scenario_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.scenario.meta.insert(key.into(), value.into());
        self
    }

    pub fn due_date(mut self, date: NaiveDate, amount: Decimal) -> Self {
        self.due_dates.push(DueDate { date, amount });
        self
    }

    /// Build the invoice. Supplier and customer are required.
    pub fn build(self) -> Result<Invoice, FatturaError> {
        let supplier = self
            .supplier
            .ok_or_else(|| FatturaError::Builder("supplier is required".into()))?;
        let customer = self
            .customer
            .ok_or_else(|| FatturaError::Builder("customer is required".into()))?;

        if self.code.trim().is_empty() {
            return Err(FatturaError::Builder("invoice code must not be empty".into()));
        }

        let payment = if self.due_dates.is_empty() {
            None
        } else {
            Some(PaymentTerms {
                due_dates: self.due_dates,
            })
        };

        Ok(Invoice {
            uuid: self.uuid,
            code: self.code,
            issue_date: self.issue_date,
            currency: self.currency,
            notes: self.notes,
            supplier,
            customer,
            lines: self.lines,
            totals: Totals {
                taxes: self.taxes,
                payable: self.payable,
                due: self.due,
            },
            scenario: self.scenario,
            payment,
        })
    }
}

/// Builder for Party (supplier/customer).
pub struct PartyBuilder {
    name: String,
    people: Vec<Person>,
    tax_id: Option<TaxId>,
    identities: Vec<Identity>,
    registration: Option<Registration>,
    addresses: Vec<Address>,
    inboxes: Vec<Inbox>,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            people: Vec::new(),
            tax_id: None,
            identities: Vec::new(),
            registration: None,
            addresses: Vec::new(),
            inboxes: Vec::new(),
        }
    }

    pub fn tax_id(mut self, country: impl Into<String>, code: impl Into<String>) -> Self {
        self.tax_id = Some(TaxId::new(country, code));
        self
    }

    pub fn person(mut self, given: impl Into<String>, surname: impl Into<String>) -> Self {
        self.people.push(Person {
            given: given.into(),
            surname: surname.into(),
            prefix: String::new(),
        });
        self
    }

    pub fn add_person(mut self, person: Person) -> Self {
        self.people.push(person);
        self
    }

    pub fn identity(mut self, kind: impl Into<String>, code: impl Into<String>) -> Self {
        self.identities.push(Identity {
            kind: kind.into(),
            code: code.into(),
        });
        self
    }

    pub fn registration(
        mut self,
        office: impl Into<String>,
        entry: impl Into<String>,
        capital: Option<Decimal>,
    ) -> Self {
        self.registration = Some(Registration {
            office: office.into(),
            entry: entry.into(),
            capital,
        });
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.addresses.push(address);
        self
    }

    pub fn inbox(mut self, key: impl Into<String>, code: impl Into<String>) -> Self {
        self.inboxes.push(Inbox {
            key: key.into(),
            code: code.into(),
        });
        self
    }

    pub fn build(self) -> Party {
        Party {
            name: self.name,
            people: self.people,
            tax_id: self.tax_id,
            identities: self.identities,
            registration: self.registration,
            addresses: self.addresses,
            inboxes: self.inboxes,
        }
    }
}

/// Builder for Address.
pub struct AddressBuilder {
    street: String,
    number: Option<String>,
    postal_code: String,
    locality: String,
    region: Option<String>,
    country: String,
}

impl AddressBuilder {
    pub fn new(
        street: impl Into<String>,
        postal_code: impl Into<String>,
        locality: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            number: None,
            postal_code: postal_code.into(),
            locality: locality.into(),
            region: None,
            country: country.into(),
        }
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn build(self) -> Address {
        Address {
            street: self.street,
            number: self.number,
            postal_code: self.postal_code,
            locality: self.locality,
            region: self.region,
            country: self.country,
        }
    }
}

/// Builder for Line. The sum defaults to quantity × price.
pub struct LineBuilder {
    index: u32,
    quantity: Decimal,
    item_name: String,
    price: Decimal,
    sum: Option<Decimal>,
    notes: Vec<Note>,
    taxes: Vec<LineTax>,
}

impl LineBuilder {
    pub fn new(index: u32, item_name: impl Into<String>, quantity: Decimal, price: Decimal) -> Self {
        Self {
            index,
            quantity,
            item_name: item_name.into(),
            price,
            sum: None,
            notes: Vec::new(),
            taxes: Vec::new(),
        }
    }

    pub fn sum(mut self, sum: Decimal) -> Self {
        self.sum = Some(sum);
        self
    }

    /// Add a goods description note.
    pub fn goods(mut self, text: impl Into<String>) -> Self {
        self.notes.push(Note::new(NoteKey::Goods, text));
        self
    }

    pub fn note(mut self, key: NoteKey, text: impl Into<String>) -> Self {
        self.notes.push(Note::new(key, text));
        self
    }

    /// Add a VAT entry with the given percentage.
    pub fn vat(self, percent: Decimal) -> Self {
        self.tax(TAX_CATEGORY_VAT, None, Some(percent))
    }

    pub fn tax(
        mut self,
        category: impl Into<String>,
        rate: Option<&str>,
        percent: Option<Decimal>,
    ) -> Self {
        self.taxes.push(LineTax {
            category: category.into(),
            rate: rate.map(str::to_string),
            percent,
        });
        self
    }

    pub fn build(self) -> Line {
        Line {
            index: self.index,
            quantity: self.quantity,
            sum: self.sum.unwrap_or(self.quantity * self.price),
            item: Item {
                name: self.item_name,
                price: self.price,
            },
            notes: self.notes,
            taxes: self.taxes,
        }
    }
}

/// Builder for a tax category total.
pub struct TaxTotalBuilder {
    code: String,
    retained: bool,
    rates: Vec<RateTotal>,
}

impl TaxTotalBuilder {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            retained: false,
            rates: Vec::new(),
        }
    }

    /// Mark the category as withheld.
    pub fn retained(mut self) -> Self {
        self.retained = true;
        self
    }

    pub fn rate(
        mut self,
        key: Option<&str>,
        base: Decimal,
        percent: Option<Decimal>,
        amount: Decimal,
    ) -> Self {
        self.rates.push(RateTotal {
            key: key.map(str::to_string),
            base,
            percent,
            amount,
        });
        self
    }

    pub fn build(self) -> CategoryTotal {
        CategoryTotal {
            code: self.code,
            retained: self.retained,
            rates: self.rates,
        }
    }
}
