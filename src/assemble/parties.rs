//! Supplier (CedentePrestatore) and customer (CessionarioCommittente) blocks.

use crate::core::{
    Address, FatturaError, IDENTITY_TYPE_CF, Invoice, Party, TaxId, is_eu_country, is_italy,
};

use super::defaults::AssemblyDefaults;
use super::document::{
    AddressBlock, FiscalIdentity, NameBlock, PartyBlock, RegistrationBlock, VatId,
};
use super::numeric::format_amount;
use super::registry::TaxRegistry;

/// IdCodice for EU customers without a VAT number.
pub const EU_VAT_PLACEHOLDER: &str = "0000000";

/// IdCodice for non-EU customers without a tax code.
pub const NON_EU_VAT_PLACEHOLDER: &str = "99999999999";

/// Length of an Italian Codice Fiscale for natural persons.
const CODICE_FISCALE_LEN: usize = 16;

/// CAP used for foreign addresses whose postal code does not fit the schema.
const FOREIGN_POSTAL_CODE: &str = "00000";

/// Build the supplier block. The supplier always identifies with a VAT ID.
pub fn build_supplier(
    invoice: &Invoice,
    registry: &TaxRegistry,
    defaults: &AssemblyDefaults,
) -> Result<PartyBlock, FatturaError> {
    let s = &invoice.supplier;

    let tax_id = s
        .tax_id
        .as_ref()
        .ok_or_else(|| FatturaError::missing_identity("supplier", "no VAT ID"))?;
    if tax_id.country.trim().is_empty() || tax_id.code.trim().is_empty() {
        return Err(FatturaError::missing_identity(
            "supplier",
            "VAT ID requires both country and code",
        ));
    }

    let registration = s.registration.as_ref().map(|r| RegistrationBlock {
        office: r.office.clone(),
        number: r.entry.clone(),
        capital: r.capital.map(format_amount),
        liquidation_status: defaults.liquidation_status.clone(),
    });

    Ok(PartyBlock {
        identity: FiscalIdentity::VatId(VatId {
            country: tax_id.country.clone(),
            code: tax_id.code.clone(),
        }),
        name: name_block(s),
        tax_regime: Some(registry.tax_regime_code(invoice).to_string()),
        address: address_block(s),
        registration,
    })
}

/// Build the customer block, choosing between VAT ID and fiscal code.
pub fn build_customer(invoice: &Invoice) -> Result<PartyBlock, FatturaError> {
    let c = &invoice.customer;

    let identity = match &c.tax_id {
        Some(tax_id) if !tax_id.country.trim().is_empty() => customer_identity(tax_id),
        _ => {
            // Without a usable tax ID, a Codice Fiscale identity still suffices.
            let code = c
                .identities
                .iter()
                .find(|id| id.kind == IDENTITY_TYPE_CF && !id.code.is_empty())
                .map(|id| id.code.clone())
                .ok_or_else(|| {
                    FatturaError::missing_identity("customer", "no tax ID country or fiscal code")
                })?;
            tracing::debug!(customer = %c.name, "customer identified by CF identity");
            FiscalIdentity::FiscalCode(code)
        }
    };

    Ok(PartyBlock {
        identity,
        name: name_block(c),
        tax_regime: None,
        address: address_block(c),
        registration: None,
    })
}

/// Rule order matters: an Italian 16-character code is a fiscal code even
/// when it could pass as a VAT number.
fn customer_identity(tax_id: &TaxId) -> FiscalIdentity {
    let code = tax_id.code.trim();

    if is_italy(&tax_id.country) && code.chars().count() == CODICE_FISCALE_LEN {
        tracing::debug!(country = %tax_id.country, "customer identity: codice fiscale");
        return FiscalIdentity::FiscalCode(code.to_string());
    }

    let placeholder = if is_eu_country(&tax_id.country) {
        EU_VAT_PLACEHOLDER
    } else {
        NON_EU_VAT_PLACEHOLDER
    };
    if code.is_empty() {
        tracing::debug!(
            country = %tax_id.country,
            placeholder,
            "customer identity: VAT ID placeholder"
        );
    }

    FiscalIdentity::VatId(VatId {
        country: tax_id.country.clone(),
        code: if code.is_empty() {
            placeholder.to_string()
        } else {
            code.to_string()
        },
    })
}

/// Anagrafica: the organisation name always, plus the first person's name.
fn name_block(party: &Party) -> NameBlock {
    let person = party.people.first();
    NameBlock {
        organization: party.name.clone(),
        given: person.and_then(|p| non_empty(&p.given)),
        surname: person.and_then(|p| non_empty(&p.surname)),
        title: person.and_then(|p| non_empty(&p.prefix)),
    }
}

fn address_block(party: &Party) -> Option<AddressBlock> {
    party.addresses.first().map(|a: &Address| {
        let domestic = is_italy(&a.country);
        let postal_code = if domestic || is_schema_postal_code(&a.postal_code) {
            a.postal_code.clone()
        } else {
            FOREIGN_POSTAL_CODE.to_string()
        };
        AddressBlock {
            street: a.street.clone(),
            number: a.number.as_deref().and_then(non_empty),
            postal_code,
            locality: a.locality.clone(),
            province: if domestic {
                a.region.as_deref().and_then(non_empty)
            } else {
                None
            },
            country: a.country.clone(),
        }
    })
}

fn is_schema_postal_code(code: &str) -> bool {
    code.len() == 5 && code.chars().all(|c| c.is_ascii_digit())
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
