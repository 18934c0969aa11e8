//! Jurisdiction rule table mapping tax categories and rate keys to
//! FatturaPA codes (TipoRitenuta, CausalePagamento, RegimeFiscale).
//!
//! The registry is plain data: build it once, share it by reference, never
//! mutate it. Several registries can coexist, e.g. one per test.

use serde::{Deserialize, Serialize};

use crate::core::{CodeResolutionError, Invoice, KEY_REGIME_FISCALE, TAX_CATEGORY_VAT};

/// RF01: ordinary tax regime, the schema-wide default.
pub const REGIME_FISCALE_DEFAULT: &str = "RF01";

/// Codes configured for one tax category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCodes {
    /// Tax category code, e.g. "IRPEF".
    pub code: String,
    /// TipoRitenuta code (RT01..RT06) for withheld categories.
    #[serde(default)]
    pub withholding_type: Option<String>,
    /// Rates of the category, keys unique within the category.
    #[serde(default)]
    pub rates: Vec<RateCodes>,
}

/// Codes configured for one rate within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCodes {
    pub key: String,
    /// CausalePagamento code (A..Z, L1, M1, ...).
    #[serde(default)]
    pub payment_reason: Option<String>,
}

impl RateCodes {
    pub fn new(key: impl Into<String>, payment_reason: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            payment_reason: Some(payment_reason.into()),
        }
    }
}

/// Immutable tax code registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRegistry {
    /// RegimeFiscale used when the invoice scenario carries none.
    #[serde(default = "default_regime")]
    pub default_regime: String,
    pub categories: Vec<CategoryCodes>,
}

fn default_regime() -> String {
    REGIME_FISCALE_DEFAULT.to_string()
}

impl TaxRegistry {
    /// Registry with the given categories and the RF01 default regime.
    pub fn new(categories: Vec<CategoryCodes>) -> Self {
        Self {
            default_regime: default_regime(),
            categories,
        }
    }

    pub fn with_default_regime(mut self, code: impl Into<String>) -> Self {
        self.default_regime = code.into();
        self
    }

    /// Load a registry from JSON.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, crate::core::FatturaError> {
        serde_json::from_str(json).map_err(|e| crate::core::FatturaError::Json(e.to_string()))
    }

    /// The Italian rule table.
    pub fn italy() -> Self {
        let irpef_rates = vec![
            RateCodes::new("self-employed-habitual", "A"),
            RateCodes::new("author-royalties", "B"),
            RateCodes::new("partnership-profits", "C"),
            RateCodes::new("promoter-profits", "D"),
            RateCodes::new("protest-fees", "E"),
            RateCodes::new("sports-termination", "G"),
            RateCodes::new("agency-termination", "H"),
            RateCodes::new("notary-termination", "I"),
            RateCodes::new("ip-royalties", "L"),
            RateCodes::new("self-employed-occasional", "M"),
            RateCodes::new("amateur-sports", "N"),
            RateCodes::new("occasional-no-contributions", "O"),
            RateCodes::new("equipment-non-resident", "P"),
            RateCodes::new("agent-single-mandate", "Q"),
            RateCodes::new("agent-multi-mandate", "R"),
            RateCodes::new("commission-agent", "S"),
            RateCodes::new("broker", "T"),
            RateCodes::new("business-finder", "U"),
            RateCodes::new("door-to-door-sales", "V"),
            RateCodes::new("tender-contracts", "W"),
        ];
        let ires_rates = vec![
            RateCodes::new("agent-single-mandate", "Q"),
            RateCodes::new("agent-multi-mandate", "R"),
            RateCodes::new("commission-agent", "S"),
            RateCodes::new("broker", "T"),
            RateCodes::new("business-finder", "U"),
            RateCodes::new("tender-contracts", "W"),
        ];

        Self::new(vec![
            CategoryCodes {
                code: TAX_CATEGORY_VAT.into(),
                withholding_type: None,
                rates: Vec::new(),
            },
            withheld("IRPEF", "RT01", irpef_rates),
            withheld("IRES", "RT02", ires_rates),
            withheld(
                "INPS",
                "RT03",
                vec![
                    RateCodes::new("self-employed-habitual", "A"),
                    RateCodes::new("self-employed-occasional", "M"),
                ],
            ),
            withheld(
                "ENASARCO",
                "RT04",
                vec![
                    RateCodes::new("agent-single-mandate", "Q"),
                    RateCodes::new("agent-multi-mandate", "R"),
                ],
            ),
            withheld(
                "ENPAM",
                "RT05",
                vec![RateCodes::new("self-employed-habitual", "A")],
            ),
            withheld(
                "CP",
                "RT06",
                vec![RateCodes::new("self-employed-habitual", "A")],
            ),
        ])
    }

    /// Look up a category by code.
    pub fn category(&self, code: &str) -> Option<&CategoryCodes> {
        self.categories.iter().find(|c| c.code == code)
    }

    /// Resolve the TipoRitenuta code of a tax category.
    pub fn withholding_type_code(&self, category: &str) -> Result<&str, CodeResolutionError> {
        self.category(category)
            .and_then(|c| c.withholding_type.as_deref())
            .filter(|code| !code.is_empty())
            .ok_or_else(|| CodeResolutionError::WithholdingType {
                category: category.to_string(),
            })
    }

    /// Resolve the CausalePagamento code of a rate within a category.
    ///
    /// The first rate whose key matches wins.
    pub fn payment_reason_code(
        &self,
        category: &str,
        rate_key: Option<&str>,
    ) -> Result<&str, CodeResolutionError> {
        let not_found = || CodeResolutionError::PaymentReason {
            category: category.to_string(),
            rate: rate_key.unwrap_or_default().to_string(),
        };

        let key = rate_key.ok_or_else(not_found)?;
        let rate = self
            .category(category)
            .and_then(|c| c.rates.iter().find(|r| r.key == key))
            .ok_or_else(not_found)?;

        rate.payment_reason
            .as_deref()
            .filter(|code| !code.is_empty())
            .ok_or_else(not_found)
    }

    /// RegimeFiscale of the invoice's supplier: the scenario metadata value,
    /// or the registry default when absent. Never fails.
    pub fn tax_regime_code<'a>(&'a self, invoice: &'a Invoice) -> &'a str {
        match invoice
            .scenario
            .meta
            .get(KEY_REGIME_FISCALE)
            .filter(|code| !code.is_empty())
        {
            Some(code) => code,
            None => {
                tracing::debug!(
                    invoice = %invoice.code,
                    default = %self.default_regime,
                    "no regime fiscale in scenario, using default"
                );
                &self.default_regime
            }
        }
    }
}

impl Default for TaxRegistry {
    fn default() -> Self {
        Self::italy()
    }
}

fn withheld(code: &str, withholding_type: &str, rates: Vec<RateCodes>) -> CategoryCodes {
    CategoryCodes {
        code: code.to_string(),
        withholding_type: Some(withholding_type.to_string()),
        rates,
    }
}
