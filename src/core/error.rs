use thiserror::Error;

/// Errors that can occur while building an invoice or assembling a
/// FatturaPA document from it.
///
/// Assembly is all-or-nothing: the first error aborts and no partial
/// document is ever returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FatturaError {
    /// A party lacks the minimum fiscal identity required by the schema.
    #[error("missing identity for {party}: {reason}")]
    MissingIdentity {
        /// Which party ("supplier" or "customer").
        party: &'static str,
        /// What exactly is missing.
        reason: String,
    },

    /// A tax category or rate has no configured regulatory code.
    #[error(transparent)]
    CodeResolution(#[from] CodeResolutionError),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// XML rendering error.
    #[error("XML error: {0}")]
    Xml(String),

    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Json(String),
}

impl FatturaError {
    pub(crate) fn missing_identity(party: &'static str, reason: impl Into<String>) -> Self {
        Self::MissingIdentity {
            party,
            reason: reason.into(),
        }
    }
}

/// A regulatory code lookup that found no mapping in the tax registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeResolutionError {
    /// No TipoRitenuta code configured for the category.
    #[error("could not find TipoRitenuta code for tax category {category}")]
    WithholdingType {
        /// Tax category code.
        category: String,
    },

    /// No CausalePagamento code configured for the category/rate pair.
    #[error("could not find CausalePagamento code for tax category {category} and rate {rate}")]
    PaymentReason {
        /// Tax category code.
        category: String,
        /// Rate key within the category.
        rate: String,
    },
}
