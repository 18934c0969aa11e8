//! JSON loading for the input model.

use super::error::FatturaError;
use super::types::Invoice;

/// Decode a computed invoice from its JSON representation.
pub fn invoice_from_json(json: &str) -> Result<Invoice, FatturaError> {
    serde_json::from_str(json).map_err(|e| FatturaError::Json(e.to_string()))
}
