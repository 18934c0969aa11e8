//! Core invoice input model, builders and error types.
//!
//! The types here mirror an already computed, jurisdiction-agnostic invoice:
//! parties, lines, per-category tax totals and payment terms. Nothing in
//! this module knows about FatturaPA codes.

mod builder;
pub mod countries;
mod error;
#[cfg(feature = "json")]
mod json;
mod types;

pub use builder::*;
pub use countries::{is_eu_country, is_italy};
pub use error::*;
#[cfg(feature = "json")]
pub use json::invoice_from_json;
pub use types::*;
