//! FatturaPA document assembly.
//!
//! Turns a computed [`Invoice`](crate::core::Invoice) into the field values
//! of the Italian FatturaPA schema: party identity blocks, line and VAT
//! summary rows, withholding tax rows and document-level defaults.
//!
//! Data flows one way. The [`Assembler`] calls the party resolver, the line
//! aggregator and the retained tax extractor, which consult the read-only
//! [`TaxRegistry`] and the numeric formatter. Assembly is synchronous, pure
//! and all-or-nothing.
//!
//! # Example
//!
//! ```ignore
//! use fatturapa::assemble::*;
//!
//! let assembler = Assembler::new(TaxRegistry::italy())
//!     .with_transmitter(Transmitter::new("IT", "01234567890"));
//! let doc = assembler.assemble(&invoice)?;
//! ```

mod assembler;
mod defaults;
mod document;
mod header;
mod lines;
pub mod numeric;
mod parties;
mod registry;
mod retained;

pub use assembler::{Assembler, assemble};
pub use defaults::*;
pub use document::*;
pub use header::build_transmission;
pub use lines::{build_goods_services, build_line_rows, build_summary_rows};
pub use numeric::{format_amount, format_percentage, format_quantity};
pub use parties::{EU_VAT_PLACEHOLDER, NON_EU_VAT_PLACEHOLDER, build_customer, build_supplier};
pub use registry::{CategoryCodes, REGIME_FISCALE_DEFAULT, RateCodes, TaxRegistry};
pub use retained::extract_retained_taxes;
