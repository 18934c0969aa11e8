//! # fatturapa
//!
//! Italian electronic invoicing: turns a computed, jurisdiction-agnostic
//! invoice into the FatturaPA document the Agenzia delle Entrate requires,
//! and renders it as XML ready for signing and SdI transmission.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Amounts render with exactly 2 fractional digits, percentages with 4.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fatturapa::assemble::{Assembler, TaxRegistry};
//! use fatturapa::core::*;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new("2024-001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .supplier(PartyBuilder::new("Rossi S.r.l.").tax_id("IT", "12345678903").build())
//!     .customer(PartyBuilder::new("Mario Bianchi").tax_id("IT", "BNCMRA80A01H501U").build())
//!     .note(NoteKey::Reason, "Consulenza marzo")
//!     .add_line(LineBuilder::new(1, "Consulenza", dec!(10), dec!(150))
//!         .goods("Consulenza fiscale")
//!         .vat(dec!(22))
//!         .build())
//!     .add_tax_total(TaxTotalBuilder::new(TAX_CATEGORY_VAT)
//!         .rate(Some("standard"), dec!(1500), Some(dec!(22)), dec!(330))
//!         .build())
//!     .payable(dec!(1830))
//!     .build()
//!     .unwrap();
//!
//! let doc = Assembler::new(TaxRegistry::italy()).assemble(&invoice).unwrap();
//! assert_eq!(doc.header.customer.identity.fiscal_code(), Some("BNCMRA80A01H501U"));
//! assert_eq!(doc.body.goods_services.summary[0].vat_rate, "22.0000");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice input model, builders, errors |
//! | `assemble` (default) | Tax code registry, party/line/withholding rules, document assembly |
//! | `xml` | FatturaPA 1.2 XML rendering |
//! | `json` | Load invoices and registries from JSON |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "assemble")]
pub mod assemble;

#[cfg(feature = "xml")]
pub mod xml;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
