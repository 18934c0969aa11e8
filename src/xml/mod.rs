//! FatturaPA 1.2 XML rendering.
//!
//! Serialises an assembled [`Document`](crate::assemble::Document). Signing
//! and SdI transmission are left to the caller.
//!
//! # Example
//!
//! ```no_run
//! use fatturapa::core::Invoice;
//! use fatturapa::{assemble, xml};
//!
//! let invoice: Invoice = todo!(); // computed upstream
//! let doc = assemble::assemble(&invoice).unwrap();
//! let xml = xml::to_xml(&doc).unwrap();
//! ```

mod render;
pub(crate) mod writer;

pub use render::to_xml;

/// FatturaPA 1.2 namespace.
pub const FATTURAPA_NS: &str = "http://ivaservizi.agenziaentrate.gov.it/docs/xsd/fatture/v1.2";

/// XML digital signature namespace.
pub const XMLDSIG_NS: &str = "http://www.w3.org/2000/09/xmldsig#";

/// XML schema instance namespace.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
