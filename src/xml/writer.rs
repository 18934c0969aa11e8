//! Nested-closure wrapper over `quick-xml`.
//!
//! Every `element` call writes its own start and end tag, so the output is
//! always balanced regardless of what the body closure does.

use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::core::FatturaError;

pub type XmlResult = Result<String, FatturaError>;

type WriteResult = Result<(), FatturaError>;

pub struct XmlWriter {
    inner: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    /// Start a UTF-8 document with two-space indentation.
    pub fn new() -> Result<Self, FatturaError> {
        let mut w = Self {
            inner: Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2),
        };
        w.emit(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(w)
    }

    pub fn finish(self) -> XmlResult {
        String::from_utf8(self.inner.into_inner().into_inner())
            .map_err(|e| FatturaError::Xml(format!("output is not UTF-8: {e}")))
    }

    /// `<name>` … `</name>` around whatever `body` writes.
    pub fn element<F>(&mut self, name: &str, body: F) -> WriteResult
    where
        F: FnOnce(&mut Self) -> WriteResult,
    {
        self.element_with_attrs(name, &[], body)
    }

    pub fn element_with_attrs<F>(&mut self, name: &str, attrs: &[(&str, &str)], body: F) -> WriteResult
    where
        F: FnOnce(&mut Self) -> WriteResult,
    {
        let mut start = BytesStart::new(name);
        start.extend_attributes(attrs.iter().copied());
        self.emit(Event::Start(start))?;
        body(self)?;
        self.emit(Event::End(BytesEnd::new(name)))
    }

    /// A leaf element holding escaped text.
    pub fn leaf(&mut self, name: &str, text: &str) -> WriteResult {
        self.element(name, |w| w.emit(Event::Text(BytesText::new(text))))
    }

    /// A leaf element, skipped entirely when `text` is `None`.
    pub fn optional_leaf(&mut self, name: &str, text: Option<&str>) -> WriteResult {
        text.map_or(Ok(()), |t| self.leaf(name, t))
    }

    fn emit(&mut self, event: Event<'_>) -> WriteResult {
        self.inner
            .write_event(event)
            .map_err(|e| FatturaError::Xml(format!("write error: {e}")))
    }
}
