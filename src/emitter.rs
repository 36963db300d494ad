//! Stack-based XML emitter over a `quick-xml` writer.
//!
//! The handlers talk to XML through four operations: open an element, write
//! an attribute on the currently open element, write text content, close the
//! innermost element. Start tags are buffered until the first child, text,
//! or close, so attributes can be written after the element is opened; an
//! element that closes with neither children nor text is serialized
//! self-closing.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Append-only XML tree builder producing a 4-space-indented document.
pub struct XmlEmitter {
    writer: Writer<Vec<u8>>,
    pending: Option<BytesStart<'static>>,
    open: Vec<String>,
}

impl Default for XmlEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlEmitter {
    pub fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', 4),
            pending: None,
            open: Vec::new(),
        }
    }

    /// Open a child element of the innermost open element.
    pub fn open_element(&mut self, name: &str) {
        self.flush_pending();
        self.pending = Some(BytesStart::new(name.to_string()));
        self.open.push(name.to_string());
    }

    /// Write an attribute on the element opened by the last `open_element`.
    ///
    /// Must be called before any child or text is written into it.
    pub fn write_attribute(&mut self, name: &str, value: &str) {
        let tag = self
            .pending
            .as_mut()
            .expect("attribute written outside an open start tag");
        tag.push_attribute((name, value));
    }

    /// Write text content into the innermost open element. Empty text is a
    /// no-op so the element still serializes self-closing.
    pub fn write_text(&mut self, content: &str) {
        if content.is_empty() {
            return;
        }
        self.flush_pending();
        self.writer
            .write_event(Event::Text(BytesText::new(content)))
            .expect("write to in-memory buffer");
    }

    /// Close the innermost open element.
    pub fn close_element(&mut self) {
        let name = self.open.pop().expect("close without a matching open");
        match self.pending.take() {
            Some(tag) => self
                .writer
                .write_event(Event::Empty(tag))
                .expect("write to in-memory buffer"),
            None => self
                .writer
                .write_event(Event::End(BytesEnd::new(name)))
                .expect("write to in-memory buffer"),
        }
    }

    /// Write a comment at the current position.
    pub fn write_comment(&mut self, text: &str) {
        self.flush_pending();
        self.writer
            .write_event(Event::Comment(BytesText::new(text)))
            .expect("write to in-memory buffer");
    }

    /// Finish the document and return it as a string.
    pub fn finish(mut self) -> String {
        debug_assert!(self.open.is_empty(), "unclosed elements at finish");
        self.flush_pending();
        String::from_utf8(self.writer.into_inner()).expect("xml output is valid utf-8")
    }

    fn flush_pending(&mut self) {
        if let Some(tag) = self.pending.take() {
            self.writer
                .write_event(Event::Start(tag))
                .expect("write to in-memory buffer");
        }
    }
}
