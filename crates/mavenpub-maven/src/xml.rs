//! Small indented XML writer shared by the POM and metadata generators.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use mavenpub_util::errors::PublishError;

pub(crate) struct XmlOut {
    writer: Writer<Vec<u8>>,
    what: &'static str,
}

impl XmlOut {
    /// Start a UTF-8 document; `what` names it in error messages.
    pub(crate) fn new(what: &'static str) -> miette::Result<Self> {
        let mut out = Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
            what,
        };
        out.emit(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(out)
    }

    pub(crate) fn open(&mut self, tag: &str) -> miette::Result<()> {
        self.emit(Event::Start(BytesStart::new(tag)))
    }

    pub(crate) fn open_with(&mut self, tag: &str, attrs: &[(&str, &str)]) -> miette::Result<()> {
        let start = BytesStart::new(tag).with_attributes(attrs.iter().copied());
        self.emit(Event::Start(start))
    }

    pub(crate) fn close(&mut self, tag: &str) -> miette::Result<()> {
        self.emit(Event::End(BytesEnd::new(tag)))
    }

    /// `<tag>text</tag>`, with `text` escaped.
    pub(crate) fn leaf(&mut self, tag: &str, text: &str) -> miette::Result<()> {
        self.open(tag)?;
        self.emit(Event::Text(BytesText::new(text)))?;
        self.close(tag)
    }

    pub(crate) fn finish(self) -> miette::Result<String> {
        let what = self.what;
        let mut bytes = self.writer.into_inner();
        bytes.push(b'\n');
        String::from_utf8(bytes).map_err(|e| {
            PublishError::Generic {
                message: format!("Generated {what} is not UTF-8: {e}"),
            }
            .into()
        })
    }

    fn emit(&mut self, event: Event<'_>) -> miette::Result<()> {
        let what = self.what;
        self.writer.write_event(event).map_err(|e| {
            PublishError::Generic {
                message: format!("Failed to write {what}: {e}"),
            }
            .into()
        })
    }
}
