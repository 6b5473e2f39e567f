//! The output sink of a render.

use std::borrow::Cow;
use std::fmt;

use crate::error::Result;
use crate::escape::html_escape;

/// An html attribute. Values are escaped when written; flags have no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'v> {
    name: &'v str,
    value: Option<Cow<'v, str>>,
}

impl<'v> Attribute<'v> {
    pub fn new(name: &'v str, value: impl Into<Cow<'v, str>>) -> Self {
        Self {
            name,
            value: Some(value.into()),
        }
    }

    /// A valueless attribute like `readonly`.
    pub fn flag(name: &'v str) -> Self {
        Self { name, value: None }
    }
}

/// Writes markup to the sink of one render.
///
/// Element content and attribute values are escaped; `raw` writes markup
/// through unchanged.
pub struct HtmlOut<'w> {
    sink: &'w mut dyn fmt::Write,
}

impl<'w> HtmlOut<'w> {
    pub fn new(sink: &'w mut dyn fmt::Write) -> Self {
        Self { sink }
    }

    pub fn raw(&mut self, markup: &str) -> Result<()> {
        self.sink.write_str(markup)?;
        Ok(())
    }

    pub fn text(&mut self, text: &str) -> Result<()> {
        self.sink.write_str(&html_escape(text))?;
        Ok(())
    }

    pub fn open(&mut self, name: &str, attributes: &[Attribute<'_>]) -> Result<()> {
        self.start(name, attributes)?;
        self.sink.write_char('>')?;
        Ok(())
    }

    pub fn close(&mut self, name: &str) -> Result<()> {
        write!(self.sink, "</{name}>")?;
        Ok(())
    }

    /// A self-closing element: `<name a='b'/>`.
    pub fn empty(&mut self, name: &str, attributes: &[Attribute<'_>]) -> Result<()> {
        self.start(name, attributes)?;
        self.sink.write_str("/>")?;
        Ok(())
    }

    fn start(&mut self, name: &str, attributes: &[Attribute<'_>]) -> Result<()> {
        write!(self.sink, "<{name}")?;
        for attribute in attributes {
            match &attribute.value {
                Some(value) => write!(
                    self.sink,
                    " {}='{}'",
                    attribute.name,
                    html_escape(value)
                )?,
                None => write!(self.sink, " {}", attribute.name)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for HtmlOut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlOut").finish_non_exhaustive()
    }
}
