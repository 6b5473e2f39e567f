//! The state of one document render.

use std::fmt;

use webresource_meta::{Item, Registry, Value};

use crate::error::Result;
use crate::ids::IdGenerator;
use crate::out::{Attribute, HtmlOut};
use crate::resource::ResourceLoader;
use crate::uri::UriResolver;

/// Everything the writers share while rendering one document.
///
/// A context is created for each root render and handed down by `&mut`, so
/// all writers of a document draw ids from the same generator.
pub struct RenderContext<'a> {
    out: HtmlOut<'a>,
    ids: IdGenerator,
    uris: &'a UriResolver,
    registry: &'a Registry,
    loader: &'a dyn ResourceLoader,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        sink: &'a mut dyn fmt::Write,
        uris: &'a UriResolver,
        registry: &'a Registry,
        loader: &'a dyn ResourceLoader,
    ) -> Self {
        Self {
            out: HtmlOut::new(sink),
            ids: IdGenerator::new(),
            uris,
            registry,
            loader,
        }
    }

    pub fn out(&mut self) -> &mut HtmlOut<'a> {
        &mut self.out
    }

    pub fn uris(&self) -> &'a UriResolver {
        self.uris
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn loader(&self) -> &'a dyn ResourceLoader {
        self.loader
    }

    /// The next document-unique id for `name`.
    pub fn next_id(&mut self, name: &str) -> String {
        self.ids.generate(name)
    }

    /// Classify a value for rendering with this context's registry.
    pub fn item<'v>(&self, value: &'v Value) -> Item<'v>
    where
        'a: 'v,
    {
        Item::new(value, self.registry)
    }

    /// Write `<name attrs>`, the content produced by `body`, and `</name>`.
    ///
    /// The closing tag is written even when `body` fails; the error of
    /// `body` is returned in that case.
    pub fn tag<T>(
        &mut self,
        name: &str,
        attributes: &[Attribute<'_>],
        body: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        self.out.open(name, attributes)?;
        let result = body(self);
        let closed = self.out.close(name);
        let value = result?;
        closed?;
        Ok(value)
    }

    /// An element containing only escaped text.
    pub fn element(&mut self, name: &str, attributes: &[Attribute<'_>], text: &str) -> Result<()> {
        self.out.open(name, attributes)?;
        self.out.text(text)?;
        self.out.close(name)
    }
}

impl fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("ids", &self.ids)
            .field("uris", &self.uris)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::resource::FsResourceLoader;

    fn render(write: impl FnOnce(&mut RenderContext<'_>) -> Result<()>) -> (String, Result<()>) {
        let uris = UriResolver::new("http://localhost:8080/").unwrap();
        let registry = Registry::new();
        let loader = FsResourceLoader::new();
        let mut html = String::new();
        let result = {
            let mut ctx = RenderContext::new(&mut html, &uris, &registry, &loader);
            write(&mut ctx)
        };
        (html, result)
    }

    #[test]
    fn test_tag_wraps_content() {
        let (html, result) = render(|ctx| {
            ctx.tag("div", &[Attribute::new("class", "x")], |ctx| {
                ctx.element("span", &[], "a & b")
            })
        });

        result.unwrap();
        assert_eq!(html, "<div class='x'><span>a &amp; b</span></div>");
    }

    #[test]
    fn test_tag_closes_on_error() {
        let (html, result) = render(|ctx| {
            ctx.tag("ul", &[], |ctx| {
                ctx.tag("li", &[], |ctx| {
                    ctx.out().text("partial")?;
                    Err(RenderError::Decorator("boom".into()))
                })
            })
        });

        assert!(matches!(result, Err(RenderError::Decorator(_))));
        assert_eq!(html, "<ul><li>partial</li></ul>");
    }

    #[test]
    fn test_ids_are_shared_by_all_writers() {
        let (html, result) = render(|ctx| {
            for _ in 0..3 {
                let id = ctx.next_id("x");
                ctx.tag("p", &[Attribute::new("id", id)], |_| Ok(()))?;
            }
            Ok(())
        });

        result.unwrap();
        assert_eq!(html, "<p id='x-0'></p><p id='x-1'></p><p id='x-2'></p>");
    }
}
