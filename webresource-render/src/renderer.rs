use std::fmt;
use std::io;

use serde::Serialize;
use tracing::{debug, warn};
use webresource_meta::{to_value, Item, Registry, TypeDescriptor, Value};

use crate::config::RenderConfig;
use crate::context::RenderContext;
use crate::error::Result;
use crate::resource::{FsResourceLoader, ResourceLoader};
use crate::uri::UriResolver;
use crate::writer::{decorator, Decorator, DocumentWriter};

/// Renders values as html documents.
///
/// A renderer is configured once (base URI, type descriptors, decorators,
/// resource loader) and can then render any number of documents, also
/// concurrently; every render gets its own [`RenderContext`].
pub struct Renderer {
    uris: UriResolver,
    registry: Registry,
    loader: Box<dyn ResourceLoader>,
    decorators: Vec<Box<dyn Decorator>>,
}

impl Renderer {
    pub fn new(base_uri: &str) -> Result<Self> {
        Ok(Self {
            uris: UriResolver::new(base_uri)?,
            registry: Registry::new(),
            loader: Box::new(FsResourceLoader::new()),
            decorators: Vec::new(),
        })
    }

    /// A renderer for the base URI and types of a configuration, loading
    /// inline stylesheets from its static root.
    pub fn from_config(config: &RenderConfig) -> Result<Self> {
        let mut renderer = Self::new(&config.base_uri)?
            .with_registry(Registry::from_descriptors(config.types.iter().cloned())?);
        if let Some(root) = config.static_root_dir() {
            let application = renderer.uris.application().clone();
            renderer.loader = Box::new(FsResourceLoader::new().with_static_root(application, root));
        }
        Ok(renderer)
    }

    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    pub fn register(&mut self, descriptor: TypeDescriptor) -> Result<()> {
        self.registry.register(descriptor)?;
        Ok(())
    }

    pub fn with_loader(mut self, loader: impl ResourceLoader + 'static) -> Self {
        self.loader = Box::new(loader);
        self
    }

    /// Add a decorator; decorators run in the order they are added.
    pub fn with_decorator(mut self, decorator: impl Decorator + 'static) -> Self {
        self.decorators.push(Box::new(decorator));
        self
    }

    /// Add a closure as decorator.
    pub fn decorate<F>(mut self, f: F) -> Self
    where
        F: Fn(Item<'_>, &mut RenderContext<'_>) -> Result<()> + Send + Sync + 'static,
    {
        self.decorators.push(decorator(f));
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn uris(&self) -> &UriResolver {
        &self.uris
    }

    /// Render one document into `sink`.
    ///
    /// On failure, the sink holds the partial document, finished as far as
    /// the failing section allows.
    pub fn render_to<W: fmt::Write>(&self, value: &Value, sink: &mut W) -> Result<()> {
        let mut ctx = RenderContext::new(sink, &self.uris, &self.registry, self.loader.as_ref());
        let item = ctx.item(value);
        debug!(?item, base = %self.uris.base(), "Rendering document");
        let result = DocumentWriter::new(&self.decorators).write(item, &mut ctx);
        debug!(ok = result.is_ok(), "Rendered document");
        result
    }

    pub fn render(&self, value: &Value) -> Result<String> {
        let mut html = String::new();
        self.render_to(value, &mut html)?;
        Ok(html)
    }

    /// Render anything serializable.
    pub fn render_serializable<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        self.render(&to_value(value)?)
    }

    /// Render one document to a byte stream. The partial document is written
    /// even when rendering fails.
    pub fn write_document<W: io::Write>(&self, value: &Value, out: &mut W) -> Result<()> {
        let mut html = String::new();
        let rendered = self.render_to(value, &mut html);
        let written = out.write_all(html.as_bytes()).and_then(|()| out.flush());
        if let (Err(_), Err(e)) = (&rendered, &written) {
            warn!(error = %e, "Failed to write the partial document");
        }
        rendered?;
        written?;
        Ok(())
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("uris", &self.uris)
            .field("registry", &self.registry)
            .field("decorators", &self.decorators.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use insta::assert_snapshot;
    use serde::Serialize;
    use webresource_meta::{FieldDescriptor, StyleSheet};

    #[derive(Serialize)]
    struct Pojo {
        str: String,
        i: i32,
    }

    #[test]
    fn test_render_serializable() {
        let renderer = Renderer::new("http://localhost:8080/")
            .unwrap()
            .with_registry(
                Registry::from_descriptors([TypeDescriptor::of::<Pojo>()
                    .with_field(FieldDescriptor::new("str").title())])
                .unwrap(),
            );

        let html = renderer
            .render_serializable(&Pojo {
                str: "dummy".into(),
                i: 123,
            })
            .unwrap();

        assert_snapshot!(html, @"<html><head><title>dummy</title></head><body><form><div><label for='str-0' class='str-label'>str</label><input id='str-0' class='string' type='text' value='dummy' readonly/></div><div><label for='i-0' class='i-label'>i</label><input id='i-0' class='number' type='text' value='123' readonly/></div><input type='submit' value='submit'/></form></body></html>");
    }

    #[test]
    fn test_every_render_counts_ids_from_zero() {
        let renderer = Renderer::new("http://localhost:8080/").unwrap();
        let value = Value::from("x");

        let first = renderer.render(&value).unwrap();
        let second = renderer.render(&value).unwrap();

        assert_eq!(first, second);
        assert!(first.contains("id='simple-0'"));
    }

    #[test]
    fn test_decorators() {
        let renderer = Renderer::new("http://localhost:8080/")
            .unwrap()
            .decorate(|_, ctx| ctx.element("footer", &[], "first"))
            .decorate(|item, ctx| ctx.element("footer", &[], &format!("{:?}", item.kind())));

        let html = renderer.render(&Value::from("x")).unwrap();

        assert!(html.ends_with("<footer>first</footer><footer>Simple</footer></body></html>"));
    }

    #[test]
    fn test_write_document_keeps_partial_output() {
        let mut renderer = Renderer::new("http://localhost:8080/").unwrap();
        renderer
            .register(
                TypeDescriptor::new("Pojo").with_stylesheet(StyleSheet::inline("css/missing.css")),
            )
            .unwrap();
        let value = webresource_meta::Record::new("Pojo").with("str", "x").into();
        let mut out = Vec::new();

        let err = renderer.write_document(&value, &mut out).unwrap_err();

        assert!(matches!(err, RenderError::UnservedResource(_)));
        let html = String::from_utf8(out).unwrap();
        assert!(html.starts_with("<html><head></head>error writing head</html><!-- ..."));
        assert!(html.contains("RenderError::UnservedResource"));
    }

    #[test]
    fn test_invalid_base_uri() {
        assert!(matches!(
            Renderer::new("relative/base"),
            Err(RenderError::InvalidUri { .. })
        ));
    }
}
