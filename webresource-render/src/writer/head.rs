use tracing::trace;
use webresource_meta::{Item, StyleSheet};

use super::document::SectionWriter;
use super::title::title;
use crate::context::RenderContext;
use crate::error::Result;
use crate::out::Attribute;

/// Writes the title and the stylesheets of a document.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadWriter;

impl SectionWriter for HeadWriter {
    fn write(&self, item: Item<'_>, ctx: &mut RenderContext<'_>) -> Result<()> {
        if let Some(title) = title(item)? {
            ctx.element("title", &[], &title)?;
        }
        for stylesheet in item.stylesheets() {
            write_stylesheet(stylesheet, ctx)?;
        }
        Ok(())
    }
}

fn write_stylesheet(stylesheet: &StyleSheet, ctx: &mut RenderContext<'_>) -> Result<()> {
    let uri = ctx.uris().resolve_app(&stylesheet.path)?;
    trace!(%uri, inline = stylesheet.inline, "Writing stylesheet");
    if stylesheet.inline {
        let css = ctx.loader().load(&uri)?;
        ctx.tag("style", &[], |ctx| ctx.out().raw(&css))
    } else {
        ctx.out().empty(
            "link",
            &[
                Attribute::new("rel", "stylesheet"),
                Attribute::new("href", uri.as_str()),
                Attribute::new("type", "text/css"),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::resource::FsResourceLoader;
    use crate::uri::UriResolver;
    use insta::assert_snapshot;
    use tempfile::TempDir;
    use url::Url;
    use webresource_meta::{FieldDescriptor, Record, Registry, TypeDescriptor, Value};

    fn write_head(registry: &Registry, value: &Value) -> (String, Result<()>) {
        let uris = UriResolver::new("http://host/app/rest/pojos").unwrap();
        let loader = FsResourceLoader::new();
        let mut html = String::new();
        let result = {
            let mut ctx = RenderContext::new(&mut html, &uris, registry, &loader);
            let item = ctx.item(value);
            HeadWriter.write(item, &mut ctx)
        };
        (html, result)
    }

    #[test]
    fn test_title_and_linked_stylesheets() {
        let registry = Registry::from_descriptors([TypeDescriptor::new("Pojo")
            .with_field(FieldDescriptor::new("first").title())
            .with_field(FieldDescriptor::new("second").title())
            .with_stylesheet(StyleSheet::link("css/pojo.css"))
            .with_stylesheet(StyleSheet::link("/shared/base.css"))])
        .unwrap();
        let value = Record::new("Pojo")
            .with("first", "a")
            .with("second", "b")
            .into();

        let (html, result) = write_head(&registry, &value);

        result.unwrap();
        assert_snapshot!(html, @"<title>a b</title><link rel='stylesheet' href='http://host/app/css/pojo.css' type='text/css'/><link rel='stylesheet' href='http://host/shared/base.css' type='text/css'/>");
    }

    #[test]
    fn test_inline_stylesheet() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inline.css");
        std::fs::write(&path, "p > b { color: red }").unwrap();
        let uri = Url::from_file_path(&path).unwrap();
        let registry = Registry::from_descriptors([
            TypeDescriptor::new("Pojo").with_stylesheet(StyleSheet::inline(uri.as_str())),
        ])
        .unwrap();
        let value = Record::new("Pojo").with("str", "x").into();

        let (html, result) = write_head(&registry, &value);

        result.unwrap();
        assert_eq!(html, "<style>p > b { color: red }</style>");
    }

    #[test]
    fn test_unreadable_inline_stylesheet_fails() {
        let registry = Registry::from_descriptors([
            TypeDescriptor::new("Pojo").with_stylesheet(StyleSheet::inline("css/missing.css")),
        ])
        .unwrap();
        let value = Record::new("Pojo").with("str", "x").into();

        let (_, result) = write_head(&registry, &value);

        assert!(matches!(result, Err(RenderError::UnservedResource(_))));
    }

    #[test]
    fn test_list_head() {
        let registry = Registry::new();
        let value = Value::List(vec![
            Record::new("Pojo").with("str", "x").into(),
            Record::new("Pojo").with("str", "y").into(),
        ]);

        let (html, result) = write_head(&registry, &value);

        result.unwrap();
        assert_snapshot!(html, @"<title>List of pojos</title>");
    }
}
