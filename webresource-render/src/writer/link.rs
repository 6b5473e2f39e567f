use webresource_meta::{Item, ItemKind, Trait};

use super::title::{join_texts, title};
use crate::context::RenderContext;
use crate::error::Result;
use crate::out::Attribute;

/// Write a nested record as a link to its own resource, or a nested type as
/// a link to its collection.
///
/// The key is percent-encoded into a single path segment.
pub(super) fn write_link(item: Item<'_>, id: &str, ctx: &mut RenderContext<'_>) -> Result<()> {
    let collection = item.collection_name().unwrap_or_default();
    let (path, text) = if item.kind() == ItemKind::Type {
        (format!("{collection}.html"), item.text())
    } else {
        let key = key(item)?;
        (
            format!("{collection}/{}.html", urlencoding::encode(&key)),
            text(item)?,
        )
    };
    let href = ctx.uris().resolve_base(&path);
    ctx.tag(
        "a",
        &[
            Attribute::new("href", href),
            Attribute::new("id", format!("{id}-href")),
            Attribute::new("class", collection),
        ],
        |ctx| ctx.out().text(&text),
    )
}

/// The business key, else the id, else the textual form.
fn key(item: Item<'_>) -> Result<String> {
    let t = match item.business_key()? {
        Some(t) => Some(t),
        None => item.id_trait()?,
    };
    Ok(t.map_or_else(|| item.text(), |t| item.read(&t).text()))
}

/// The link text fields, else the title, else the textual form.
fn text(item: Item<'_>) -> Result<String> {
    let link_texts = item.traits_where(Trait::is_link_text)?;
    if !link_texts.is_empty() {
        return Ok(join_texts(item, &link_texts, " "));
    }
    Ok(title(item)?.unwrap_or_else(|| item.text()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::FsResourceLoader;
    use crate::uri::UriResolver;
    use insta::assert_snapshot;
    use webresource_meta::{FieldDescriptor, Record, Registry, TypeDescriptor, Value};

    fn write(registry: &Registry, value: &Value) -> String {
        let uris = UriResolver::new("http://localhost:8080/demo/").unwrap();
        let loader = FsResourceLoader::new();
        let mut html = String::new();
        {
            let mut ctx = RenderContext::new(&mut html, &uris, registry, &loader);
            let item = ctx.item(value);
            let id = ctx.next_id("nested");
            write_link(item, &id, &mut ctx).unwrap();
        }
        html
    }

    fn nested() -> Record {
        Record::new("NestedPojo")
            .with("id", 123)
            .with("code", "abc")
            .with("label", "Nested & Co")
    }

    #[test]
    fn test_link_by_textual_form() {
        let html = write(&Registry::new(), &nested().into());

        assert_snapshot!(html, @"<a href='http://localhost:8080/demo/nestedpojos/123-abc-Nested%20%26%20Co.html' id='nested-0-href' class='nestedpojos'>123-abc-Nested &amp; Co</a>");
    }

    #[test]
    fn test_link_by_id_and_link_text() {
        let registry = Registry::from_descriptors([TypeDescriptor::new("NestedPojo")
            .with_field(FieldDescriptor::new("id").id())
            .with_field(FieldDescriptor::new("label").link_text())])
        .unwrap();

        let html = write(&registry, &nested().into());

        assert_snapshot!(html, @"<a href='http://localhost:8080/demo/nestedpojos/123.html' id='nested-0-href' class='nestedpojos'>Nested &amp; Co</a>");
    }

    #[test]
    fn test_business_key_wins_over_id() {
        let registry = Registry::from_descriptors([TypeDescriptor::new("NestedPojo")
            .with_field(FieldDescriptor::new("id").id())
            .with_field(FieldDescriptor::new("code").business_key())
            .with_field(FieldDescriptor::new("label").title())])
        .unwrap();

        let html = write(&registry, &nested().into());

        assert_snapshot!(html, @"<a href='http://localhost:8080/demo/nestedpojos/abc.html' id='nested-0-href' class='nestedpojos'>Nested &amp; Co</a>");
    }

    #[test]
    fn test_link_to_collection_of_type() {
        let html = write(&Registry::new(), &Value::Type("Category".into()));

        assert_snapshot!(html, @"<a href='http://localhost:8080/demo/categorys.html' id='nested-0-href' class='categorys'>Category</a>");
    }

    #[test]
    fn test_business_key_is_a_single_path_segment() {
        let registry = Registry::from_descriptors([
            TypeDescriptor::new("NestedPojo")
                .with_field(FieldDescriptor::new("code").business_key()),
        ])
        .unwrap();
        let value = Record::new("NestedPojo").with("code", "a/b c?").into();

        let html = write(&registry, &value);

        assert_snapshot!(html, @"<a href='http://localhost:8080/demo/nestedpojos/a%2Fb%20c%3F.html' id='nested-0-href' class='nestedpojos'>a/b c?</a>");
    }
}
