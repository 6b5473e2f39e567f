use webresource_meta::Item;

use crate::context::RenderContext;
use crate::error::Result;

/// Write the elements of a list as `<ul>` items; nested lists nest.
pub(super) fn write_list(item: Item<'_>, ctx: &mut RenderContext<'_>) -> Result<()> {
    ctx.tag("ul", &[], |ctx| {
        for element in item.list() {
            ctx.tag("li", &[], |ctx| {
                if element.is_list() {
                    write_list(element, ctx)
                } else {
                    ctx.out().text(&element.text())
                }
            })?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::FsResourceLoader;
    use crate::uri::UriResolver;
    use insta::assert_snapshot;
    use webresource_meta::{Registry, Value};

    fn write(value: &Value) -> String {
        let uris = UriResolver::new("http://localhost:8080/").unwrap();
        let registry = Registry::new();
        let loader = FsResourceLoader::new();
        let mut html = String::new();
        {
            let mut ctx = RenderContext::new(&mut html, &uris, &registry, &loader);
            let item = ctx.item(value);
            write_list(item, &mut ctx).unwrap();
        }
        html
    }

    #[test]
    fn test_strings() {
        assert_snapshot!(write(&Value::from(vec!["one", "<two>"])), @"<ul><li>one</li><li>&lt;two&gt;</li></ul>");
    }

    #[test]
    fn test_empty() {
        assert_snapshot!(write(&Value::List(Vec::new())), @"<ul></ul>");
    }

    #[test]
    fn test_nested_lists() {
        let value = Value::List(vec![
            Value::from(1),
            Value::from(vec![2, 3]),
            Value::Null,
        ]);

        assert_snapshot!(write(&value), @"<ul><li>1</li><li><ul><li>2</li><li>3</li></ul></li><li></li></ul>");
    }
}
