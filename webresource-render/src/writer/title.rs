use webresource_meta::{collection_name, Item, ItemKind, Trait, Value};

use crate::error::Result;

/// The title of an item, shared by page heads and link texts.
///
/// The values of title fields joined by a space; else the type-level title
/// with its placeholders filled in; else, for lists, `List of <collection>`.
pub fn title(item: Item<'_>) -> Result<Option<String>> {
    match item.kind() {
        ItemKind::List => Ok(item
            .element_type_name()
            .map(|name| format!("List of {}", collection_name(name)))),
        ItemKind::Type | ItemKind::Simple => Ok(None),
        ItemKind::Map | ItemKind::Pojo => {
            let titles = item.traits_where(Trait::is_title)?;
            if !titles.is_empty() {
                return Ok(Some(join_texts(item, &titles, " ")));
            }
            let template = item
                .type_name()
                .and_then(|name| item.registry().title_template(name));
            Ok(template.map(|template| {
                template.render(|field| field_text(item.target(), field))
            }))
        }
    }
}

/// The textual values of some traits of an item.
pub(super) fn join_texts(item: Item<'_>, traits: &[Trait<'_>], separator: &str) -> String {
    traits
        .iter()
        .map(|t| item.read(t).text())
        .collect::<Vec<_>>()
        .join(separator)
}

fn field_text(target: &Value, field: &str) -> String {
    target
        .as_record()
        .and_then(|record| record.field(field))
        .map(Value::to_string)
        .unwrap_or_default()
}
