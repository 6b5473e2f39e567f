use webresource_meta::{Item, ScalarKind, Trait, Value};

use crate::context::RenderContext;
use crate::error::Result;
use crate::out::Attribute;

/// Write a simple item as a readonly input with the given id.
///
/// The css class names the scalar kind of the value. Null and text values
/// take the kind declared for their trait, since dates and the like arrive
/// as text from data files and serialization; without a declaration they
/// are `string`.
pub(super) fn write_field(
    item: Item<'_>,
    t: &Trait<'_>,
    id: &str,
    ctx: &mut RenderContext<'_>,
) -> Result<()> {
    let declared = t.declared_kind();
    let kind = match item.target() {
        Value::Null | Value::Text(_) => declared,
        value => value.scalar_kind().or(declared),
    }
    .unwrap_or(ScalarKind::String);
    let input_type = t.input_type().unwrap_or(kind.input_type());
    let text = item.text();

    let mut attributes = vec![
        Attribute::new("id", id),
        Attribute::new("class", kind.tag()),
        Attribute::new("type", input_type),
        Attribute::new("value", text),
    ];
    if matches!(item.target(), Value::Bool(true)) {
        attributes.push(Attribute::flag("checked"));
    }
    attributes.push(Attribute::flag("readonly"));

    ctx.out().empty("input", &attributes)
}
