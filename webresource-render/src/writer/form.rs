use webresource_meta::Item;

use super::body::write_nested;
use crate::context::RenderContext;
use crate::error::Result;
use crate::out::Attribute;

/// Write a record, map or type as a form with one labeled div per trait.
///
/// The business key, if any, is repeated as a hidden input so that a
/// submitted form identifies its resource.
pub(super) fn write_form(item: Item<'_>, ctx: &mut RenderContext<'_>) -> Result<()> {
    ctx.tag("form", &[], |ctx| {
        if let Some(key) = item.business_key()? {
            let value = item.read(&key).text();
            ctx.out().empty(
                "input",
                &[
                    Attribute::new("name", key.name()),
                    Attribute::new("type", "hidden"),
                    Attribute::new("value", value),
                ],
            )?;
        }

        for t in item.traits()? {
            let id = ctx.next_id(t.name());
            ctx.tag("div", &[], |ctx| {
                ctx.element(
                    "label",
                    &[
                        Attribute::new("for", id.as_str()),
                        Attribute::new("class", format!("{}-label", t.name())),
                    ],
                    t.name(),
                )?;
                write_nested(item.read(&t), &t, &id, ctx)
            })?;
        }

        ctx.out().empty(
            "input",
            &[
                Attribute::new("type", "submit"),
                Attribute::new("value", "submit"),
            ],
        )
    })
}
