use tracing::trace;
use webresource_meta::{Item, ItemKind, Trait};

use super::document::SectionWriter;
use super::field::write_field;
use super::form::write_form;
use super::link::write_link;
use super::list::write_list;
use super::table::{write_map_table, write_table};
use crate::context::RenderContext;
use crate::error::Result;

/// Writes the root item of a document: records, maps and types as forms,
/// lists of records as tables, other lists as lists, simple values as fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyWriter;

impl SectionWriter for BodyWriter {
    fn write(&self, item: Item<'_>, ctx: &mut RenderContext<'_>) -> Result<()> {
        trace!(?item, "Writing body");
        match item.kind() {
            ItemKind::Simple => {
                let id = ctx.next_id(Trait::SIMPLE_NAME);
                write_field(item, &Trait::SIMPLE, &id, ctx)
            }
            ItemKind::Map | ItemKind::Pojo | ItemKind::Type => write_form(item, ctx),
            ItemKind::List if is_table(item) => write_table(item, ctx),
            ItemKind::List => write_list(item, ctx),
        }
    }
}

fn is_table(item: Item<'_>) -> bool {
    item.list()
        .first()
        .is_some_and(|first| first.is_pojo() || first.is_map())
}

/// Write an item found in a form or table cell, under the trait it was read
/// from and the id allocated for it.
pub(super) fn write_nested(
    item: Item<'_>,
    t: &Trait<'_>,
    id: &str,
    ctx: &mut RenderContext<'_>,
) -> Result<()> {
    trace!(?item, name = t.name(), "Writing nested item");
    match item.kind() {
        ItemKind::Simple => write_field(item, t, id, ctx),
        ItemKind::List => write_list(item, ctx),
        ItemKind::Map => write_map_table(item, ctx),
        ItemKind::Pojo | ItemKind::Type => write_link(item, id, ctx),
    }
}
