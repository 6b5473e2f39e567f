use webresource_meta::Item;

use super::body::write_nested;
use crate::context::RenderContext;
use crate::error::Result;

/// Write a list of records or maps as a table with one column per trait of
/// the first element.
pub(super) fn write_table(item: Item<'_>, ctx: &mut RenderContext<'_>) -> Result<()> {
    let columns = item.traits()?;
    ctx.tag("table", &[], |ctx| {
        write_header(columns.iter().map(|t| t.name()), ctx)?;
        ctx.tag("tbody", &[], |ctx| {
            for row in item.list() {
                ctx.tag("tr", &[], |ctx| {
                    for t in &columns {
                        let id = ctx.next_id(t.name());
                        ctx.tag("td", &[], |ctx| write_nested(row.read(t), t, &id, ctx))?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })
    })
}

/// Write a map as a two-column table of keys and values.
pub(super) fn write_map_table(item: Item<'_>, ctx: &mut RenderContext<'_>) -> Result<()> {
    ctx.tag("table", &[], |ctx| {
        write_header(["key", "value"].into_iter(), ctx)?;
        ctx.tag("tbody", &[], |ctx| {
            for t in item.traits()? {
                ctx.tag("tr", &[], |ctx| {
                    ctx.element("td", &[], t.name())?;
                    let id = ctx.next_id(t.name());
                    ctx.tag("td", &[], |ctx| write_nested(item.read(&t), &t, &id, ctx))
                })?;
            }
            Ok(())
        })
    })
}

fn write_header<'n>(
    names: impl Iterator<Item = &'n str>,
    ctx: &mut RenderContext<'_>,
) -> Result<()> {
    ctx.tag("thead", &[], |ctx| {
        ctx.tag("tr", &[], |ctx| {
            for name in names {
                ctx.element("th", &[], name)?;
            }
            Ok(())
        })
    })
}
