use tracing::{debug, error, warn};
use webresource_meta::Item;

use super::{BodyWriter, HeadWriter};
use crate::context::RenderContext;
use crate::error::{RenderError, Result};

/// Writes the content of one section of a document.
pub trait SectionWriter: Send + Sync {
    fn write(&self, item: Item<'_>, ctx: &mut RenderContext<'_>) -> Result<()>;
}

/// Appends markup to the body of every successfully rendered document.
///
/// Closures `Fn(Item, &mut RenderContext) -> Result<()>` are decorators.
pub trait Decorator: Send + Sync {
    fn decorate(&self, item: Item<'_>, ctx: &mut RenderContext<'_>) -> Result<()>;
}

impl<F> Decorator for F
where
    F: Fn(Item<'_>, &mut RenderContext<'_>) -> Result<()> + Send + Sync,
{
    fn decorate(&self, item: Item<'_>, ctx: &mut RenderContext<'_>) -> Result<()> {
        self(item, ctx)
    }
}

/// Box a closure as a decorator.
pub fn decorator<F>(f: F) -> Box<dyn Decorator>
where
    F: Fn(Item<'_>, &mut RenderContext<'_>) -> Result<()> + Send + Sync + 'static,
{
    Box::new(f)
}

const HEAD_FAILED: &str = "error writing head";
const BODY_FAILED: &str = "error writing body";

/// Writes `<html>` with a head and a body section.
///
/// A failing head or body section is contained: its element is closed, a
/// marker text and `</html>` follow, and an html comment naming the error
/// ends the document. The error is returned after that. Decorators run after
/// a successful body; their failures are not contained.
pub struct DocumentWriter<'d, H = HeadWriter, B = BodyWriter> {
    head: H,
    body: B,
    decorators: &'d [Box<dyn Decorator>],
}

impl<'d> DocumentWriter<'d> {
    pub fn new(decorators: &'d [Box<dyn Decorator>]) -> Self {
        Self {
            head: HeadWriter,
            body: BodyWriter,
            decorators,
        }
    }
}

impl<'d, H: SectionWriter, B: SectionWriter> DocumentWriter<'d, H, B> {
    pub fn with_head<H2: SectionWriter>(self, head: H2) -> DocumentWriter<'d, H2, B> {
        DocumentWriter {
            head,
            body: self.body,
            decorators: self.decorators,
        }
    }

    pub fn with_body<B2: SectionWriter>(self, body: B2) -> DocumentWriter<'d, H, B2> {
        DocumentWriter {
            head: self.head,
            body,
            decorators: self.decorators,
        }
    }

    pub fn write(&self, item: Item<'_>, ctx: &mut RenderContext<'_>) -> Result<()> {
        debug!(?item, "Writing document");
        ctx.out().open("html", &[])?;

        ctx.out().open("head", &[])?;
        let head = self.head.write(item, ctx);
        ctx.out().close("head")?;
        if let Err(e) = head {
            return Err(contain(ctx, HEAD_FAILED, e));
        }

        ctx.out().open("body", &[])?;
        if let Err(e) = self.body.write(item, ctx) {
            ctx.out().close("body")?;
            return Err(contain(ctx, BODY_FAILED, e));
        }
        for decorator in self.decorators {
            if let Err(e) = decorator.decorate(item, ctx) {
                error!(error = %e, "Decorator failed");
                ctx.out().close("body")?;
                ctx.out().close("html")?;
                return Err(e);
            }
        }
        ctx.out().close("body")?;

        ctx.out().close("html")
    }
}

/// Finish a document whose section failed, and return the section's error.
fn contain(ctx: &mut RenderContext<'_>, marker: &str, e: RenderError) -> RenderError {
    warn!(error = %e, "{marker}");
    let finished = ctx
        .out()
        .text(marker)
        .and_then(|()| ctx.out().close("html"))
        .and_then(|()| ctx.out().raw(&exception_comment(&e)));
    if let Err(secondary) = finished {
        warn!(error = %secondary, "Failed to finish the document");
    }
    e
}

/// The html comment appended to a document whose head or body failed.
pub fn exception_comment(e: &RenderError) -> String {
    let dots = ".".repeat(60);
    format!("<!-- {dots}{}{dots} -->", e.type_name())
}
