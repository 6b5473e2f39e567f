//! The writers that turn classified items into markup.
//!
//! [`DocumentWriter`] writes the document shell and contains failures of its
//! head and body sections. The body dispatches on the item kind at every
//! level: top-level records and maps become forms, lists of records become
//! tables, nested records become links, and simple values become fields.

mod body;
mod document;
mod field;
mod form;
mod head;
mod link;
mod list;
mod table;
mod title;

pub use body::BodyWriter;
pub use document::{decorator, exception_comment, Decorator, DocumentWriter, SectionWriter};
pub use head::HeadWriter;
pub use title::title;
