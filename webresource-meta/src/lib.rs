//! # webresource-meta
//!
//! The generic object model behind webresource rendering.
//!
//! Arbitrary values are brought into a dynamic [`Value`] tree (directly, or
//! from anything that implements `serde::Serialize` via [`to_value`]), and the
//! classifier wraps each node into an [`Item`] of one of five structural
//! variants. Records expose their fields as [`Trait`]s, configured once per
//! type through a [`TypeDescriptor`] held in a [`Registry`].

pub mod de;
pub mod descriptor;
pub mod error;
pub mod item;
pub mod items;
pub mod names;
pub mod ser;
pub mod value;

pub use descriptor::{FieldDescriptor, Registry, StyleSheet, Template, TypeDescriptor};
pub use error::{MetaError, Result};
pub use item::{Item, ItemKind, Trait};
pub use items::classify;
pub use names::{collection_name, simple_type_name};
pub use ser::to_value;
pub use value::{Date, Map, Number, Record, ScalarKind, Value};
