//! Per-type rendering configuration.
//!
//! A [`TypeDescriptor`] carries everything a renderer needs to know about a
//! record type beyond its field values: which fields make up the title or the
//! link text, which field is the business key, input type overrides, and the
//! stylesheets of the page. Descriptors are registered once in a [`Registry`]
//! and looked up by record type name during rendering.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MetaError, Result};
use crate::names::{collection_name, simple_type_name};
use crate::value::ScalarKind;

/// A stylesheet declaration.
///
/// The path is resolved app-relative: absolute URIs are taken as is, paths
/// starting with `/` are local to the host, anything else is local to the
/// application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSheet {
    pub path: String,

    /// Copy the stylesheet into a `style` element instead of linking it.
    #[serde(default)]
    pub inline: bool,
}

impl StyleSheet {
    pub fn link(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            inline: false,
        }
    }

    pub fn inline(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            inline: true,
        }
    }
}

/// Configuration of one field of a record type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDescriptor {
    /// The field as it appears in the record.
    pub field: String,

    /// Trait name override.
    pub name: Option<String>,

    /// Html input type override.
    pub input_type: Option<String>,

    /// Declared scalar kind, used to type fields whose value is null or text.
    pub kind: Option<ScalarKind>,

    /// Contributes to the page title and link text.
    pub title: bool,

    /// Contributes to link text.
    pub link_text: bool,

    /// Identifies the resource in links, in preference to the id.
    pub business_key: bool,

    /// Primary identifier.
    pub id: bool,
}

impl FieldDescriptor {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Self::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    pub fn with_kind(mut self, kind: ScalarKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn title(mut self) -> Self {
        self.title = true;
        self
    }

    pub fn link_text(mut self) -> Self {
        self.link_text = true;
        self
    }

    pub fn business_key(mut self) -> Self {
        self.business_key = true;
        self
    }

    pub fn id(mut self) -> Self {
        self.id = true;
        self
    }

    /// The name this field is exposed under.
    pub fn trait_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.field)
    }
}

/// Configuration of a record type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeDescriptor {
    /// Record type name, as produced by serialization.
    pub name: String,

    /// Type-level title: a literal, or a template with `${field}` placeholders.
    pub title: Option<String>,

    pub stylesheets: Vec<StyleSheet>,

    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A descriptor named after the Rust type `T`.
    pub fn of<T: ?Sized>() -> Self {
        Self::new(simple_type_name::<T>())
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_stylesheet(mut self, stylesheet: StyleSheet) -> Self {
        self.stylesheets.push(stylesheet);
        self
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// The configuration of a record field, if any.
    pub fn field(&self, field: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.field == field)
    }

    pub fn collection_name(&self) -> String {
        collection_name(&self.name)
    }

    fn validate(&self) -> Result<()> {
        let mut fields = HashSet::new();
        let mut names = HashSet::new();
        for field in &self.fields {
            if !fields.insert(field.field.as_str()) || !names.insert(field.trait_name()) {
                return Err(MetaError::DuplicateTrait {
                    type_name: self.name.clone(),
                    name: field.trait_name().to_string(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(String),
}

/// A title template: literal text with `${field}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\$\{\s*([^}\s]+)\s*\}").unwrap())
}

impl Template {
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut last = 0;
        for captures in placeholder_regex().captures_iter(source) {
            let (Some(whole), Some(field)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Literal(source[last..whole.start()].to_string()));
            }
            segments.push(Segment::Field(field.as_str().to_string()));
            last = whole.end();
        }
        if last < source.len() {
            segments.push(Segment::Literal(source[last..].to_string()));
        }
        Self { segments }
    }

    /// The fields referenced by placeholders, in order of appearance.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Field(field) => Some(field.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute every placeholder through `lookup`.
    pub fn render(&self, mut lookup: impl FnMut(&str) -> String) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => out.push_str(&lookup(field)),
            }
        }
        out
    }
}

#[derive(Debug, Clone)]
struct Registered {
    descriptor: TypeDescriptor,
    title: Option<Template>,
}

/// Type descriptors keyed by record type name.
///
/// Descriptors are validated and their title templates compiled when they
/// are registered, not when they are rendered.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    types: HashMap<String, Registered>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_descriptors(descriptors: impl IntoIterator<Item = TypeDescriptor>) -> Result<Self> {
        let mut registry = Self::new();
        for descriptor in descriptors {
            registry.register(descriptor)?;
        }
        Ok(registry)
    }

    /// Register a descriptor, replacing any earlier one of the same name.
    pub fn register(&mut self, descriptor: TypeDescriptor) -> Result<()> {
        descriptor.validate()?;
        let title = descriptor.title.as_deref().map(Template::parse);
        debug!(type_name = %descriptor.name, fields = descriptor.fields.len(), "Registered type");
        let name = descriptor.name.clone();
        if self
            .types
            .insert(name, Registered { descriptor, title })
            .is_some()
        {
            debug!("Replaced an earlier registration");
        }
        Ok(())
    }

    pub fn descriptor(&self, type_name: &str) -> Option<&TypeDescriptor> {
        self.types.get(type_name).map(|r| &r.descriptor)
    }

    pub fn title_template(&self, type_name: &str) -> Option<&Template> {
        self.types.get(type_name).and_then(|r| r.title.as_ref())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
