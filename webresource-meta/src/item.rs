//! Items and traits: the classified view of a value.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

use crate::descriptor::{FieldDescriptor, Registry, StyleSheet, TypeDescriptor};
use crate::error::{MetaError, Result};
use crate::items::classify;
use crate::names::collection_name;
use crate::value::{Date, Number, Record, ScalarKind, Value};

static NULL: Value = Value::Null;

/// The structural variant of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Null or a scalar.
    Simple,
    Map,
    List,
    /// A structured record.
    Pojo,
    /// A type rather than a value.
    Type,
}

/// A classified, read-only view of a value.
///
/// The classification is computed once when the item is created. Items are
/// cheap to copy and are created on demand whenever a value is rendered.
#[derive(Clone, Copy)]
pub struct Item<'a> {
    target: &'a Value,
    kind: ItemKind,
    registry: &'a Registry,
}

impl<'a> Item<'a> {
    pub fn new(target: &'a Value, registry: &'a Registry) -> Self {
        Self {
            target,
            kind: classify(target),
            registry,
        }
    }

    pub fn target(&self) -> &'a Value {
        self.target
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn is_simple(&self) -> bool {
        self.kind == ItemKind::Simple
    }

    pub fn is_list(&self) -> bool {
        self.kind == ItemKind::List
    }

    pub fn is_map(&self) -> bool {
        self.kind == ItemKind::Map
    }

    pub fn is_pojo(&self) -> bool {
        self.kind == ItemKind::Pojo
    }

    pub fn is_type(&self) -> bool {
        self.kind == ItemKind::Type
    }

    pub fn is_null(&self) -> bool {
        self.target.is_null()
    }

    /// The record type of a Pojo, or the type named by a Type item.
    pub fn type_name(&self) -> Option<&'a str> {
        match self.target {
            Value::Record(record) => Some(record.type_name()),
            Value::Type(name) => Some(name),
            _ => None,
        }
    }

    /// The simple type name of a list's elements, judged by the first one.
    pub fn element_type_name(&self) -> Option<&'a str> {
        let first = self.target.as_list()?.first()?;
        match first {
            Value::Record(record) => Some(record.type_name()),
            other => other.scalar_kind().map(ScalarKind::tag),
        }
    }

    /// Lowercased type name plus `s`: the collection a Pojo belongs to.
    pub fn collection_name(&self) -> Option<String> {
        self.type_name().map(collection_name)
    }

    /// The descriptor of this item's type. Lists use their first element's.
    pub fn descriptor(&self) -> Option<&'a TypeDescriptor> {
        match self.target {
            Value::List(items) => match items.first() {
                Some(Value::Record(record)) => self.registry.descriptor(record.type_name()),
                _ => None,
            },
            _ => self.registry.descriptor(self.type_name()?),
        }
    }

    pub fn stylesheets(&self) -> &'a [StyleSheet] {
        self.descriptor()
            .map(|d| d.stylesheets.as_slice())
            .unwrap_or(&[])
    }

    /// The traits of this item, in declaration or insertion order.
    ///
    /// Simple items have the single synthetic trait `simple`. Lists expose
    /// the traits of their first element, so that a list of records can be
    /// rendered with one column per field.
    ///
    /// Fails with [`MetaError::DuplicateTrait`] when a record field and a
    /// renamed field end up with the same name.
    pub fn traits(&self) -> Result<Vec<Trait<'a>>> {
        Ok(match self.target {
            Value::Type(name) => self
                .registry
                .descriptor(name)
                .map(|d| d.fields.iter().map(Trait::declared).collect())
                .unwrap_or_default(),
            Value::Map(map) => map.keys().map(Trait::key).collect(),
            Value::List(items) => match items.first() {
                Some(first) => Item::new(first, self.registry).traits_of_structure()?,
                None => Vec::new(),
            },
            Value::Record(record) => record_traits(record, self.descriptor())?,
            _ => vec![Trait::SIMPLE],
        })
    }

    fn traits_of_structure(&self) -> Result<Vec<Trait<'a>>> {
        match self.kind {
            ItemKind::Map | ItemKind::Pojo => self.traits(),
            _ => Ok(Vec::new()),
        }
    }

    /// Look up a trait by name.
    pub fn trait_named(&self, name: &str) -> Result<Trait<'a>> {
        self.traits()?
            .into_iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| MetaError::NoSuchTrait {
                name: name.to_string(),
                item: format!("{self:?}"),
            })
    }

    /// The traits matching a predicate, in order.
    pub fn traits_where(&self, predicate: impl Fn(&Trait<'a>) -> bool) -> Result<Vec<Trait<'a>>> {
        Ok(self.traits()?.into_iter().filter(|t| predicate(t)).collect())
    }

    pub fn business_key(&self) -> Result<Option<Trait<'a>>> {
        Ok(self.traits()?.into_iter().find(Trait::is_business_key))
    }

    pub fn id_trait(&self) -> Result<Option<Trait<'a>>> {
        Ok(self.traits()?.into_iter().find(Trait::is_id))
    }

    /// Read the value of a trait. Slots missing from this value read as null.
    pub fn read(&self, t: &Trait<'_>) -> Item<'a> {
        let value = match t.source {
            Source::Simple => self.target,
            Source::Key(key) | Source::Field { field: key, .. } => {
                slot(self.target, key).unwrap_or(&NULL)
            }
        };
        Item::new(value, self.registry)
    }

    /// The elements of a list, empty for any other item.
    pub fn list(&self) -> Vec<Item<'a>> {
        match self.target {
            Value::List(items) => items
                .iter()
                .map(|item| Item::new(item, self.registry))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// The textual form of this item.
    ///
    /// Records whose type declares a title template with placeholders use
    /// it; everything else uses the value's own textual form.
    pub fn text(&self) -> String {
        if let Value::Record(record) = self.target {
            if let Some(template) = self.registry.title_template(record.type_name()) {
                if template.fields().next().is_some() {
                    return template.render(|field| {
                        record.field(field).map(Value::to_string).unwrap_or_default()
                    });
                }
            }
        }
        self.target.to_string()
    }
}

impl fmt::Debug for Item<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.type_name() {
            Some(name) => write!(f, "{:?}[{}]", self.kind, name),
            None => write!(f, "{:?}[{}]", self.kind, self.target),
        }
    }
}

fn slot<'v>(target: &'v Value, key: &str) -> Option<&'v Value> {
    match target {
        Value::Map(map) => map.get(key),
        Value::Record(record) => record.field(key),
        _ => None,
    }
}

fn record_traits<'a>(
    record: &'a Record,
    descriptor: Option<&'a TypeDescriptor>,
) -> Result<Vec<Trait<'a>>> {
    let mut seen = HashSet::new();
    record
        .fields()
        .keys()
        .map(|field| {
            let annotations = descriptor.and_then(|d| d.field(field));
            let t = Trait {
                name: annotations.map(FieldDescriptor::trait_name).unwrap_or(field),
                source: Source::Field { field, annotations },
            };
            if seen.insert(t.name) {
                Ok(t)
            } else {
                Err(MetaError::DuplicateTrait {
                    type_name: record.type_name().to_string(),
                    name: t.name.to_string(),
                })
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Source<'a> {
    Simple,
    Key(&'a str),
    Field {
        field: &'a str,
        annotations: Option<&'a FieldDescriptor>,
    },
}

/// A named slot of an item: a record field, a map key, or the synthetic
/// `simple` slot of a scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trait<'a> {
    name: &'a str,
    source: Source<'a>,
}

impl<'a> Trait<'a> {
    /// Name of the one trait of a simple item.
    pub const SIMPLE_NAME: &'static str = "simple";

    /// The trait of a simple item, reading the item itself.
    pub const SIMPLE: Trait<'static> = Trait {
        name: Self::SIMPLE_NAME,
        source: Source::Simple,
    };

    fn key(key: &'a str) -> Self {
        Self {
            name: key,
            source: Source::Key(key),
        }
    }

    fn declared(descriptor: &'a FieldDescriptor) -> Self {
        Self {
            name: descriptor.trait_name(),
            source: Source::Field {
                field: &descriptor.field,
                annotations: Some(descriptor),
            },
        }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The field configuration, absent for map keys and unconfigured fields.
    pub fn annotations(&self) -> Option<&'a FieldDescriptor> {
        match self.source {
            Source::Field { annotations, .. } => annotations,
            _ => None,
        }
    }

    pub fn is_title(&self) -> bool {
        self.annotations().is_some_and(|a| a.title)
    }

    pub fn is_link_text(&self) -> bool {
        self.annotations().is_some_and(|a| a.link_text)
    }

    pub fn is_business_key(&self) -> bool {
        self.annotations().is_some_and(|a| a.business_key)
    }

    pub fn is_id(&self) -> bool {
        self.annotations().is_some_and(|a| a.id)
    }

    pub fn input_type(&self) -> Option<&'a str> {
        self.annotations().and_then(|a| a.input_type.as_deref())
    }

    pub fn declared_kind(&self) -> Option<ScalarKind> {
        self.annotations().and_then(|a| a.kind)
    }

    /// Write a submitted value into this slot of `target`.
    ///
    /// Text is converted to the declared kind of the field, if any.
    pub fn write(&self, target: &mut Value, value: Value) -> Result<()> {
        let value = match (self.declared_kind(), value) {
            (Some(kind), Value::Text(text)) => convert(kind, text)?,
            (_, value) => value,
        };
        match (self.source, target) {
            (Source::Simple, target) => *target = value,
            (Source::Key(key), Value::Map(map)) => {
                map.insert(key, value);
            }
            (Source::Field { field, .. }, Value::Record(record)) => {
                record.set(field, value);
            }
            (_, target) => {
                return Err(MetaError::Write {
                    name: self.name.to_string(),
                    target: format!("{:?}", classify(target)),
                    reason: "the value has no such slot".to_string(),
                })
            }
        }
        Ok(())
    }
}

fn convert(kind: ScalarKind, text: String) -> Result<Value> {
    let failed = |text: &str| MetaError::Conversion {
        value: text.to_string(),
        kind: kind.tag().to_string(),
    };
    let trimmed = text.trim();
    match kind {
        ScalarKind::String => Ok(Value::Text(text)),
        ScalarKind::Number => {
            if let Ok(n) = trimmed.parse::<i64>() {
                Ok(Value::Number(Number::Int(n)))
            } else if let Ok(n) = trimmed.parse::<u64>() {
                Ok(Value::Number(Number::UInt(n)))
            } else if let Ok(n) = trimmed.parse::<f64>() {
                Ok(Value::Number(Number::Float(n)))
            } else {
                Err(failed(&text))
            }
        }
        ScalarKind::Boolean => match trimmed {
            "true" | "on" | "checked" => Ok(Value::Bool(true)),
            "false" | "off" | "" => Ok(Value::Bool(false)),
            _ => Err(failed(&text)),
        },
        ScalarKind::Character => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Value::Char(c)),
                _ => Err(failed(&text)),
            }
        }
        ScalarKind::Date => {
            if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
                Ok(Value::Date(Date::Day(day)))
            } else if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
                Ok(Value::Date(Date::Instant(instant.with_timezone(&Utc))))
            } else {
                Err(failed(&text))
            }
        }
    }
}
