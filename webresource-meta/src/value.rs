//! The dynamic value tree rendered by webresource.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::names::simple_type_name;

/// A number as it appeared in the source value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::UInt(n) => write!(f, "{n}"),
            Number::Float(n) => write!(f, "{n}"),
        }
    }
}

/// A calendar date or a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Date {
    Day(NaiveDate),
    Instant(DateTime<Utc>),
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Date::Day(day) => write!(f, "{}", day.format("%Y-%m-%d")),
            Date::Instant(instant) => f.write_str(&instant.to_rfc3339()),
        }
    }
}

/// The scalar shapes a simple value (or a declared field) can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    String,
    Number,
    Boolean,
    Character,
    Date,
}

impl ScalarKind {
    /// Lowercase simple type name, used as css class of rendered fields.
    pub fn tag(self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Number => "number",
            ScalarKind::Boolean => "boolean",
            ScalarKind::Character => "character",
            ScalarKind::Date => "date",
        }
    }

    /// The html input type used when a field doesn't override it.
    pub fn input_type(self) -> &'static str {
        match self {
            ScalarKind::Boolean => "checkbox",
            ScalarKind::Date => "date",
            _ => "text",
        }
    }
}

/// String-keyed entries in insertion order. Keys are unique.
#[derive(Debug, Clone, Default)]
pub struct Map {
    entries: IndexMap<String, Value>,
}

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry. A replaced entry keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Maps are equal when they hold the same entries in the same order.
impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// A structured value: a named type with fields in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    type_name: String,
    fields: Map,
}

impl Record {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Map::new(),
        }
    }

    /// Builder-style field insertion.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field, value);
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn fields(&self) -> &Map {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field, value)
    }
}

/// Any value webresource can render.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Text(String),
    Number(Number),
    Bool(bool),
    Char(char),
    Date(Date),
    Map(Map),
    List(Vec<Value>),
    Record(Record),
    /// A reference to a type rather than an instance of it.
    Type(String),
}

impl Value {
    /// A value describing the type `T` itself.
    pub fn type_of<T: ?Sized>() -> Value {
        Value::Type(simple_type_name::<T>().to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The scalar kind of this value, `None` for null and structured values.
    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        match self {
            Value::Text(_) => Some(ScalarKind::String),
            Value::Number(_) => Some(ScalarKind::Number),
            Value::Bool(_) => Some(ScalarKind::Boolean),
            Value::Char(_) => Some(ScalarKind::Character),
            Value::Date(_) => Some(ScalarKind::Date),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }
}

/// The textual form of a value.
///
/// Null is empty, records join their scalar fields with `-`, lists and maps
/// join their elements with `, `.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Text(text) => f.write_str(text),
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Date(date) => write!(f, "{date}"),
            Value::Type(name) => f.write_str(name),
            Value::List(items) => join(f, items.iter(), ", "),
            Value::Map(map) => join(f, map.iter().map(|(_, v)| v), ", "),
            Value::Record(record) => join(
                f,
                record
                    .fields()
                    .iter()
                    .map(|(_, v)| v)
                    .filter(|v| v.scalar_kind().is_some()),
                "-",
            ),
        }
    }
}

fn join<'a>(
    f: &mut fmt::Formatter<'_>,
    values: impl Iterator<Item = &'a Value>,
    separator: &str,
) -> fmt::Result {
    for (i, value) in values.enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

macro_rules! from_number {
    ($($ty:ty => $variant:ident as $cast:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(Number::$variant(n as $cast))
                }
            }
        )*
    };
}

from_number! {
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int as i64,
    u8 => UInt as u64,
    u16 => UInt as u64,
    u32 => UInt as u64,
    u64 => UInt as u64,
    usize => UInt as u64,
    f32 => Float as f64,
    f64 => Float as f64,
}

impl From<NaiveDate> for Value {
    fn from(day: NaiveDate) -> Self {
        Value::Date(Date::Day(day))
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(instant: DateTime<Utc>) -> Self {
        Value::Date(Date::Instant(instant))
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_keeps_insertion_order() {
        let map: Map = [("one", 111), ("two", 222), ("three", 333)]
            .into_iter()
            .collect();

        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_map_replace_keeps_position() {
        let mut map = Map::new();
        map.insert("a", 1);
        map.insert("b", 2);

        let old = map.insert("a", 3);

        assert_eq!(old, Some(Value::from(1)));
        assert_eq!(map.len(), 2);
        assert_eq!(map.iter().next(), Some(("a", &Value::from(3))));
    }

    #[test]
    fn test_map_equality_respects_order() {
        let ab: Map = [("a", 1), ("b", 2)].into_iter().collect();
        let ba: Map = [("b", 2), ("a", 1)].into_iter().collect();

        assert_eq!(ab, ab.clone());
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_large_map_lookup() {
        let map: Map = (0..10_000).map(|i| (format!("key-{i}"), i)).collect();

        assert_eq!(map.len(), 10_000);
        assert_eq!(map.get("key-9999"), Some(&Value::from(9999)));
        assert_eq!(map.keys().nth(42), Some("key-42"));
    }

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from("str").to_string(), "str");
        assert_eq!(Value::from(123).to_string(), "123");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from('c').to_string(), "c");
    }

    #[test]
    fn test_display_date() {
        let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(Value::from(day).to_string(), "2024-02-29");
    }

    #[test]
    fn test_display_record_joins_scalar_fields() {
        let record = Record::new("SimplePojo")
            .with("str1", "one")
            .with("str2", "two")
            .with("nested", vec!["ignored"]);

        assert_eq!(Value::from(record).to_string(), "one-two");
    }

    #[test]
    fn test_display_list() {
        assert_eq!(Value::from(vec!["a", "b"]).to_string(), "a, b");
    }

    #[test]
    fn test_option_into_value() {
        assert_eq!(Value::from(None::<String>), Value::Null);
        assert_eq!(Value::from(Some(7u8)), Value::Number(Number::UInt(7)));
    }

    #[test]
    fn test_scalar_kinds() {
        assert_eq!(Value::from(1).scalar_kind(), Some(ScalarKind::Number));
        assert_eq!(Value::Null.scalar_kind(), None);
        assert_eq!(ScalarKind::Boolean.input_type(), "checkbox");
        assert_eq!(ScalarKind::Number.tag(), "number");
    }
}
