//! Reading [`Value`]s from self-describing data formats.
//!
//! Maps keep their insertion order. Two conventions carry type information
//! that plain JSON/YAML can't express:
//!
//! - an object with a string member `$type` becomes a [`Record`] of that type,
//!   its other members becoming fields;
//! - a string of the form `$type:Name` becomes a [`Value::Type`].

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use crate::value::{Number, Record, Value};

/// Member naming the record type of an object.
pub const TYPE_KEY: &str = "$type";

/// Prefix of a string naming a type.
pub const TYPE_PREFIX: &str = "$type:";

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Number(Number::Int(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Number(Number::UInt(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<Value, E> {
        Ok(Value::Char(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(text_or_type(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(text_or_type(v))
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_newtype_struct<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> Result<Value, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut entries: Vec<(String, Value)> = Vec::new();
        let mut type_name = None;
        while let Some(key) = access.next_key::<String>()? {
            if key == TYPE_KEY {
                match access.next_value::<Value>()? {
                    Value::Text(name) => type_name = Some(name),
                    Value::Type(name) => type_name = Some(name),
                    other => {
                        return Err(de::Error::custom(format!(
                            "{TYPE_KEY} must be a string, got {other:?}"
                        )))
                    }
                }
            } else {
                entries.push((key, access.next_value::<Value>()?));
            }
        }

        Ok(match type_name {
            Some(name) => entries
                .into_iter()
                .fold(Record::new(name), |record, (k, v)| record.with(k, v))
                .into(),
            None => Value::Map(entries.into_iter().collect()),
        })
    }
}

fn text_or_type(text: String) -> Value {
    match text.strip_prefix(TYPE_PREFIX) {
        Some(name) if !name.is_empty() => Value::Type(name.to_string()),
        _ => Value::Text(text),
    }
}
