//! The object-model classifier.

use crate::item::ItemKind;
use crate::value::Value;

/// Classify a value into exactly one item variant.
///
/// Precedence is Type, then Simple (null and scalars), then Map, then List.
/// Everything else is a Pojo.
pub fn classify(value: &Value) -> ItemKind {
    match value {
        Value::Type(_) => ItemKind::Type,
        Value::Null
        | Value::Text(_)
        | Value::Number(_)
        | Value::Bool(_)
        | Value::Char(_)
        | Value::Date(_) => ItemKind::Simple,
        Value::Map(_) => ItemKind::Map,
        Value::List(_) => ItemKind::List,
        Value::Record(_) => ItemKind::Pojo,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Map, Record};
    use chrono::NaiveDate;

    #[test]
    fn test_scalars_and_null_are_simple() {
        let day = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        for value in [
            Value::Null,
            Value::from("text"),
            Value::from(1),
            Value::from(2.5),
            Value::from(false),
            Value::from('c'),
            Value::from(day),
        ] {
            assert_eq!(classify(&value), ItemKind::Simple, "{value:?}");
        }
    }

    #[test]
    fn test_structured_values() {
        assert_eq!(classify(&Value::Map(Map::new())), ItemKind::Map);
        assert_eq!(classify(&Value::List(vec![])), ItemKind::List);
        assert_eq!(classify(&Record::new("Pojo").into()), ItemKind::Pojo);
    }

    #[test]
    fn test_type_takes_precedence() {
        assert_eq!(classify(&Value::type_of::<Record>()), ItemKind::Type);
    }
}
