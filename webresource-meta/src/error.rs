use std::fmt;

use thiserror::Error;

/// Errors raised while converting values or accessing traits.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetaError {
    #[error("Failed to convert value: {0}")]
    Serialize(String),

    #[error("Map keys must be scalars, got {0}")]
    KeyMustBeScalar(String),

    #[error("No trait '{name}' in {item}")]
    NoSuchTrait { name: String, item: String },

    #[error("Can't set {name} of {target}: {reason}")]
    Write {
        name: String,
        target: String,
        reason: String,
    },

    #[error("Can't convert '{value}' to {kind}")]
    Conversion { value: String, kind: String },

    #[error("Duplicate trait '{name}' in type {type_name}")]
    DuplicateTrait { type_name: String, name: String },
}

pub type Result<T> = std::result::Result<T, MetaError>;

impl serde::ser::Error for MetaError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        MetaError::Serialize(msg.to_string())
    }
}
