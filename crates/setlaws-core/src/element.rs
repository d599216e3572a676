//! Set elements and their total order.
//!
//! Every integer sorts before every text element. Integers compare
//! numerically and text compares lexicographically by its UTF-8 bytes, which
//! is exactly the derived [`Ord`] on [`Element`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{ErrorInfo, SetLawError};

/// A single member of a [`FiniteSet`](crate::FiniteSet).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    /// Signed integer element.
    Int(i64),
    /// Free-form text element.
    Text(String),
}

impl Element {
    /// Returns the integer payload when the element is numeric.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Element::Int(value) => Some(*value),
            Element::Text(_) => None,
        }
    }

    /// Converts an untyped JSON/YAML value into an element.
    ///
    /// Only integers representable as `i64` and strings are accepted. Other
    /// scalars have no agreed ordering against the accepted kinds and nested
    /// values are not hashable members, so both are rejected.
    pub fn from_value(value: &Value) -> Result<Self, SetLawError> {
        match value {
            Value::String(text) => Ok(Element::Text(text.clone())),
            Value::Number(number) => number.as_i64().map(Element::Int).ok_or_else(|| {
                SetLawError::InvalidInput(
                    ErrorInfo::new(
                        "incomparable-element",
                        "only integers that fit in 64 bits can be set elements",
                    )
                    .with_context("value", number.to_string())
                    .with_hint("quote the value to use it as a text element"),
                )
            }),
            Value::Bool(_) | Value::Null => Err(SetLawError::InvalidInput(
                ErrorInfo::new(
                    "incomparable-element",
                    "booleans and nulls cannot be ordered against set elements",
                )
                .with_context("value", value.to_string())
                .with_hint("quote the value to use it as a text element"),
            )),
            Value::Array(_) | Value::Object(_) => Err(SetLawError::InvalidInput(
                ErrorInfo::new(
                    "non-hashable-element",
                    "nested sequences and maps cannot be set elements",
                )
                .with_context("value", value.to_string()),
            )),
        }
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Int(value)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::Text(value.to_string())
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Element::Text(value)
    }
}

impl TryFrom<&Value> for Element {
    type Error = SetLawError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Element::from_value(value)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Int(value) => write!(f, "{value}"),
            Element::Text(text) => f.write_str(text),
        }
    }
}
