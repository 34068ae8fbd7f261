//! Record identifiers.
//!
//! Records carry their identity in an `id` field that may be an integer or
//! a string. Paths only ever carry text, so lookups compare the textual
//! form: `/users/1` addresses both `{"id": 1}` and `{"id": "1"}`.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

/// Identifier of a record inside a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Integer id, as produced by sequential allocation.
    Number(i64),
    /// Free-form string id (UUIDs, slugs, …).
    Text(String),
}

impl RecordId {
    /// Read an id out of a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] when the value is not an
    /// integer or a string.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        match value {
            Value::Number(number) => number
                .as_i64()
                .map(Self::Number)
                .ok_or_else(|| ValidationError::InvalidId(value.to_string())),
            Value::String(text) => Ok(Self::Text(text.clone())),
            other => Err(ValidationError::InvalidId(other.to_string())),
        }
    }

    /// Convert back into a JSON value for storage.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Number(number) => Value::from(*number),
            Self::Text(text) => Value::from(text.as_str()),
        }
    }

    /// Whether a stored `id` value addresses this identifier.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match value {
            Value::Number(number) => number.to_string() == self.to_string(),
            Value::String(text) => *text == self.to_string(),
            _ => false,
        }
    }

    /// Pick an id for a new record given the ids already in a collection.
    ///
    /// Integer collections continue their sequence (`max + 1`, or `1` when
    /// empty). As soon as one id is not an integer a random UUID is used.
    pub fn allocate<'a>(existing: impl IntoIterator<Item = &'a Value>) -> Self {
        let mut max = 0_i64;
        for value in existing {
            match value.as_i64() {
                Some(number) => max = max.max(number),
                None => return Self::Text(uuid::Uuid::new_v4().to_string()),
            }
        }
        Self::Number(max.saturating_add(1))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => number.fmt(f),
            Self::Text(text) => text.fmt(f),
        }
    }
}

/// Only the canonical decimal form becomes a number, so `"007"` and `"+7"`
/// stay text and never address `{"id": 7}`.
impl From<&str> for RecordId {
    fn from(text: &str) -> Self {
        match text.parse::<i64>() {
            Ok(number) if number.to_string() == text => Self::Number(number),
            _ => Self::Text(text.to_string()),
        }
    }
}

impl FromStr for RecordId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}
