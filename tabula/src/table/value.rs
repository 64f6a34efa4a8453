use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell.
///
/// Only the [`Display`](fmt::Display) form of a value is ever measured or
/// rendered; the variants exist so that data files can use native scalars.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self { Self::Boolean(value) }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self { Self::Integer(value) }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self { Self::Float(value) }
}

impl From<String> for Value {
    fn from(value: String) -> Self { Self::Text(value) }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self { Self::Text(value.to_string()) }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self { value.map_or(Self::Null, Into::into) }
}
