//! Value bindings displayed in screen areas.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar value bound to a symbolic name.
///
/// The manifest declares values as either numeric (`Value`) or string
/// (`StrValue`); at runtime the application layer overwrites them freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// Numeric value
    Int(i64),
    /// String value
    Str(String),
}

impl Value {
    /// The kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Str(_) => ValueKind::Str,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

/// Discriminant of a [`Value`], used for declared-type bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    /// Numeric value
    Int,
    /// String value
    Str,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "numeric"),
            Self::Str => write!(f, "string"),
        }
    }
}

/// A value declaration from the manifest: symbolic name plus its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueDef {
    /// Symbolic binding name (e.g. "Display")
    pub name: String,
    /// Value used until the application layer sets one
    pub default: Value,
}

impl ValueDef {
    /// Creates a new `ValueDef`.
    pub fn new(name: impl Into<String>, default: Value) -> Self {
        Self {
            name: name.into(),
            default,
        }
    }
}
