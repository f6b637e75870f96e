//! Sample node metadata.
//!
//! Metadata is a two level mapping: key -> value key -> primitive value.
//! Nodes carry two such mappings, controlled and user supplied, which share a
//! shape and a set of checks and differ only in how errors name them.

use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::strings::first_control_char;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value key -> primitive, in insertion order
pub type MetadataValues = IndexMap<String, MetadataValue>;

/// Metadata mapping: key -> value key -> primitive, in insertion order
pub type Metadata = IndexMap<String, MetadataValues>;

/// A primitive metadata value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
}

impl MetadataValue {
    /// Convert a JSON value, returning `None` for null and collections.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(b) => Some(MetadataValue::Bool(*b)),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Some(MetadataValue::Int(i)),
                None => n.as_f64().map(MetadataValue::Float),
            },
            serde_json::Value::String(s) => Some(MetadataValue::String(s.clone())),
            _ => None,
        }
    }

    /// Convert to a JSON value. Non-finite floats become null.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            MetadataValue::Bool(b) => serde_json::Value::Bool(*b),
            MetadataValue::Int(i) => serde_json::Value::Number((*i).into()),
            MetadataValue::Float(f) => serde_json::Number::from_f64(*f)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            MetadataValue::String(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Bool(b) => write!(f, "{}", b),
            MetadataValue::Int(i) => write!(f, "{}", i),
            MetadataValue::Float(x) => write!(f, "{}", x),
            MetadataValue::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for MetadataValue {
    fn from(v: bool) -> Self {
        MetadataValue::Bool(v)
    }
}

impl From<i64> for MetadataValue {
    fn from(v: i64) -> Self {
        MetadataValue::Int(v)
    }
}

impl From<i32> for MetadataValue {
    fn from(v: i32) -> Self {
        MetadataValue::Int(v.into())
    }
}

impl From<f64> for MetadataValue {
    fn from(v: f64) -> Self {
        MetadataValue::Float(v)
    }
}

impl From<&str> for MetadataValue {
    fn from(v: &str) -> Self {
        MetadataValue::String(v.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(v: String) -> Self {
        MetadataValue::String(v)
    }
}

/// Which of a node's two metadata mappings is being handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKind {
    /// Controlled metadata (`meta_controlled`)
    Controlled,
    /// User metadata (`meta_user`)
    User,
}

impl MetadataKind {
    /// Lower case label, e.g. "controlled metadata"
    pub fn label(&self) -> &'static str {
        match self {
            MetadataKind::Controlled => "controlled metadata",
            MetadataKind::User => "user metadata",
        }
    }

    /// Capitalized prefix used by node level checks
    pub fn title(&self) -> &'static str {
        match self {
            MetadataKind::Controlled => "Controlled",
            MetadataKind::User => "User",
        }
    }

    /// Wire field name
    pub fn field(&self) -> &'static str {
        match self {
            MetadataKind::Controlled => "meta_controlled",
            MetadataKind::User => "meta_user",
        }
    }
}

/// Check metadata keys and string values against `limits`.
///
/// Keys (outer and inner) may not be empty, overlong, or contain any control
/// character. String values may not be overlong or contain control
/// characters other than tab and newline. Keys are visited in insertion
/// order and the first violation is reported.
pub fn validate_metadata(meta: &Metadata, kind: MetadataKind, limits: &Limits) -> Result<()> {
    let c = kind.title();
    let max_key = limits.max_metadata_key_length;
    for (key, values) in meta {
        if key.is_empty() {
            return Err(Error::illegal_parameter(format!(
                "{} metadata keys may not be empty",
                c
            )));
        }
        if let Some(i) = first_control_char(key, false) {
            return Err(Error::illegal_parameter(format!(
                "{} metadata key {}'s character at index {} is a control character.",
                c, key, i
            )));
        }
        if key.chars().count() > max_key {
            return Err(Error::illegal_parameter(format!(
                "{} metadata has key starting with {} that exceeds maximum length of {}",
                c,
                truncate(key, max_key),
                max_key
            )));
        }
        for (vkey, value) in values {
            if vkey.is_empty() {
                return Err(Error::illegal_parameter(format!(
                    "{} metadata value keys under key {} may not be empty",
                    c, key
                )));
            }
            if let Some(i) = first_control_char(vkey, false) {
                return Err(Error::illegal_parameter(format!(
                    "{} metadata value key {} under key {}'s character at index {} is a control character.",
                    c, vkey, key, i
                )));
            }
            if vkey.chars().count() > max_key {
                return Err(Error::illegal_parameter(format!(
                    "{} metadata has a value key under root key {} starting with {} that exceeds maximum length of {}",
                    c,
                    key,
                    truncate(vkey, max_key),
                    max_key
                )));
            }
            if let MetadataValue::String(s) = value {
                let max_value = limits.max_metadata_value_length;
                if s.chars().count() > max_value {
                    return Err(Error::illegal_parameter(format!(
                        "{} metadata has a value at key {} with value key {} starting with {} that exceeds maximum length of {}",
                        c,
                        key,
                        vkey,
                        truncate(s, max_value),
                        max_value
                    )));
                }
                if let Some(i) = first_control_char(s, true) {
                    return Err(Error::illegal_parameter(format!(
                        "{} metadata value associated with metadata key {} and value key {} has a character at index {} that is a control character.",
                        c, key, vkey, i
                    )));
                }
            }
        }
    }
    Ok(())
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
