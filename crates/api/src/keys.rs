//! Static metadata key query parameters.

use crate::wire;
use samples_core::{Error, FieldPath, Result};
use serde_json::Value;

/// How requested keys are matched against stored metadata keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrefixMode {
    /// Keys match exactly
    #[default]
    Exact,
    /// Keys are prefixes of stored keys
    Prefix,
    /// Stored keys are prefixes of the requested keys
    BasePrefix,
}

impl PrefixMode {
    /// The tri-state flag used by the metadata key store: `Some(false)` for
    /// exact, `None` for prefix, `Some(true)` for base prefix.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            PrefixMode::Exact => Some(false),
            PrefixMode::Prefix => None,
            PrefixMode::BasePrefix => Some(true),
        }
    }

    /// Any falsy value (absent, `false`, zero, empty string or collection)
    /// selects [`PrefixMode::Exact`]. Otherwise only the integers 1 and 2 are
    /// accepted.
    fn from_value(value: Option<&Value>) -> Option<Self> {
        match value {
            None | Some(Value::Bool(false)) => Some(PrefixMode::Exact),
            Some(Value::String(s)) if s.is_empty() => Some(PrefixMode::Exact),
            Some(Value::Array(a)) if a.is_empty() => Some(PrefixMode::Exact),
            Some(Value::Object(o)) if o.is_empty() => Some(PrefixMode::Exact),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(0) => Some(PrefixMode::Exact),
                Some(1) => Some(PrefixMode::Prefix),
                Some(2) => Some(PrefixMode::BasePrefix),
                Some(_) => None,
                None => (n.as_f64() == Some(0.0)).then_some(PrefixMode::Exact),
            },
            _ => None,
        }
    }
}

/// Decode the keys and prefix mode of a static metadata key query.
pub fn get_static_key_metadata_params(params: Option<&Value>) -> Result<(Vec<String>, PrefixMode)> {
    let params = wire::require_params(params, "params")?;
    let keys_path = FieldPath::root().key("keys");
    let keys = match wire::field(params, "keys") {
        Some(Value::Array(keys)) => keys,
        _ => return Err(Error::illegal_parameter_at("keys must be a list", keys_path)),
    };
    let keys = keys
        .iter()
        .enumerate()
        .map(|(i, k)| {
            k.as_str().map(str::to_string).ok_or_else(|| {
                Error::illegal_parameter_at(
                    format!("index {} of keys is not a string", i),
                    keys_path.clone().index(i),
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let raw = wire::field(params, "prefix");
    let prefix = PrefixMode::from_value(raw).ok_or_else(|| {
        Error::illegal_parameter_at(
            format!("Unexpected value for prefix: {}", wire::render(raw)),
            FieldPath::root().key("prefix"),
        )
    })?;
    Ok((keys, prefix))
}
