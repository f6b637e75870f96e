//! Size limits applied when samples are constructed.
//!
//! Limits have compiled-in defaults and can be overridden from the `[limits]`
//! table of a TOML configuration file:
//!
//! ```toml
//! [limits]
//! max_nodes = 500
//! max_metadata_value_length = 2048
//! ```
//!
//! Unset keys keep their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading limits
#[derive(Debug, Error)]
pub enum LimitsError {
    /// The configuration is not valid TOML or has wrongly typed keys
    #[error("invalid limits configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A limit was set to zero
    #[error("limit {field} must be greater than zero")]
    Zero {
        /// Name of the offending key
        field: &'static str,
    },
}

/// Construction limits for samples and their nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum number of nodes in a sample
    pub max_nodes: usize,
    /// Maximum length of a sample name, in characters
    pub max_name_length: usize,
    /// Maximum length of a node id, in characters
    pub max_node_id_length: usize,
    /// Maximum length of a metadata key or value key, in characters
    pub max_metadata_key_length: usize,
    /// Maximum length of a string metadata value, in characters
    pub max_metadata_value_length: usize,
}

impl Limits {
    /// Default maximum node count
    pub const DEFAULT_MAX_NODES: usize = 10_000;
    /// Default maximum sample name length
    pub const DEFAULT_MAX_NAME_LENGTH: usize = 256;
    /// Default maximum node id length
    pub const DEFAULT_MAX_NODE_ID_LENGTH: usize = 256;
    /// Default maximum metadata key length
    pub const DEFAULT_MAX_METADATA_KEY_LENGTH: usize = 256;
    /// Default maximum metadata string value length
    pub const DEFAULT_MAX_METADATA_VALUE_LENGTH: usize = 1024;

    /// Load limits from the `[limits]` table of a TOML document.
    ///
    /// A document without the table yields the defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, LimitsError> {
        #[derive(Deserialize)]
        struct ConfigFile {
            #[serde(default)]
            limits: Limits,
        }

        let file: ConfigFile = toml::from_str(s)?;
        file.limits.validate()?;
        Ok(file.limits)
    }

    /// Reject zero limits
    pub fn validate(&self) -> Result<(), LimitsError> {
        let fields = [
            ("max_nodes", self.max_nodes),
            ("max_name_length", self.max_name_length),
            ("max_node_id_length", self.max_node_id_length),
            ("max_metadata_key_length", self.max_metadata_key_length),
            ("max_metadata_value_length", self.max_metadata_value_length),
        ];
        for (field, value) in fields {
            if value == 0 {
                return Err(LimitsError::Zero { field });
            }
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_nodes: Self::DEFAULT_MAX_NODES,
            max_name_length: Self::DEFAULT_MAX_NAME_LENGTH,
            max_node_id_length: Self::DEFAULT_MAX_NODE_ID_LENGTH,
            max_metadata_key_length: Self::DEFAULT_MAX_METADATA_KEY_LENGTH,
            max_metadata_value_length: Self::DEFAULT_MAX_METADATA_VALUE_LENGTH,
        }
    }
}
