//! Samples and their node trees.
//!
//! A sample is an ordered list of nodes forming a tree. Nodes reference their
//! parent by id and a parent must appear before its children, so the tree is
//! built in a single pass with no forward references and no cycles.
//!
//! All types here are immutable once constructed; constructors enforce the
//! invariants and the configured [`Limits`].

use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::metadata::{validate_metadata, Metadata, MetadataKind};
use crate::strings::{check_optional_string, check_string};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Error returned when a node type tag is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sample type: {raw}")]
pub struct UnknownSampleType {
    /// The tag as supplied
    pub raw: String,
}

/// Type of a node in a sample tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubSampleType {
    /// Biological replicate; the root type
    #[serde(rename = "BioReplicate")]
    BiologicalReplicate,
    /// Technical replicate
    #[serde(rename = "TechReplicate")]
    TechnicalReplicate,
    /// Sub sample
    #[serde(rename = "SubSample")]
    SubSample,
}

impl SubSampleType {
    /// All node types
    pub const ALL: [SubSampleType; 3] = [
        SubSampleType::BiologicalReplicate,
        SubSampleType::TechnicalReplicate,
        SubSampleType::SubSample,
    ];

    /// Wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            SubSampleType::BiologicalReplicate => "BioReplicate",
            SubSampleType::TechnicalReplicate => "TechReplicate",
            SubSampleType::SubSample => "SubSample",
        }
    }

    /// Root nodes have no parent; every other type requires one.
    pub fn is_root(&self) -> bool {
        matches!(self, SubSampleType::BiologicalReplicate)
    }
}

impl FromStr for SubSampleType {
    type Err = UnknownSampleType;

    /// Exact, case sensitive match on the wire tag
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "BioReplicate" => Ok(SubSampleType::BiologicalReplicate),
            "TechReplicate" => Ok(SubSampleType::TechnicalReplicate),
            "SubSample" => Ok(SubSampleType::SubSample),
            _ => Err(UnknownSampleType { raw: s.to_string() }),
        }
    }
}

impl fmt::Display for SubSampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in a sample tree
#[derive(Debug, Clone, PartialEq)]
pub struct SampleNode {
    id: String,
    node_type: SubSampleType,
    parent: Option<String>,
    controlled_metadata: Metadata,
    user_metadata: Metadata,
}

impl SampleNode {
    /// Create a node using the default [`Limits`].
    pub fn new(
        id: &str,
        node_type: SubSampleType,
        parent: Option<&str>,
        controlled_metadata: Metadata,
        user_metadata: Metadata,
    ) -> Result<Self> {
        Self::with_limits(
            id,
            node_type,
            parent,
            controlled_metadata,
            user_metadata,
            &Limits::default(),
        )
    }

    /// Create a root node with no metadata.
    pub fn root(id: &str) -> Result<Self> {
        Self::new(
            id,
            SubSampleType::BiologicalReplicate,
            None,
            Metadata::new(),
            Metadata::new(),
        )
    }

    /// Create a node.
    ///
    /// The id and parent are trimmed; an empty parent counts as no parent.
    /// Root nodes may not have a parent and all other nodes must have one.
    pub fn with_limits(
        id: &str,
        node_type: SubSampleType,
        parent: Option<&str>,
        controlled_metadata: Metadata,
        user_metadata: Metadata,
        limits: &Limits,
    ) -> Result<Self> {
        let id = check_string(id, "subsample_id", Some(limits.max_node_id_length))?;
        let parent = check_optional_string(parent, "parent id", Some(limits.max_node_id_length))?;
        let is_root = node_type.is_root();
        if is_root == parent.is_some() {
            return Err(Error::illegal_parameter(format!(
                "Node {} is of type {} and therefore {} have a parent",
                id,
                node_type,
                if is_root { "cannot" } else { "must" }
            )));
        }
        validate_metadata(&controlled_metadata, MetadataKind::Controlled, limits)?;
        validate_metadata(&user_metadata, MetadataKind::User, limits)?;
        Ok(SampleNode {
            id,
            node_type,
            parent,
            controlled_metadata,
            user_metadata,
        })
    }

    /// Node id, unique within its sample
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Node type
    pub fn node_type(&self) -> SubSampleType {
        self.node_type
    }

    /// Parent node id; `None` only for root nodes
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Controlled metadata, in insertion order
    pub fn controlled_metadata(&self) -> &Metadata {
        &self.controlled_metadata
    }

    /// User supplied metadata, in insertion order
    pub fn user_metadata(&self) -> &Metadata {
        &self.user_metadata
    }
}

/// A sample: an ordered node tree and an optional name
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    nodes: Vec<SampleNode>,
    name: Option<String>,
}

impl Sample {
    /// Create a sample using the default [`Limits`].
    pub fn new(nodes: Vec<SampleNode>, name: Option<&str>) -> Result<Self> {
        Self::with_limits(nodes, name, &Limits::default())
    }

    /// Create a sample.
    ///
    /// Requires at least one node, unique node ids, and every parent to appear
    /// earlier in `nodes` than its children.
    pub fn with_limits(nodes: Vec<SampleNode>, name: Option<&str>, limits: &Limits) -> Result<Self> {
        let name = check_optional_string(name, "name", Some(limits.max_name_length))?;
        if nodes.is_empty() {
            return Err(Error::illegal_parameter(
                "At least one node per sample is required",
            ));
        }
        if nodes.len() > limits.max_nodes {
            return Err(Error::illegal_parameter(format!(
                "At most {} nodes are allowed per sample",
                limits.max_nodes
            )));
        }
        let mut seen: HashSet<&str> = HashSet::with_capacity(nodes.len());
        for node in &nodes {
            if let Some(parent) = node.parent() {
                if !seen.contains(parent) {
                    return Err(Error::illegal_parameter(format!(
                        "Parent {} of node {} does not appear in node list prior to node.",
                        parent,
                        node.id()
                    )));
                }
            }
            if !seen.insert(node.id()) {
                return Err(Error::illegal_parameter(format!(
                    "Duplicate node id: {}",
                    node.id()
                )));
            }
        }
        Ok(Sample { nodes, name })
    }

    /// Nodes in tree order
    pub fn nodes(&self) -> &[SampleNode] {
        &self.nodes
    }

    /// Sample name, if one was given
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&SampleNode> {
        self.nodes.iter().find(|n| n.id() == id)
    }
}

/// A sample as stored: id, owner, save time, and version
#[derive(Debug, Clone, PartialEq)]
pub struct SavedSample {
    id: Uuid,
    user: String,
    sample: Sample,
    save_date: DateTime<Utc>,
    version: Option<u64>,
}

impl SavedSample {
    /// Create a saved sample.
    ///
    /// `user` must be non-empty and `version`, when given, greater than zero.
    pub fn new(
        id: Uuid,
        user: &str,
        sample: Sample,
        save_date: DateTime<Utc>,
        version: Option<u64>,
    ) -> Result<Self> {
        let user = check_string(user, "user", None)?;
        if version == Some(0) {
            return Err(Error::illegal_parameter("version must be > 0"));
        }
        Ok(SavedSample {
            id,
            user,
            sample,
            save_date,
            version,
        })
    }

    /// Sample id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Owning user
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The saved sample content
    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    /// Nodes in tree order
    pub fn nodes(&self) -> &[SampleNode] {
        self.sample.nodes()
    }

    /// Sample name, if one was given
    pub fn name(&self) -> Option<&str> {
        self.sample.name()
    }

    /// When this version was saved
    pub fn save_date(&self) -> DateTime<Utc> {
        self.save_date
    }

    /// Version number; `None` before the store assigns one
    pub fn version(&self) -> Option<u64> {
        self.version
    }
}
