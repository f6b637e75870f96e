//! Core types for the sample service
//!
//! This crate defines the domain model shared by the translation layer:
//! - Sample, SampleNode, SubSampleType, SavedSample: sample trees
//! - SampleAcl, SampleAclOwnerless: access control lists
//! - Metadata, MetadataValues, MetadataValue: node metadata
//! - Error: the service error taxonomy
//! - FieldPath: locations inside wire requests
//! - Limits: construction limits and their configuration

pub mod acls;
pub mod error;
pub mod limits;
pub mod metadata;
pub mod path;
pub mod sample;
pub mod strings;

pub use acls::{AclRole, SampleAcl, SampleAclOwnerless};
pub use error::{Error, ErrorType, Result};
pub use limits::{Limits, LimitsError};
pub use metadata::{Metadata, MetadataKind, MetadataValue, MetadataValues};
pub use path::{FieldPath, PathSegment};
pub use sample::{Sample, SampleNode, SavedSample, SubSampleType, UnknownSampleType};
