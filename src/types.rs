//! Public types for the sample service.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Public API types - these are what users should use
// ============================================================================

// Errors
pub use samples_core::{Error, ErrorType, Result};

// Field locations attached to illegal parameter errors
pub use samples_core::{FieldPath, PathSegment};

// Samples and their nodes
pub use samples_core::{Sample, SampleNode, SavedSample, SubSampleType, UnknownSampleType};

// Metadata
pub use samples_core::{Metadata, MetadataKind, MetadataValue, MetadataValues};

// ACLs
pub use samples_core::{AclRole, SampleAcl, SampleAclOwnerless};

// Construction limits and their configuration
pub use samples_core::{Limits, LimitsError};

// Administration permissions
pub use samples_security::{AdminPermission, UserLookup};

// Static metadata key matching
pub use samples_api::PrefixMode;
