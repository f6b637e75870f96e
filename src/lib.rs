//! Sample service request translation
//!
//! Facade over the workspace crates:
//! - `samples-core`: domain types, errors, limits
//! - `samples-security`: administration permissions
//! - `samples-api`: wire request translation

pub mod types;

pub use samples_api::{
    acls_from_dict, acls_to_dict, check_admin, create_sample_params,
    create_sample_params_with_limits, datetime_to_epochmilliseconds,
    epochmilliseconds_to_datetime, get_datetime_from_epochmilliseconds_in_object,
    get_id_from_object, get_sample_address_from_object, get_static_key_metadata_params,
    get_version_from_object, sample_to_dict,
};
pub use types::*;
