//! Wire request translation for the sample service
//!
//! Converts untyped request structures into domain objects and domain objects
//! back into wire structures:
//! - ids: sample id, version, and address extraction
//! - sample_params: sample creation requests
//! - serialize: saved sample encoding
//! - acls: ACL encoding and decoding
//! - time: epoch millisecond timestamps
//! - admin: administration permission checks
//! - keys: static metadata key queries
//!
//! Every function is pure apart from [`check_admin`], which consults a
//! [`UserLookup`] and a caller supplied log sink. Decoding is fail fast: the
//! first violation found is returned, with its field location attached when
//! it is an illegal parameter.

pub mod acls;
pub mod admin;
pub mod ids;
pub mod keys;
mod metadata;
pub mod sample_params;
pub mod serialize;
pub mod time;
pub mod wire;

pub use acls::{acls_from_dict, acls_to_dict};
pub use admin::check_admin;
pub use ids::{get_id_from_object, get_sample_address_from_object, get_version_from_object};
pub use keys::{get_static_key_metadata_params, PrefixMode};
pub use sample_params::{create_sample_params, create_sample_params_with_limits};
pub use serialize::sample_to_dict;
pub use time::{
    datetime_to_epochmilliseconds, epochmilliseconds_to_datetime,
    get_datetime_from_epochmilliseconds_in_object,
};

pub use samples_security::{AdminPermission, UserLookup};
