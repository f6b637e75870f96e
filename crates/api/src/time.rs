//! Epoch millisecond conversions.
//!
//! The wire format carries timestamps as signed milliseconds since the Unix
//! epoch. Converting to milliseconds rounds to the nearest millisecond, with
//! ties going to the even millisecond.

use crate::wire;
use chrono::{DateTime, TimeZone, Utc};
use samples_core::{Error, FieldPath, Result};
use serde_json::Value;

const NANOS_PER_SEC: i128 = 1_000_000_000;
const NANOS_PER_MILLI: i128 = 1_000_000;

/// Convert a timestamp to milliseconds since the epoch.
pub fn datetime_to_epochmilliseconds<Tz: TimeZone>(d: &DateTime<Tz>) -> i64 {
    let nanos =
        i128::from(d.timestamp()) * NANOS_PER_SEC + i128::from(d.timestamp_subsec_nanos());
    let millis = nanos.div_euclid(NANOS_PER_MILLI);
    let rem = nanos.rem_euclid(NANOS_PER_MILLI);
    let half = NANOS_PER_MILLI / 2;
    let rounded = if rem > half || (rem == half && millis % 2 != 0) {
        millis + 1
    } else {
        millis
    };
    // chrono's representable range is far inside i64 milliseconds
    rounded as i64
}

/// Convert milliseconds since the epoch to a UTC timestamp.
pub fn epochmilliseconds_to_datetime(millis: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single().ok_or_else(|| {
        Error::illegal_parameter(format!(
            "{} is not a valid epoch time in milliseconds",
            millis
        ))
    })
}

/// Read an optional epoch millisecond timestamp from `params[key]`.
///
/// An absent or null field is `None`.
pub fn get_datetime_from_epochmilliseconds_in_object(
    params: Option<&Value>,
    key: &str,
) -> Result<Option<DateTime<Utc>>> {
    let params = wire::require_params(params, "params")?;
    let Some(raw) = wire::field(params, key) else {
        return Ok(None);
    };
    raw.as_i64()
        .and_then(|ms| epochmilliseconds_to_datetime(ms).ok())
        .map(Some)
        .ok_or_else(|| {
            Error::illegal_parameter_at(
                format!("key {} must be an integer epoch time in milliseconds", key),
                FieldPath::root().key(key),
            )
        })
}
