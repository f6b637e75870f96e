//! String argument checks shared by the domain constructors.

use crate::error::{Error, Result};

/// Character index (not byte index) of the first control character in `s`.
///
/// With `allow_tab_newline`, `\t` and `\n` are not reported.
pub fn first_control_char(s: &str, allow_tab_newline: bool) -> Option<usize> {
    s.chars()
        .position(|c| c.is_control() && !(allow_tab_newline && (c == '\t' || c == '\n')))
}

/// Check a required string argument and return it trimmed.
///
/// - empty or whitespace only: `MissingParameter(name)`
/// - longer than `max_len` characters: `IllegalParameter`
/// - contains control characters: `IllegalParameter`
pub fn check_string(s: &str, name: &str, max_len: Option<usize>) -> Result<String> {
    match check_optional_string(Some(s), name, max_len)? {
        Some(s) => Ok(s),
        None => Err(Error::missing_parameter(name)),
    }
}

/// Like [`check_string`], but empty input maps to `None`.
pub fn check_optional_string(
    s: Option<&str>,
    name: &str,
    max_len: Option<usize>,
) -> Result<Option<String>> {
    let s = match s.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(s) => s,
    };
    if let Some(max) = max_len {
        if s.chars().count() > max {
            return Err(Error::illegal_parameter(format!(
                "{} exceeds maximum length of {}",
                name, max
            )));
        }
    }
    if first_control_char(s, false).is_some() {
        return Err(Error::illegal_parameter(format!(
            "{} contains control characters",
            name
        )));
    }
    Ok(Some(s.to_string()))
}
