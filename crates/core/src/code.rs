//! Entity code validation.
//!
//! A `code` is the stable, externally-visible identifier of an entity. It
//! doubles as a file name in the local project layout, so the accepted
//! alphabet is deliberately narrow.

use crate::error::CoreError;

/// Maximum accepted code length.
pub const MAX_CODE_LEN: usize = 64;

/// Check whether `code` is a well-formed entity code.
///
/// Accepted: 1..=64 ASCII alphanumerics, `-` or `_`, not starting with a
/// separator.
pub fn is_valid_code(code: &str) -> bool {
    if code.is_empty() || code.len() > MAX_CODE_LEN {
        return false;
    }
    let mut chars = code.chars();
    let first = chars.next().unwrap_or('-');
    if !first.is_ascii_alphanumeric() {
        return false;
    }
    code.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Validate `code`, returning a [`CoreError::Validation`] on rejection.
pub fn validate_code(code: &str) -> Result<(), CoreError> {
    if is_valid_code(code) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "invalid entity code {code:?}"
        )))
    }
}
