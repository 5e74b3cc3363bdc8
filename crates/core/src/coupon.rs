//! Coupon code validation.

use crate::error::CoreError;

/// Maximum accepted coupon code length.
const MAX_CODE_LEN: usize = 64;

/// Validate a coupon code taken from the request path.
///
/// Codes must be non-empty, contain no whitespace, and fit in
/// [`MAX_CODE_LEN`] characters. Uniqueness is enforced separately by the
/// store's unique index.
pub fn validate_code(code: &str) -> Result<(), CoreError> {
    if code.is_empty() {
        return Err(CoreError::Validation("Coupon code must not be empty".into()));
    }
    if code.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation(
            "Coupon code must not contain whitespace".into(),
        ));
    }
    if code.chars().count() > MAX_CODE_LEN {
        return Err(CoreError::Validation(format!(
            "Coupon code must be at most {MAX_CODE_LEN} characters"
        )));
    }
    Ok(())
}
