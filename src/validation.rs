use crate::error::{BookError, BookResult};

pub const PHONE_DIGITS: usize = 10;

/// Validates that a string is exactly ten ASCII decimal digits.
/// Returns the string unchanged on success; no trimming is applied.
pub fn phone_digits(value: &str) -> BookResult<String> {
    if value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(BookError::InvalidPhone {
            value: value.to_string(),
        })
    }
}
