//! Utility macros and functions for the HTTP crate.
//!
//! This module provides helper macros and functions that are used internally
//! by the HTTP crate implementation.

/// A macro for early returns with an error if a condition is not met.
///
/// This is similar to the `assert!` macro, but returns an error instead of panicking.
/// It's useful for validation checks where you want to return early with an error
/// if some condition is not satisfied.
///
/// # Arguments
///
/// * `$predicate` - A boolean expression that should evaluate to true
/// * `$error` - The error value to return if the predicate is false
///
/// # Example
///
/// ```ignore
/// ensure!(path.starts_with('/'), ParseError::MalformedPath(path.to_string()));
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;

/// Maps each byte of the request head to one `char` (U+0000 to U+00FF).
#[inline]
pub(crate) fn decode_single_byte(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Inverse of [`decode_single_byte`]; `None` if any char is above U+00FF.
pub(crate) fn encode_single_byte(text: &str) -> Option<Vec<u8>> {
    text.chars().map(|c| u8::try_from(c).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte_round_trip() {
        let bytes = b"caf\xc3\xa9 \x00\xff";
        assert_eq!(encode_single_byte(&decode_single_byte(bytes)), Some(bytes.to_vec()));
    }

    #[test]
    fn wide_chars_have_no_single_byte_form() {
        assert_eq!(encode_single_byte("\u{20ac}"), None);
    }
}
