//! Input validation shared by the camelCase, dot.case and strict kebab-case
//! formatters.
//!
//! A valid input, once trimmed, is non-empty and made only of ASCII letters,
//! ASCII digits, spaces, hyphens and underscores.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::error::{ConvertError, ConvertResult};

/// Characters accepted after trimming: letters, digits, space, `_`, `-`.
static ALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9 _-]+$").expect("valid regex"));

/// Trim `input` and check it against the accepted alphabet.
///
/// Returns the trimmed slice on success.
///
/// # Errors
///
/// * [`ConvertError::EmptyInput`] if nothing is left after trimming.
/// * [`ConvertError::InvalidCharacters`] if the trimmed text contains anything
///   other than letters, digits, spaces, `-` or `_`. Tabs and newlines inside
///   the text count as invalid.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn validate(input: &str) -> ConvertResult<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        tracing::debug!("input empty after trim");
        return Err(ConvertError::EmptyInput);
    }
    if !ALLOWED.is_match(trimmed) {
        tracing::debug!("input contains characters outside the accepted set");
        return Err(ConvertError::InvalidCharacters);
    }
    Ok(trimmed)
}

/// Validate an untyped value, rejecting anything that is not a JSON string.
///
/// # Errors
///
/// [`ConvertError::NotAString`] for numbers, booleans, null, arrays and
/// objects; otherwise the same errors as [`validate`].
pub fn validate_value(value: &Value) -> ConvertResult<&str> {
    value
        .as_str()
        .ok_or(ConvertError::NotAString)
        .and_then(validate)
}
