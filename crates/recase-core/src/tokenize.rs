//! Word splitting for validated input.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ConvertError, ConvertResult};

/// One or more whitespace, underscore or hyphen characters.
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("valid regex"));

/// A word made of digits only.
static NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").expect("valid regex"));

/// Split validated text into words on runs of whitespace, `-` and `_`.
///
/// Leading and trailing separators never produce empty words.
///
/// # Errors
///
/// * [`ConvertError::NoValidWords`] if the text is made of separators only.
/// * [`ConvertError::NumericOnly`] if every word is all digits.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn split_words(text: &str) -> ConvertResult<Vec<&str>> {
    let words: Vec<&str> = SEPARATORS
        .split(text)
        .filter(|word| !word.is_empty())
        .collect();

    // Checked before the numeric rule: `all` is vacuously true on no words.
    if words.is_empty() {
        return Err(ConvertError::NoValidWords);
    }
    if words.iter().all(|word| NUMERIC.is_match(word)) {
        return Err(ConvertError::NumericOnly);
    }

    tracing::debug!(word_count = words.len(), "split input into words");
    Ok(words)
}
