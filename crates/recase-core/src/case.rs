//! Case formatters: camelCase, dot.case and kebab-case.
//!
//! camelCase and dot.case run the full pipeline (validate, split, format).
//! kebab-case is a plain regex rewrite that accepts any string; the
//! [`to_kebab_case_checked`] variant puts the validator in front of it.

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{ConvertError, ConvertResult};
use crate::tokenize::split_words;
use crate::validate::{validate, validate_value};

/// A lowercase letter or digit directly followed by an uppercase letter.
static HUMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));

/// Runs of whitespace or underscores.
static KEBAB_GAPS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_]+").expect("valid regex"));

/// Target casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Case {
    /// `abraKadabra123`
    #[default]
    #[cfg_attr(feature = "clap", value(alias = "camelCase"))]
    Camel,
    /// `abra.kadabra.123`
    #[cfg_attr(feature = "clap", value(alias = "dot.case"))]
    Dot,
    /// `abra-kadabra-123`
    #[cfg_attr(feature = "clap", value(alias = "kebab-case"))]
    Kebab,
}

impl Case {
    /// All supported cases.
    pub const ALL: [Self; 3] = [Self::Camel, Self::Dot, Self::Kebab];

    /// Short lowercase name of the case.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Camel => "camel",
            Self::Dot => "dot",
            Self::Kebab => "kebab",
        }
    }

    /// Convert `input` into this case.
    ///
    /// `strict_kebab` only affects [`Case::Kebab`]: when set, the input is
    /// validated first as for the other cases.
    ///
    /// # Errors
    ///
    /// Any [`ConvertError`] raised by the selected formatter. Non-strict
    /// kebab-case never fails.
    pub fn convert(self, input: &str, strict_kebab: bool) -> ConvertResult<String> {
        match self {
            Self::Camel => to_camel_case(input),
            Self::Dot => to_dot_case(input),
            Self::Kebab if strict_kebab => to_kebab_case_checked(input),
            Self::Kebab => Ok(to_kebab_case(input)),
        }
    }

    /// Convert an untyped value into this case.
    ///
    /// # Errors
    ///
    /// [`ConvertError::NotAString`] if `value` is not a string, otherwise as
    /// [`Case::convert`].
    pub fn convert_value(self, value: &Value, strict_kebab: bool) -> ConvertResult<String> {
        let input = value.as_str().ok_or(ConvertError::NotAString)?;
        self.convert(input, strict_kebab)
    }
}

impl std::fmt::Display for Case {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown case name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown case: {0}. Use: camel, dot, kebab")]
pub struct UnknownCase(pub String);

impl FromStr for Case {
    type Err = UnknownCase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "camel" | "camelcase" => Ok(Self::Camel),
            "dot" | "dot.case" => Ok(Self::Dot),
            "kebab" | "kebab-case" => Ok(Self::Kebab),
            _ => Err(UnknownCase(s.to_string())),
        }
    }
}

/// Outcome of converting one input, shaped for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Conversion {
    /// The input as given.
    pub input: String,
    /// Target case.
    pub case: Case,
    /// Converted text, when the conversion succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Error message, when it failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Machine-readable error kind, when it failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
}

impl Conversion {
    /// Build a report from a conversion result.
    pub fn new(input: impl Into<String>, case: Case, result: ConvertResult<String>) -> Self {
        let (output, error, error_kind) = match result {
            Ok(out) => (Some(out), None, None),
            Err(e) => (None, Some(e.to_string()), Some(e.kind().to_string())),
        };
        Self {
            input: input.into(),
            case,
            output,
            error,
            error_kind,
        }
    }

    /// Whether the conversion succeeded.
    pub const fn is_ok(&self) -> bool {
        self.output.is_some()
    }
}

/// Convert `input` to camelCase.
///
/// The first word is lowercased entirely; every later word gets an uppercase
/// first character and a lowercase remainder.
///
/// ```
/// use recase_core::to_camel_case;
///
/// assert_eq!(to_camel_case("abra kadabra_123").unwrap(), "abraKadabra123");
/// ```
///
/// # Errors
///
/// See [`ConvertError`]; everything except `NotAString` can occur here.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn to_camel_case(input: &str) -> ConvertResult<String> {
    let words = split_words(validate(input)?)?;
    Ok(camel_from_words(&words))
}

/// Convert an untyped value to camelCase.
///
/// # Errors
///
/// [`ConvertError::NotAString`] for non-string values, otherwise as
/// [`to_camel_case`].
pub fn to_camel_case_value(value: &Value) -> ConvertResult<String> {
    let words = split_words(validate_value(value)?)?;
    Ok(camel_from_words(&words))
}

/// Convert `input` to dot.case: every word lowercased, joined with `.`.
///
/// ```
/// use recase_core::to_dot_case;
///
/// assert_eq!(to_dot_case("abra kadabra_123").unwrap(), "abra.kadabra.123");
/// ```
///
/// # Errors
///
/// See [`ConvertError`]; everything except `NotAString` can occur here.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn to_dot_case(input: &str) -> ConvertResult<String> {
    let words = split_words(validate(input)?)?;
    Ok(join_lowercase(&words, "."))
}

/// Convert an untyped value to dot.case.
///
/// # Errors
///
/// [`ConvertError::NotAString`] for non-string values, otherwise as
/// [`to_dot_case`].
pub fn to_dot_case_value(value: &Value) -> ConvertResult<String> {
    let words = split_words(validate_value(value)?)?;
    Ok(join_lowercase(&words, "."))
}

/// Convert `input` to kebab-case without any validation.
///
/// A hyphen goes between a lowercase letter or digit and a following
/// uppercase letter, runs of whitespace or underscores become one hyphen, and
/// the result is lowercased. Input is not trimmed, so surrounding whitespace
/// turns into leading or trailing hyphens.
///
/// ```
/// use recase_core::to_kebab_case;
///
/// assert_eq!(to_kebab_case("myVariableName"), "my-variable-name");
/// assert_eq!(to_kebab_case("Hello World_Test"), "hello-world-test");
/// ```
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn to_kebab_case(input: &str) -> String {
    let split = HUMP.replace_all(input, "${1}-${2}");
    KEBAB_GAPS.replace_all(&split, "-").to_lowercase()
}

/// Validate `input`, then convert the trimmed text to kebab-case.
///
/// # Errors
///
/// [`ConvertError::EmptyInput`] or [`ConvertError::InvalidCharacters`].
pub fn to_kebab_case_checked(input: &str) -> ConvertResult<String> {
    validate(input).map(to_kebab_case)
}

/// Validate an untyped value, then convert it to kebab-case.
///
/// # Errors
///
/// [`ConvertError::NotAString`], [`ConvertError::EmptyInput`] or
/// [`ConvertError::InvalidCharacters`].
pub fn to_kebab_case_value(value: &Value) -> ConvertResult<String> {
    validate_value(value).map(to_kebab_case)
}

fn camel_from_words(words: &[&str]) -> String {
    let mut out = String::with_capacity(words.iter().map(|w| w.len()).sum());
    for (idx, word) in words.iter().enumerate() {
        if idx == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

fn join_lowercase(words: &[&str], sep: &str) -> String {
    words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}
