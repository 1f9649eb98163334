//! Error types for recase-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reasons an input cannot be converted.
///
/// The messages are the historical user-facing texts; [`ConvertError::sentinel`]
/// adds the `Error: ` prefix older callers compare against.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// The input value was not a string.
    #[error("Input must be a string.")]
    NotAString,

    /// The input was empty after trimming surrounding whitespace.
    #[error("Input string is empty.")]
    EmptyInput,

    /// The input contains a character outside `[A-Za-z0-9 _-]`.
    #[error(
        "Input contains invalid characters. Only letters, numbers, spaces, \"-\", and \"_\" are allowed."
    )]
    InvalidCharacters,

    /// Every word in the input is made of digits only.
    #[error("Input cannot be only numbers.")]
    NumericOnly,

    /// Splitting the input produced no words at all.
    #[error("Input does not contain any valid words.")]
    NoValidWords,
}

impl ConvertError {
    /// Stable machine-readable name for this error.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotAString => "not-a-string",
            Self::EmptyInput => "empty-input",
            Self::InvalidCharacters => "invalid-characters",
            Self::NumericOnly => "numeric-only",
            Self::NoValidWords => "no-valid-words",
        }
    }

    /// Render the error as the legacy sentinel string, e.g.
    /// `"Error: Input must be a string."`.
    pub fn sentinel(&self) -> String {
        format!("Error: {self}")
    }
}

/// Result type alias using [`ConvertError`].
pub type ConvertResult<T> = Result<T, ConvertError>;
