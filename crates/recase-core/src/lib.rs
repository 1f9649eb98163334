//! Core library for recase.
//!
//! Validated string case conversion. Input is trimmed, checked against the
//! alphabet `[A-Za-z0-9 _-]`, split into words on whitespace, hyphens and
//! underscores, then rendered as camelCase or dot.case. kebab-case is a
//! lighter regex rewrite that accepts any string unless the checked variant
//! is used.
//!
//! # Modules
//!
//! - [`case`] - Formatters and the [`Case`] selector
//! - [`validate`] - Input validation
//! - [`tokenize`] - Word splitting
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use recase_core::{ConvertError, to_camel_case, to_dot_case, to_kebab_case};
//!
//! assert_eq!(to_camel_case("abra-kadabra").unwrap(), "abraKadabra");
//! assert_eq!(to_dot_case("abra kadabra_123").unwrap(), "abra.kadabra.123");
//! assert_eq!(to_kebab_case("myVariableName"), "my-variable-name");
//! assert_eq!(to_camel_case("123 456"), Err(ConvertError::NumericOnly));
//! ```
#![deny(unsafe_code)]

pub mod case;
pub mod config;
pub mod error;
pub mod tokenize;
pub mod validate;

pub use case::{
    Case, Conversion, UnknownCase, to_camel_case, to_camel_case_value, to_dot_case,
    to_dot_case_value, to_kebab_case, to_kebab_case_checked, to_kebab_case_value,
};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{ConfigError, ConfigResult, ConvertError, ConvertResult};
