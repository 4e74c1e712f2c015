//! Error types for the greeter crate.
//!
//! The core has exactly two failure modes, both local and synchronous:
//!
//! - [`GreetError::InvalidType`] - an argument had the wrong fundamental kind
//!   (the name was not text, the batch input was not a list)
//! - [`GreetError::EmptyValue`] - a required text value was empty or whitespace only
//!
//! Nothing in the core retries or recovers. Tolerant batch processing is the one
//! place where per-entry failures are converted into skips instead of errors.
//!
//! [`AppError`] is the binary's top-level error. It wraps every failure the shell
//! can hit so `main` composes with `?`.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::value::ValueKind;
use thiserror::Error;

/// Validation failure raised by the greeting core.
///
/// `field` names the argument that failed (`"name"`, `"greeting"`, `"names"`,
/// `"default_greeting"`), so callers can report which input was rejected.
///
/// # Examples
///
/// ```
/// use greeter::model::error::GreetError;
///
/// let err = GreetError::EmptyValue { field: "name" };
/// assert_eq!(err.to_string(), "name cannot be empty or whitespace only");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GreetError {
    /// A required argument had the wrong fundamental kind.
    #[error("{field} must be {expected}, got {found}")]
    InvalidType {
        /// Argument that was rejected.
        field: &'static str,
        /// Kind that was required.
        expected: ValueKind,
        /// Kind that was received.
        found: ValueKind,
    },

    /// A required text value was empty after trimming surrounding whitespace.
    #[error("{field} cannot be empty or whitespace only")]
    EmptyValue {
        /// Argument that was rejected.
        field: &'static str,
    },
}

impl GreetError {
    /// Name of the argument that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            GreetError::InvalidType { field, .. } | GreetError::EmptyValue { field } => field,
        }
    }

    /// True for [`GreetError::InvalidType`].
    pub fn is_invalid_type(&self) -> bool {
        matches!(self, GreetError::InvalidType { .. })
    }

    /// True for [`GreetError::EmptyValue`].
    pub fn is_empty_value(&self) -> bool {
        matches!(self, GreetError::EmptyValue { .. })
    }
}

/// Top-level error for the command-line shell.
///
/// Core failures are surfaced unchanged inside [`AppError::Greet`], so the
/// shell never duplicates validation.
#[derive(Debug, Error)]
pub enum AppError {
    /// A greeting operation rejected its input.
    #[error("Greeting failed: {0}")]
    Greet(#[from] GreetError),

    /// The configuration file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    /// JSON output could not be produced.
    #[error("Failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),
}
