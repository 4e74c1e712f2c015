//! Batch greeting with two failure policies.
//!
//! - **Strict** ([`greet_multiple`], [`greet_multiple_values`]): all-or-nothing.
//!   The first invalid entry aborts the batch with the validator's error and no
//!   partial output.
//! - **Tolerant** ([`greet_multiple_safe`], [`greet_multiple_safe_values`]):
//!   best-effort. Invalid entries are dropped, each one recorded as a
//!   [`SkippedEntry`] in the returned [`BatchOutcome`] and logged at `warn`.
//!   Only structurally wrong input (not a list, non-text greeting) is an error.
//!
//! Both policies process entries in input order and preserve that order in
//! the output.

use crate::format::greet;
use crate::model::{GreetError, GreetingResult, ValueKind};
use crate::validate::{expect_list, expect_text};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::{info, warn};

/// Why a tolerant batch dropped an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// The entry was absent (`None` / `null`).
    Absent,
    /// The entry was present but not text.
    InvalidType {
        /// Kind that was received instead of text.
        found: ValueKind,
    },
    /// The entry was empty or whitespace only.
    Empty,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Absent => f.write_str("absent"),
            SkipReason::InvalidType { found } => write!(f, "not text ({found})"),
            SkipReason::Empty => f.write_str("empty or whitespace only"),
        }
    }
}

/// Diagnostic for one entry dropped by a tolerant batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    /// Zero-based position of the entry in the input.
    pub index: usize,
    /// Why the entry was dropped.
    #[serde(flatten)]
    pub reason: SkipReason,
}

/// Result of a tolerant batch: the surviving greetings plus one diagnostic
/// per dropped entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    /// Greetings for the valid entries, in input order.
    pub greetings: Vec<GreetingResult>,
    /// One diagnostic per dropped entry, in input order.
    pub skipped: Vec<SkippedEntry>,
}

impl BatchOutcome {
    /// Rendered greetings, in input order.
    pub fn messages(&self) -> Vec<&str> {
        self.greetings.iter().map(GreetingResult::as_str).collect()
    }

    pub(crate) fn skip(&mut self, index: usize, reason: SkipReason) {
        warn!(index, %reason, "Skipping invalid name");
        self.skipped.push(SkippedEntry { index, reason });
    }

    pub(crate) fn finish(self) -> Self {
        info!(
            produced = self.greetings.len(),
            skipped = self.skipped.len(),
            "Tolerant batch complete"
        );
        self
    }
}

/// Greet every name, failing on the first invalid one.
///
/// An empty input yields an empty output.
///
/// # Errors
///
/// The first [`GreetError`] raised by validation; no partial result is returned.
///
/// # Examples
///
/// ```
/// use greeter::greet_multiple;
///
/// let greetings = greet_multiple(["Alice", "Bob"], "Hello").unwrap();
/// assert_eq!(greetings, ["Hello, Alice!", "Hello, Bob!"]);
/// assert!(greet_multiple(["Alice", "", "Bob"], "Hello").is_err());
/// ```
pub fn greet_multiple<I, S>(names: I, greeting: &str) -> Result<Vec<GreetingResult>, GreetError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: Vec<S> = names.into_iter().collect();
    info!(count = names.len(), "Generating greetings");
    names
        .iter()
        .map(|name| greet(name.as_ref(), greeting))
        .collect()
}

/// Strict batch over dynamic input.
///
/// # Errors
///
/// - [`GreetError::InvalidType`] if `names` is not a list or `greeting` is not text
/// - the first per-entry [`GreetError`], with no partial result
pub fn greet_multiple_values(
    names: &Value,
    greeting: &Value,
) -> Result<Vec<GreetingResult>, GreetError> {
    let entries = expect_list("names", names)?;
    let greeting = expect_text("greeting", greeting)?;
    info!(count = entries.len(), "Generating greetings");
    entries
        .iter()
        .map(|entry| greet(expect_text("name", entry)?, greeting))
        .collect()
}

/// Greet every present, non-blank name; skip the rest.
///
/// Never fails: absent and blank entries are recorded in
/// [`BatchOutcome::skipped`] instead.
///
/// # Examples
///
/// ```
/// use greeter::greet_multiple_safe;
///
/// let outcome = greet_multiple_safe(
///     [Some("Alice"), Some(""), Some("Bob"), None, Some("Charlie")],
///     "Hello",
/// );
/// assert_eq!(
///     outcome.messages(),
///     ["Hello, Alice!", "Hello, Bob!", "Hello, Charlie!"]
/// );
/// assert_eq!(outcome.skipped.len(), 2);
/// ```
pub fn greet_multiple_safe<I, S>(names: I, greeting: &str) -> BatchOutcome
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut outcome = BatchOutcome::default();
    for (index, name) in names.into_iter().enumerate() {
        match name {
            None => outcome.skip(index, SkipReason::Absent),
            Some(name) => match greet(name.as_ref(), greeting) {
                Ok(result) => outcome.greetings.push(result),
                Err(err) => outcome.skip(index, SkipReason::from(&err)),
            },
        }
    }
    outcome.finish()
}

/// Tolerant batch over dynamic input.
///
/// # Errors
///
/// [`GreetError::InvalidType`] only if `names` is not a list or `greeting` is
/// not text. Individual bad entries never fail the call.
pub fn greet_multiple_safe_values(
    names: &Value,
    greeting: &Value,
) -> Result<BatchOutcome, GreetError> {
    let entries = expect_list("names", names)?;
    let greeting = expect_text("greeting", greeting)?;

    let mut outcome = BatchOutcome::default();
    for (index, entry) in entries.iter().enumerate() {
        let result = match entry {
            Value::Null => Err(SkipReason::Absent),
            Value::String(name) => greet(name, greeting).map_err(|e| SkipReason::from(&e)),
            other => Err(SkipReason::InvalidType {
                found: ValueKind::of(other),
            }),
        };
        match result {
            Ok(message) => outcome.greetings.push(message),
            Err(reason) => outcome.skip(index, reason),
        }
    }
    Ok(outcome.finish())
}

impl From<&GreetError> for SkipReason {
    fn from(err: &GreetError) -> Self {
        match err {
            GreetError::EmptyValue { .. } => SkipReason::Empty,
            GreetError::InvalidType { found, .. } => SkipReason::InvalidType { found: *found },
        }
    }
}
