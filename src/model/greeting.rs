//! Greeting request and result types.

use serde::{Serialize, Serializer};
use std::fmt;

/// Greeting word used when the caller does not supply one.
pub const DEFAULT_GREETING: &str = "Hello";

/// A name paired with the greeting word to address it with.
///
/// Ephemeral: built per call, never stored. Validation happens when the
/// request is formatted, not when it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingRequest {
    /// Name to greet, untrimmed.
    pub name: String,
    /// Greeting word, untrimmed.
    pub greeting: String,
}

impl GreetingRequest {
    /// Pair a name with an explicit greeting word.
    pub fn new(name: impl Into<String>, greeting: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            greeting: greeting.into(),
        }
    }

    /// Request using [`DEFAULT_GREETING`].
    pub fn with_default_greeting(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_GREETING)
    }
}

/// A formatted greeting of the shape `"<greeting>, <name>!"`.
///
/// Keeps the trimmed parts it was built from so history statistics never
/// have to re-parse the rendered text. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GreetingResult {
    greeting: String,
    name: String,
    text: String,
}

impl GreetingResult {
    /// Build from already-validated, already-trimmed parts.
    pub(crate) fn from_parts(greeting: &str, name: &str) -> Self {
        Self {
            greeting: greeting.to_string(),
            name: name.to_string(),
            text: format!("{greeting}, {name}!"),
        }
    }

    /// The greeting word, trimmed.
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// The greeted name, trimmed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rendered message.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the result, keeping only the rendered message.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for GreetingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for GreetingResult {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq<str> for GreetingResult {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for GreetingResult {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl Serialize for GreetingResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}
