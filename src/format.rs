//! Greeting formatting.
//!
//! [`format_greeting`] is the pure formatter; [`greet`] and [`greet_value`]
//! run validation first and are the single-entry operations callers use.

use crate::model::{GreetError, GreetingRequest, GreetingResult};
use crate::validate;
use serde_json::Value;
use tracing::info;

/// Render `"<greeting>, <name>!"` from a validated pair.
///
/// Trims surrounding whitespace from both parts. Pure and deterministic;
/// the caller is responsible for validation.
pub fn format_greeting(name: &str, greeting: &str) -> GreetingResult {
    GreetingResult::from_parts(greeting.trim(), name.trim())
}

/// Validate and format a single greeting.
///
/// # Errors
///
/// [`GreetError::EmptyValue`] if `name` is empty or whitespace only.
///
/// # Examples
///
/// ```
/// use greeter::greet;
///
/// assert_eq!(greet("World", "Hello").unwrap(), "Hello, World!");
/// assert_eq!(greet("  Alice  ", "Hi").unwrap(), "Hi, Alice!");
/// assert!(greet("   ", "Hello").is_err());
/// ```
pub fn greet(name: &str, greeting: &str) -> Result<GreetingResult, GreetError> {
    validate::validate(name, greeting)?;
    let result = format_greeting(name, greeting);
    info!(name = result.name(), "Generating greeting");
    Ok(result)
}

/// Validate and format a single greeting from dynamic input.
///
/// # Errors
///
/// - [`GreetError::InvalidType`] if `name` or `greeting` is not text
/// - [`GreetError::EmptyValue`] if `name` is blank
pub fn greet_value(name: &Value, greeting: &Value) -> Result<GreetingResult, GreetError> {
    let (name, greeting) = validate::validate_value(name, greeting)?;
    greet(name, greeting)
}

/// Validate and format a [`GreetingRequest`].
///
/// # Errors
///
/// [`GreetError::EmptyValue`] if the request's name is blank.
pub fn greet_request(request: &GreetingRequest) -> Result<GreetingResult, GreetError> {
    greet(&request.name, &request.greeting)
}

/// Normalize a name to title case.
///
/// The first letter of every whitespace-delimited word is uppercased and the
/// rest of the word lowercased. Whitespace is preserved as-is.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for ch in name.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            at_word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}
