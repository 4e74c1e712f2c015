//! Input validation shared by every greeting operation.
//!
//! Checks run in a fixed order: name kind, greeting kind, then name emptiness.
//! The first failure wins. Validation has no side effects.

use crate::model::{GreetError, ValueKind};
use serde_json::Value;

/// Require `value` to be text, returning the borrowed string.
///
/// # Errors
///
/// [`GreetError::InvalidType`] naming `field` when `value` is not a JSON string.
pub fn expect_text<'a>(field: &'static str, value: &'a Value) -> Result<&'a str, GreetError> {
    match value {
        Value::String(s) => Ok(s.as_str()),
        other => Err(GreetError::InvalidType {
            field,
            expected: ValueKind::Text,
            found: ValueKind::of(other),
        }),
    }
}

/// Require `value` to be a list, returning its entries.
///
/// # Errors
///
/// [`GreetError::InvalidType`] naming `field` when `value` is not a JSON array.
pub fn expect_list<'a>(field: &'static str, value: &'a Value) -> Result<&'a [Value], GreetError> {
    match value {
        Value::Array(items) => Ok(items.as_slice()),
        other => Err(GreetError::InvalidType {
            field,
            expected: ValueKind::List,
            found: ValueKind::of(other),
        }),
    }
}

/// Require `text` to be non-empty after trimming, returning the trimmed slice.
///
/// # Errors
///
/// [`GreetError::EmptyValue`] naming `field` for empty or whitespace-only text.
pub fn require_non_blank<'a>(field: &'static str, text: &'a str) -> Result<&'a str, GreetError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GreetError::EmptyValue { field });
    }
    Ok(trimmed)
}

/// Validate a typed name/greeting pair.
///
/// Both are already text, so only the name's emptiness can fail. The greeting
/// word may be blank.
pub fn validate(name: &str, _greeting: &str) -> Result<(), GreetError> {
    require_non_blank("name", name).map(|_| ())
}

/// Validate a dynamic name/greeting pair, returning both as text.
///
/// # Errors
///
/// - [`GreetError::InvalidType`] if either value is not text (name checked first)
/// - [`GreetError::EmptyValue`] if the name is blank
pub fn validate_value<'a>(
    name: &'a Value,
    greeting: &'a Value,
) -> Result<(&'a str, &'a str), GreetError> {
    let name = expect_text("name", name)?;
    let greeting = expect_text("greeting", greeting)?;
    validate(name, greeting)?;
    Ok((name, greeting))
}
