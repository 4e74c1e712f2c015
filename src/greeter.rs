//! Stateful greeter with per-instance history and statistics.
//!
//! A [`Greeter`] owns an immutable [`GreeterConfig`] and an append-only history
//! of the greetings it produced. The history is exclusively owned: there is no
//! internal locking, so concurrent callers must serialize access externally or
//! use one greeter each.
//!
//! # State transitions
//!
//! - `greet` success: history grows by one entry
//! - `greet` failure: history unchanged
//! - `clear_history`: history emptied, config untouched

use crate::format::{greet, title_case};
use crate::model::{DEFAULT_GREETING, GreetError, GreetingResult};
use crate::validate::{expect_text, require_non_blank};
use serde::Serialize;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tracing::info;

// ===== GreeterConfig =====

/// Construction-time settings for a [`Greeter`].
///
/// Fixed for the lifetime of the owning greeter. The default greeting is
/// stored trimmed and is never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreeterConfig {
    default_greeting: String,
    case_sensitive: bool,
}

impl GreeterConfig {
    /// Smart constructor: validates the default greeting.
    ///
    /// # Errors
    ///
    /// [`GreetError::EmptyValue`] if `default_greeting` is empty or whitespace only.
    pub fn new(default_greeting: &str, case_sensitive: bool) -> Result<Self, GreetError> {
        let default_greeting = require_non_blank("default_greeting", default_greeting)?;
        Ok(Self {
            default_greeting: default_greeting.to_string(),
            case_sensitive,
        })
    }

    /// Smart constructor over dynamic input.
    ///
    /// # Errors
    ///
    /// - [`GreetError::InvalidType`] if `default_greeting` is not text
    /// - [`GreetError::EmptyValue`] if it is blank
    pub fn from_value(default_greeting: &Value, case_sensitive: bool) -> Result<Self, GreetError> {
        let default_greeting = expect_text("default_greeting", default_greeting)?;
        Self::new(default_greeting, case_sensitive)
    }

    /// Greeting word used when a call supplies none. Trimmed, never blank.
    pub fn default_greeting(&self) -> &str {
        &self.default_greeting
    }

    /// Whether names are greeted exactly as given (`true`) or title-cased (`false`).
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            default_greeting: DEFAULT_GREETING.to_string(),
            case_sensitive: true,
        }
    }
}

// ===== GreetingStats =====

/// Aggregate view over a greeter's history.
///
/// # Invariants
///
/// - `total_greetings` equals the history length
/// - `unique_names <= total_greetings`
/// - `most_common_greeting` is `None` exactly when the history is empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GreetingStats {
    /// Number of greetings in the history.
    pub total_greetings: usize,
    /// Distinct names greeted, compared after trimming and case normalization.
    pub unique_names: usize,
    /// Most frequent greeting word. Ties go to the word seen first.
    pub most_common_greeting: Option<String>,
}

impl GreetingStats {
    /// Compute statistics from an ordered history.
    pub fn from_history(history: &[GreetingResult]) -> Self {
        let unique_names = history
            .iter()
            .map(GreetingResult::name)
            .collect::<HashSet<_>>()
            .len();

        // Counts keyed by word, plus first-seen order for tie-breaking.
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for entry in history {
            let count = counts.entry(entry.greeting()).or_insert(0);
            if *count == 0 {
                order.push(entry.greeting());
            }
            *count += 1;
        }

        let mut most_common: Option<(&str, usize)> = None;
        for word in order {
            let count = counts[word];
            if most_common.is_none_or(|(_, best)| count > best) {
                most_common = Some((word, count));
            }
        }

        Self {
            total_greetings: history.len(),
            unique_names,
            most_common_greeting: most_common.map(|(word, _)| word.to_string()),
        }
    }
}

// ===== Greeter =====

/// Greeting generator that remembers what it produced.
///
/// # Examples
///
/// ```
/// use greeter::{Greeter, GreeterConfig};
///
/// let mut greeter = Greeter::new(GreeterConfig::new("Hi", true).unwrap());
/// assert_eq!(greeter.greet("World", None).unwrap(), "Hi, World!");
/// assert_eq!(greeter.history().len(), 1);
///
/// let stats = greeter.statistics();
/// assert_eq!(stats.total_greetings, 1);
/// assert_eq!(stats.most_common_greeting.as_deref(), Some("Hi"));
/// ```
#[derive(Debug, Clone)]
pub struct Greeter {
    config: GreeterConfig,
    history: Vec<GreetingResult>,
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new(GreeterConfig::default())
    }
}

impl Greeter {
    /// Create a greeter with an empty history.
    pub fn new(config: GreeterConfig) -> Self {
        info!(
            default_greeting = config.default_greeting(),
            case_sensitive = config.case_sensitive(),
            "Initialized greeter"
        );
        Self {
            config,
            history: Vec::new(),
        }
    }

    /// Shorthand for `Greeter::new(GreeterConfig::new(..)?)`.
    ///
    /// # Errors
    ///
    /// [`GreetError::EmptyValue`] if `default_greeting` is blank.
    pub fn with_greeting(default_greeting: &str, case_sensitive: bool) -> Result<Self, GreetError> {
        GreeterConfig::new(default_greeting, case_sensitive).map(Self::new)
    }

    /// Settings fixed at construction.
    pub fn config(&self) -> &GreeterConfig {
        &self.config
    }

    /// Greetings produced since construction or the last clear, oldest first.
    pub fn history(&self) -> &[GreetingResult] {
        &self.history
    }

    /// Greet `name`, using the configured default when `greeting` is `None`.
    ///
    /// When the greeter is not case sensitive the name is title-cased first.
    /// On success the result is appended to the history.
    ///
    /// # Errors
    ///
    /// [`GreetError::EmptyValue`] if `name` is blank. History is unchanged.
    pub fn greet(
        &mut self,
        name: &str,
        greeting: Option<&str>,
    ) -> Result<GreetingResult, GreetError> {
        let greeting = greeting.unwrap_or(self.config.default_greeting.as_str());
        let result = if self.config.case_sensitive {
            greet(name, greeting)?
        } else {
            greet(&title_case(name), greeting)?
        };
        self.history.push(result.clone());
        Ok(result)
    }

    /// Dynamic-input variant of [`Greeter::greet`].
    ///
    /// A `None` or `null` greeting selects the configured default.
    ///
    /// # Errors
    ///
    /// - [`GreetError::InvalidType`] if `name` or a supplied greeting is not text
    /// - [`GreetError::EmptyValue`] if `name` is blank
    pub fn greet_value(
        &mut self,
        name: &Value,
        greeting: Option<&Value>,
    ) -> Result<GreetingResult, GreetError> {
        let name = expect_text("name", name)?;
        let greeting = match greeting {
            None | Some(Value::Null) => None,
            Some(value) => Some(expect_text("greeting", value)?),
        };
        self.greet(name, greeting)
    }

    /// Statistics over the current history. Pure read.
    pub fn statistics(&self) -> GreetingStats {
        GreetingStats::from_history(&self.history)
    }

    /// Drop all recorded greetings. Configuration is left untouched.
    pub fn clear_history(&mut self) {
        info!(items = self.history.len(), "Clearing greeting history");
        self.history.clear();
    }
}
