//! Command-line rendering.
//!
//! Runs names through a [`Greeter`] under the configured batch policy and turns
//! the outcome into text or JSON. Kept in the library so output formats are
//! testable without spawning the binary.

use crate::batch::{BatchOutcome, SkipReason, greet_multiple};
use crate::format::greet_request;
use crate::greeter::{Greeter, GreetingStats};
use crate::model::{GreetError, GreetingRequest};
use serde::Serialize;

/// Everything one CLI invocation produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Greetings and skipped entries, flattened into the top-level JSON object.
    #[serde(flatten)]
    pub outcome: BatchOutcome,
    /// Statistics over the greeter's history after the run.
    pub statistics: GreetingStats,
}

/// Greet every name through `greeter`.
///
/// `greeting` applies to every name in the run; `None` selects the greeter's
/// default. Strict policy aborts on the first invalid name; the error is
/// returned and nothing is reported. Tolerant policy records skipped names
/// instead.
///
/// # Errors
///
/// The first [`GreetError`] under the strict policy.
pub fn greet_names(
    greeter: &mut Greeter,
    names: &[String],
    greeting: Option<&str>,
    tolerant: bool,
) -> Result<RunReport, GreetError> {
    let mut outcome = BatchOutcome::default();
    for (index, name) in names.iter().enumerate() {
        match greeter.greet(name, greeting) {
            Ok(result) => outcome.greetings.push(result),
            Err(err) if tolerant => outcome.skip(index, SkipReason::from(&err)),
            Err(err) => return Err(err),
        }
    }
    Ok(RunReport {
        outcome: outcome.finish(),
        statistics: greeter.statistics(),
    })
}

/// Render statistics as a short text block.
pub fn render_statistics(stats: &GreetingStats) -> String {
    format!(
        "Total greetings: {}\nUnique names: {}\nMost common greeting: {}\n",
        stats.total_greetings,
        stats.unique_names,
        stats.most_common_greeting.as_deref().unwrap_or("-")
    )
}

/// Render a run as plain text: one greeting per line, optional statistics.
pub fn render_text(report: &RunReport, show_stats: bool) -> String {
    let mut out: String = report
        .outcome
        .greetings
        .iter()
        .map(|greeting| format!("{greeting}\n"))
        .collect();
    if show_stats {
        out.push('\n');
        out.push_str(&render_statistics(&report.statistics));
    }
    out
}

/// One diagnostic line per skipped entry, for stderr.
pub fn render_skipped(report: &RunReport) -> String {
    report
        .outcome
        .skipped
        .iter()
        .map(|skipped| format!("skipped entry {}: {}\n", skipped.index, skipped.reason))
        .collect()
}

/// Walk through the library's main features and render the transcript.
///
/// # Errors
///
/// Propagates a [`GreetError`], which only happens if the fixed demo inputs
/// become invalid.
pub fn render_demo() -> Result<String, GreetError> {
    let mut lines = vec!["Greeter Demo".to_string(), "=".repeat(20)];

    lines.push("\n1. Basic Greetings:".to_string());
    for request in [
        GreetingRequest::with_default_greeting("World"),
        GreetingRequest::new("Rust", "Welcome"),
    ] {
        lines.push(greet_request(&request)?.into_string());
    }

    lines.push("\n2. Multiple Greetings:".to_string());
    lines.extend(
        greet_multiple(["Alice", "Bob", "Charlie"], "Hello")?
            .into_iter()
            .map(|greeting| greeting.into_string()),
    );

    lines.push("\n3. Stateful Greeter:".to_string());
    let mut greeter = Greeter::with_greeting("Good morning", true)?;
    lines.push(greeter.greet("Developer", None)?.into_string());
    lines.push(greeter.greet("User", Some("Welcome"))?.into_string());

    lines.push("\n4. Statistics:".to_string());
    let mut out = lines.join("\n");
    out.push('\n');
    out.push_str(&render_statistics(&greeter.statistics()));
    Ok(out)
}
