//! Greeter
//!
//! Greeting formatting with strict and tolerant batch processing, plus a
//! stateful greeter that keeps a history and reports statistics.
//!
//! This is the library root. The core (`validate`, `format`, `batch`,
//! `greeter`) is pure and synchronous; `config` and `logging` serve the
//! command-line shell in `main.rs`.
//!
//! ```
//! use greeter::{Greeter, greet, greet_multiple_safe};
//!
//! assert_eq!(greet("World", "Hello").unwrap(), "Hello, World!");
//!
//! let outcome = greet_multiple_safe([Some("Alice"), None], "Hi");
//! assert_eq!(outcome.messages(), ["Hi, Alice!"]);
//!
//! let mut greeter = Greeter::with_greeting("Hello", false).unwrap();
//! assert_eq!(greeter.greet("john doe", None).unwrap(), "Hello, John Doe!");
//! ```

pub mod batch;
pub mod config;
pub mod format;
pub mod greeter;
pub mod logging;
pub mod model;
pub mod report;
pub mod validate;

pub use batch::{
    BatchOutcome, SkipReason, SkippedEntry, greet_multiple, greet_multiple_safe,
    greet_multiple_safe_values, greet_multiple_values,
};
pub use format::{format_greeting, greet, greet_request, greet_value, title_case};
pub use greeter::{Greeter, GreeterConfig, GreetingStats};
pub use model::{DEFAULT_GREETING, GreetError, GreetingRequest, GreetingResult, ValueKind};
