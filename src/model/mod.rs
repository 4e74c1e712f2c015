//! Domain model types (pure).
//!
//! All types in this module are pure data. Validation lives in
//! [`crate::validate`]; these types only carry already-checked values.

pub mod error;
pub mod greeting;
pub mod value;

// Re-export for convenience
pub use error::{AppError, GreetError};
pub use greeting::{DEFAULT_GREETING, GreetingRequest, GreetingResult};
pub use value::ValueKind;
