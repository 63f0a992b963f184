//! Foundation module - Shared domain primitives.
//!
//! Contains the timestamp value object and error types
//! that form the vocabulary of the checkout domain.

mod errors;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use timestamp::Timestamp;
