//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod contact;
pub mod subscription;
pub mod webhook;
