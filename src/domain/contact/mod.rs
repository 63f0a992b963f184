//! Contact form domain module.

mod errors;
mod submission;

pub use errors::ContactError;
pub use submission::{ContactSubmission, MESSAGE_PREVIEW_CHARS};
