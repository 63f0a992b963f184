use axum::http::StatusCode;
use thiserror::Error;

/// Errors raised while accepting a contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Name, email, and message are required")]
    MissingFields,

    #[error("Please provide a valid email address")]
    InvalidEmail,

    /// Recording or forwarding the submission failed.
    #[error("Failed to deliver contact submission: {0}")]
    Delivery(String),
}

impl ContactError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContactError::MissingFields | ContactError::InvalidEmail => StatusCode::BAD_REQUEST,
            ContactError::Delivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
