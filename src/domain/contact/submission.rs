//! Contact form submission value object.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::errors::ContactError;

/// Length of the message excerpt written to logs.
pub const MESSAGE_PREVIEW_CHARS: usize = 100;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// A validated message from the site's contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

impl ContactSubmission {
    /// Validates the submitted fields.
    ///
    /// All three fields must be present and non-blank before the email
    /// format is checked.
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Result<Self, ContactError> {
        let (name, email, message) = match (non_blank(name), non_blank(email), non_blank(message))
        {
            (Some(n), Some(e), Some(m)) => (n, e, m),
            _ => return Err(ContactError::MissingFields),
        };

        if !EMAIL_REGEX.is_match(&email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(Self {
            name,
            email,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First [`MESSAGE_PREVIEW_CHARS`] characters of the message, with an
    /// ellipsis when truncated.
    pub fn message_preview(&self) -> String {
        let mut chars = self.message.chars();
        let preview: String = chars.by_ref().take(MESSAGE_PREVIEW_CHARS).collect();
        if chars.next().is_some() {
            format!("{}...", preview)
        } else {
            preview
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
