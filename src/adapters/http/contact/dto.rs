//! HTTP DTOs for the contact form endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Contact form body. Presence is checked by the application layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Acknowledgement shown to the visitor.
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
    pub timestamp: Timestamp,
}

impl ContactResponse {
    pub const SENT: &'static str =
        "Your message has been sent successfully. We will get back to you soon!";

    pub fn sent(timestamp: Timestamp) -> Self {
        Self {
            success: true,
            message: Self::SENT,
            timestamp,
        }
    }
}
