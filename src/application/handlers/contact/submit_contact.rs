//! SubmitContactHandler - Command handler for contact form submissions.

use std::sync::Arc;

use serde_json::json;

use crate::domain::contact::{ContactError, ContactSubmission};
use crate::domain::foundation::Timestamp;
use crate::ports::{EventRecorder, NotificationKind, Notifier};

/// Event name under which submissions are recorded.
pub const CONTACT_SUBMITTED_EVENT: &str = "contact.submitted";

/// Command to submit the contact form.
#[derive(Debug, Clone, Default)]
pub struct SubmitContactCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    /// Client address, from `X-Forwarded-For` or the peer address.
    pub client_ip: Option<String>,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitContactResult {
    pub received_at: Timestamp,
}

/// Handler for contact form submissions.
pub struct SubmitContactHandler {
    recorder: Arc<dyn EventRecorder>,
    notifier: Arc<dyn Notifier>,
}

impl SubmitContactHandler {
    pub fn new(recorder: Arc<dyn EventRecorder>, notifier: Arc<dyn Notifier>) -> Self {
        Self { recorder, notifier }
    }

    pub async fn handle(
        &self,
        cmd: SubmitContactCommand,
    ) -> Result<SubmitContactResult, ContactError> {
        let submission = ContactSubmission::new(cmd.name, cmd.email, cmd.message)?;
        let received_at = Timestamp::now();

        tracing::info!(
            name = %submission.name(),
            email = %submission.email(),
            message = %submission.message_preview(),
            ip = ?cmd.client_ip,
            "Contact form submission received"
        );

        let record = json!({
            "name": submission.name(),
            "email": submission.email(),
            "message": submission.message(),
            "ip": cmd.client_ip,
            "timestamp": received_at,
        });

        self.recorder
            .save(CONTACT_SUBMITTED_EVENT, &record)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to record contact submission");
                ContactError::Delivery(e.to_string())
            })?;

        self.notifier
            .notify(NotificationKind::ContactSubmission, record)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to send contact notification");
                ContactError::Delivery(e.to_string())
            })?;

        tracing::info!("Contact form processed successfully");

        Ok(SubmitContactResult { received_at })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    #[derive(Default)]
    struct MockRecorder {
        saved: Mutex<Vec<(String, Value)>>,
        fail: bool,
    }

    #[async_trait]
    impl EventRecorder for MockRecorder {
        async fn save(&self, event: &str, payload: &Value) -> Result<(), DomainError> {
            if self.fail {
                return Err(DomainError::new(ErrorCode::Unavailable, "store offline"));
            }
            self.saved
                .lock()
                .unwrap()
                .push((event.to_string(), payload.clone()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockNotifier {
        sent: Mutex<Vec<NotificationKind>>,
        fail: bool,
    }

    #[async_trait]
    impl Notifier for MockNotifier {
        async fn notify(&self, kind: NotificationKind, _data: Value) -> Result<(), DomainError> {
            if self.fail {
                return Err(DomainError::new(ErrorCode::ExternalServiceError, "smtp refused"));
            }
            self.sent.lock().unwrap().push(kind);
            Ok(())
        }
    }

    fn command() -> SubmitContactCommand {
        SubmitContactCommand {
            name: Some("Asha".to_string()),
            email: Some("asha@example.com".to_string()),
            message: Some("I'd like a custom poster".to_string()),
            client_ip: Some("203.0.113.7".to_string()),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn valid_submission_is_recorded_and_notified() {
        let recorder = Arc::new(MockRecorder::default());
        let notifier = Arc::new(MockNotifier::default());
        let handler = SubmitContactHandler::new(recorder.clone(), notifier.clone());

        handler.handle(command()).await.unwrap();

        let saved = recorder.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, "contact.submitted");
        assert_eq!(saved[0].1["email"], "asha@example.com");
        assert_eq!(saved[0].1["ip"], "203.0.113.7");
        assert_eq!(
            *notifier.sent.lock().unwrap(),
            vec![NotificationKind::ContactSubmission]
        );
    }

    #[tokio::test]
    async fn missing_fields_are_rejected_before_recording() {
        let recorder = Arc::new(MockRecorder::default());
        let handler = SubmitContactHandler::new(recorder.clone(), Arc::new(MockNotifier::default()));
        let cmd = SubmitContactCommand {
            message: None,
            ..command()
        };

        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(ContactError::MissingFields)));
        assert!(recorder.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_email_is_rejected() {
        let handler = SubmitContactHandler::new(
            Arc::new(MockRecorder::default()),
            Arc::new(MockNotifier::default()),
        );
        let cmd = SubmitContactCommand {
            email: Some("asha.example.com".to_string()),
            ..command()
        };

        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(ContactError::InvalidEmail)));
    }

    #[tokio::test]
    async fn recorder_failure_is_delivery_error() {
        let recorder = Arc::new(MockRecorder {
            fail: true,
            ..Default::default()
        });
        let handler = SubmitContactHandler::new(recorder, Arc::new(MockNotifier::default()));

        let result = handler.handle(command()).await;

        assert!(matches!(result, Err(ContactError::Delivery(_))));
    }

    #[tokio::test]
    async fn notifier_failure_is_delivery_error() {
        let notifier = Arc::new(MockNotifier {
            fail: true,
            ..Default::default()
        });
        let handler = SubmitContactHandler::new(Arc::new(MockRecorder::default()), notifier);

        let result = handler.handle(command()).await;

        assert!(matches!(result, Err(ContactError::Delivery(_))));
    }
}
