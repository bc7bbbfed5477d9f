use tracing::error;

use crate::email::mailer::{MailError, Mailer};
use crate::email::EmailRequest;

/// Sends `email` through `mailer`.
///
/// Failures are logged here with their cause and returned as a value. The
/// caller decides what, if anything, to expose.
pub async fn send_email(mailer: &dyn Mailer, email: &EmailRequest) -> Result<(), MailError> {
    mailer.send(email).await.inspect_err(|e| {
        error!("Failed to send email to {}: {e}", email.recipient);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct RejectingMailer;

    #[async_trait]
    impl Mailer for RejectingMailer {
        async fn send(&self, _email: &EmailRequest) -> Result<(), MailError> {
            Err(MailError::MissingCredentials)
        }
    }

    struct AcceptingMailer;

    #[async_trait]
    impl Mailer for AcceptingMailer {
        async fn send(&self, _email: &EmailRequest) -> Result<(), MailError> {
            Ok(())
        }
    }

    fn request() -> EmailRequest {
        EmailRequest {
            recipient: "someone@example.com".parse().unwrap(),
            subject: "Hi".to_string(),
            body: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn test_failure_is_returned_with_cause() {
        let err = send_email(&RejectingMailer, &request()).await.unwrap_err();
        assert!(matches!(err, MailError::MissingCredentials));
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        assert!(send_email(&AcceptingMailer, &request()).await.is_ok());
    }
}
