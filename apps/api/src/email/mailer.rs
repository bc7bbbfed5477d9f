//! SMTP delivery through the Gmail relay.
//!
//! Credentials are read on every send, not at boot, so a missing secret only
//! fails email requests and never the whole process.

use async_trait::async_trait;
use lettre::{
    address::AddressError,
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;
use tracing::info;

use crate::email::EmailRequest;

pub const SMTP_RELAY: &str = "smtp.gmail.com";
pub const SMTP_PORT: u16 = 587;

const SENDER_EMAIL_VAR: &str = "SENDER_EMAIL";
const PASSWORD_VAR: &str = "EMAIL_APP_PASSWORD";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Email credentials ({SENDER_EMAIL_VAR}, {PASSWORD_VAR}) are not set.")]
    MissingCredentials,

    #[error("Invalid sender address: {0}")]
    InvalidSender(#[from] AddressError),

    #[error("Failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Sends one message. Carried in `AppState` as `Arc<dyn Mailer>`.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &EmailRequest) -> Result<(), MailError>;
}

/// Resolves an environment variable by name.
pub type EnvLookup = fn(&str) -> Option<String>;

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[derive(Debug, Clone)]
pub struct MailCredentials {
    pub sender: String,
    pub password: String,
}

impl MailCredentials {
    /// Both values must be present and non-blank.
    pub fn resolve(lookup: EnvLookup) -> Result<Self, MailError> {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        match (present(SENDER_EMAIL_VAR), present(PASSWORD_VAR)) {
            (Some(sender), Some(password)) => Ok(Self { sender, password }),
            _ => Err(MailError::MissingCredentials),
        }
    }
}

/// STARTTLS mailer. Opens a fresh connection per message and closes it after.
#[derive(Clone)]
pub struct SmtpMailer {
    relay: String,
    port: u16,
    lookup: EnvLookup,
}

impl SmtpMailer {
    pub fn new() -> Self {
        Self::with_lookup(process_env)
    }

    pub fn with_lookup(lookup: EnvLookup) -> Self {
        Self {
            relay: SMTP_RELAY.to_string(),
            port: SMTP_PORT,
            lookup,
        }
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &EmailRequest) -> Result<(), MailError> {
        let credentials = MailCredentials::resolve(self.lookup)?;
        let message = build_message(&credentials.sender, email)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.relay)?
            .port(self.port)
            .credentials(Credentials::new(credentials.sender, credentials.password))
            .build();

        transport.send(message).await?;

        info!("Email successfully sent to {}", email.recipient);
        Ok(())
    }
}

/// Builds a plain-text message from `sender` to the request's recipient.
pub fn build_message(sender: &str, email: &EmailRequest) -> Result<Message, MailError> {
    let from: Mailbox = sender.parse()?;
    let message = Message::builder()
        .from(from)
        .to(Mailbox::new(None, email.recipient.clone()))
        .subject(email.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(email.body.clone())?;
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> EmailRequest {
        EmailRequest {
            recipient: "recruiter@example.com".parse().unwrap(),
            subject: "Interview".to_string(),
            body: "Are you free on Monday?".to_string(),
        }
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn sender_only(key: &str) -> Option<String> {
        (key == SENDER_EMAIL_VAR).then(|| "me@example.com".to_string())
    }

    fn blank_password(key: &str) -> Option<String> {
        match key {
            SENDER_EMAIL_VAR => Some("me@example.com".to_string()),
            _ => Some("  ".to_string()),
        }
    }

    fn full_env(key: &str) -> Option<String> {
        match key {
            SENDER_EMAIL_VAR => Some("me@example.com".to_string()),
            PASSWORD_VAR => Some("app-password".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_resolve_requires_both_values() {
        assert!(matches!(
            MailCredentials::resolve(no_env),
            Err(MailError::MissingCredentials)
        ));
        assert!(matches!(
            MailCredentials::resolve(sender_only),
            Err(MailError::MissingCredentials)
        ));
        assert!(matches!(
            MailCredentials::resolve(blank_password),
            Err(MailError::MissingCredentials)
        ));
    }

    #[test]
    fn test_resolve_reads_both_values() {
        let creds = MailCredentials::resolve(full_env).unwrap();
        assert_eq!(creds.sender, "me@example.com");
        assert_eq!(creds.password, "app-password");
    }

    #[tokio::test]
    async fn test_send_without_credentials_fails_before_connecting() {
        let mailer = SmtpMailer {
            // Unresolvable: reaching the network would yield an Smtp error instead.
            relay: "relay.invalid".to_string(),
            port: SMTP_PORT,
            lookup: no_env,
        };
        let err = mailer.send(&request()).await.unwrap_err();
        assert!(matches!(err, MailError::MissingCredentials));
    }

    #[test]
    fn test_build_message_sets_headers() {
        let message = build_message("me@example.com", &request()).unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("From: me@example.com"));
        assert!(formatted.contains("To: recruiter@example.com"));
        assert!(formatted.contains("Subject: Interview"));
        assert!(formatted.contains("Content-Type: text/plain"));
        assert!(formatted.contains("Are you free on Monday?"));
    }

    #[test]
    fn test_build_message_rejects_bad_sender() {
        assert!(matches!(
            build_message("not an address", &request()),
            Err(MailError::InvalidSender(_))
        ));
    }
}
