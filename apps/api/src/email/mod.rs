pub mod handlers;
pub mod mailer;
pub mod service;

use lettre::Address;
use serde::Deserialize;

/// A notification email. `recipient` is parsed as an address during
/// deserialization, so a malformed recipient never reaches the send logic.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailRequest {
    pub recipient: Address,
    pub subject: String,
    pub body: String,
}
