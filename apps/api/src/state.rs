use std::sync::Arc;

use crate::cv::CvContext;
use crate::email::mailer::Mailer;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at boot and never mutated.
    pub cv: Arc<CvContext>,
    /// Pluggable model backend. Default: GeminiClient.
    pub llm: Arc<dyn TextGenerator>,
    /// Pluggable mail transport. Default: SmtpMailer.
    pub mailer: Arc<dyn Mailer>,
}
