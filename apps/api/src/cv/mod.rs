//! CV context loader.
//!
//! The CV is read exactly once at boot. A failed load is not fatal: the
//! reason is kept as `CvContext::Unavailable` and replayed to every chat
//! request until the process restarts.

use std::any::Any;
use std::io::ErrorKind;
use std::panic;
use std::path::Path;

use tracing::{error, info};

/// The text every chat answer is grounded on. Immutable after boot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CvContext {
    Loaded(String),
    Unavailable(String),
}

impl CvContext {
    /// Returns the CV text, or the reason it could not be loaded.
    pub fn text(&self) -> Result<&str, &str> {
        match self {
            CvContext::Loaded(text) => Ok(text),
            CvContext::Unavailable(reason) => Err(reason),
        }
    }
}

/// Reads the PDF at `path` and extracts its text page by page.
///
/// Blocking; call from `spawn_blocking` inside the runtime.
pub fn load_cv_context(path: &Path) -> CvContext {
    let context = match std::fs::read(path) {
        Ok(bytes) => match extract_pages(&bytes) {
            Ok(pages) => CvContext::Loaded(join_pages(pages)),
            Err(cause) => CvContext::Unavailable(parse_failure(&cause)),
        },
        Err(e) if e.kind() == ErrorKind::NotFound => CvContext::Unavailable(format!(
            "Error: {} file not found in the project directory.",
            display_name(path)
        )),
        Err(e) => CvContext::Unavailable(parse_failure(&e)),
    };

    match &context {
        CvContext::Loaded(text) => {
            info!("CV loaded from {}: {} chars", path.display(), text.chars().count())
        }
        CvContext::Unavailable(reason) => error!("CV unavailable: {reason}"),
    }

    context
}

/// Per-page text of an in-memory PDF.
///
/// `pdf-extract` panics on some structurally broken documents (missing
/// `/MediaBox`, undeclared fonts), so panics are caught and reported like
/// any other extraction failure.
fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, String> {
    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes)) {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(e.to_string()),
        Err(payload) => Err(panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "extractor panicked".to_string())
}

/// Concatenates page texts, one `\n` after each, skipping pages with no text.
fn join_pages(pages: Vec<String>) -> String {
    pages
        .into_iter()
        .filter(|page| !page.trim().is_empty())
        .fold(String::new(), |mut acc, page| {
            acc.push_str(&page);
            acc.push('\n');
            acc
        })
}

fn parse_failure(cause: &dyn std::fmt::Display) -> String {
    format!("Error: Failed to read or parse the PDF file: {cause}")
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
