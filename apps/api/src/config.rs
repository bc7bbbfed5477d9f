use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost",
    "http://localhost:3000",
    "https://cv-llm-assistant.vercel.app",
];

/// Application configuration loaded from environment variables.
/// Fails at startup if `GOOGLE_API_KEY` is missing.
///
/// Email credentials are deliberately absent: the mailer reads them on every
/// send so a missing secret only fails email requests.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub cv_path: PathBuf,
    pub cors_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: require_env("GOOGLE_API_KEY")?,
            cv_path: std::env::var("CV_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("cv.pdf")),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value =
        std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

/// Splits a comma-separated origin list, dropping blanks and trailing slashes.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_skips_blanks() {
        let origins = parse_origins(" http://localhost:3000/ ,, https://example.com ");
        assert_eq!(origins, vec!["http://localhost:3000", "https://example.com"]);
    }

    #[test]
    fn test_default_origins_has_three_entries() {
        assert_eq!(DEFAULT_CORS_ORIGINS.len(), 3);
    }
}
