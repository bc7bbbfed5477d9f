mod chat;
mod config;
mod cv;
mod email;
mod errors;
mod extract;
mod llm_client;
mod routes;
mod shutdown;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::cv::load_cv_context;
use crate::email::mailer::SmtpMailer;
use crate::llm_client::GeminiClient;
use crate::routes::{build_router, cors_layer};
use crate::shutdown::shutdown_signal;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing GOOGLE_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{crate_name}={level},tower_http={level}",
                crate_name = env!("CARGO_CRATE_NAME"),
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Assistant API v{}", env!("CARGO_PKG_VERSION"));

    // Load the CV once; a failure is kept and reported on every chat request
    let cv_path = config.cv_path.clone();
    let cv = tokio::task::spawn_blocking(move || load_cv_context(&cv_path))
        .await
        .context("CV loader task panicked")?;

    let llm = GeminiClient::new(config.google_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        cv: Arc::new(cv),
        llm: Arc::new(llm),
        mailer: Arc::new(SmtpMailer::new()),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins)?);
    info!("CORS origins: {:?}", config.cors_origins);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
