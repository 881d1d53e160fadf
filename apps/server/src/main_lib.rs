use std::sync::Arc;

use crate::config::Config;
use anyhow::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Shared, read-only state. Nothing here is mutated after startup; every
/// round-up request builds its own banking client from it.
pub struct AppState {
    /// Pooled HTTP client reused by the per-request banking clients
    pub http_client: reqwest::Client,
    pub starling_api_url: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("RU_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    // No client timeout: an in-flight round-up is left to finish or fail upstream.
    let http_client = reqwest::Client::builder()
        .build()
        .context("Failed to initialize HTTP client")?;
    tracing::info!("Using Starling API at {}", config.starling_api_url);

    Ok(Arc::new(AppState {
        http_client,
        starling_api_url: config.starling_api_url.clone(),
    }))
}
