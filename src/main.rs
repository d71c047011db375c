//! cep-lookup - CEP address lookup with Hexagonal Architecture
//!
//! This is the composition root that wires together all the components.

mod adapters;
mod application;
mod config;
mod domain;

use crate::adapters::inbound::ConsoleUi;
use crate::adapters::outbound::{ViaCepConfig, ViaCepProvider};
use crate::application::CepLookupService;
use crate::config::load_config;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    tracing::info!("starting cep-lookup api={}", cfg.api_url);

    // ===== COMPOSITION ROOT =====
    // Wire up the provider, the service, and the console front end

    let provider = Arc::new(ViaCepProvider::new(ViaCepConfig {
        base_url: cfg.api_url.clone(),
        timeout: Duration::from_secs(cfg.http_timeout_secs),
    })?);

    let service = Arc::new(CepLookupService::new(provider));

    let ui = ConsoleUi::new(service);
    ui.run().await
}
