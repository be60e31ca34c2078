// Rust guideline compliant 2026-10-19

//! Fraud-police HTTP service entry point.
//!
//! Wires the placeholder adapters (repository, counter fraud processor,
//! permissive validator) into one shared fraud-check use case, serves it over
//! HTTP, and drains in-flight requests on CTRL+C.
//!
//! # Usage
//!
//! ```text
//! RUST_LOG=info SERVICE_PORT=9999 cargo run
//!
//! curl -X POST localhost:9999/service/fraudpolice/api/v1/transaction/ \
//!      -H 'content-type: application/json' \
//!      -d '{"transactionID":1,"userID":1,"paymentMethod":"card","payment":{},"order":{}}'
//! ```

mod adapters;
mod config;
mod http;
mod server;

use std::net::SocketAddr;
use std::sync::Arc;

use adapters::counter_fraud_processor::CounterFraudProcessor;
use adapters::dummy_repository::DummyTransactionHistoryRepo;
use adapters::permissive_validator::PermissiveValidator;
use anyhow::Context as _;
use config::ServerConfig;
use fraud_check::TransactionFraudProcessor;
use http::AppState;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize the tracing subscriber before any async work.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env().context("failed to load server configuration")?;

    // One use-case instance shared by every request; the counter lives inside it.
    let fraud_check = TransactionFraudProcessor::new(
        DummyTransactionHistoryRepo::new(),
        CounterFraudProcessor::new(config.evaluation_delay.clone()),
        PermissiveValidator::new(),
    );
    let state = AppState::new(Arc::new(fraud_check), config.index_delay);
    let app = http::router(&config.base_path, state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, base_path = %config.base_path, "main.server.listening");

    server::serve(listener, app, shutdown_signal(), config.shutdown_grace)
        .await
        .context("server failed")?;

    tracing::info!("main.server.stopped");
    Ok(())
}

/// Resolves on CTRL+C; fails if the handler cannot be installed.
async fn shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "main.shutdown: cannot listen for ctrl_c"))?;
    tracing::info!("main.shutdown: ctrl_c received");
    Ok(())
}
