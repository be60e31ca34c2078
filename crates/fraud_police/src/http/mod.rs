// Rust guideline compliant 2026-10-19

//! HTTP boundary: routes, handlers, and wire DTOs.
//!
//! [`router`] mounts `GET /` and `POST {base}/transaction/` over an
//! [`AppState`] that holds the shared fraud-check use case.

pub mod dto;
pub mod handlers;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::{get, post};
use domain::TransactionHistoryRepository;
use fraud_check::{FraudProcessor, TransactionFraudProcessor, TransactionValidator};
use tower_http::trace::TraceLayer;

/// State shared by every handler.
///
/// One use-case instance serves all requests; its ports must therefore be
/// safe to call concurrently.
#[derive(Debug)]
pub struct AppState<R, F, V> {
    pub fraud_check: Arc<TransactionFraudProcessor<R, F, V>>,
    pub index_delay: Duration,
}

impl<R, F, V> AppState<R, F, V> {
    #[must_use]
    pub fn new(fraud_check: Arc<TransactionFraudProcessor<R, F, V>>, index_delay: Duration) -> Self {
        Self { fraud_check, index_delay }
    }
}

// Manual impl: cloning only bumps the Arc, so the ports need not be `Clone`.
impl<R, F, V> Clone for AppState<R, F, V> {
    fn clone(&self) -> Self {
        Self { fraud_check: Arc::clone(&self.fraud_check), index_delay: self.index_delay }
    }
}

/// Build the service router.
///
/// The transaction route answers with and without its trailing slash.
/// `base_path` is expected to be empty or to start with `/` and not end with one.
pub fn router<R, F, V>(base_path: &str, state: AppState<R, F, V>) -> Router
where
    R: TransactionHistoryRepository + 'static,
    F: FraudProcessor + 'static,
    V: TransactionValidator + 'static,
{
    let transaction_path = format!("{base_path}/transaction/");
    Router::new()
        .route("/", get(handlers::index::<R, F, V>))
        .route(&transaction_path, post(handlers::check_transaction::<R, F, V>))
        .route(
            transaction_path.trim_end_matches('/'),
            post(handlers::check_transaction::<R, F, V>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
