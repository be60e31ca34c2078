// Rust guideline compliant 2026-10-19

//! Request handlers.
//!
//! Status mapping of the transaction route:
//! decode or shape failure -> 400, validator rejection -> 400,
//! classification failure -> 500, verdict -> 200.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use domain::TransactionHistoryRepository;
use fraud_check::{FraudCheckError, FraudProcessor, TransactionValidator};

use super::AppState;
use super::dto::{CheckTransactionResponse, IndexResponse, TransactionPayload};

/// `GET /`: liveness page, answered after the configured delay.
pub async fn index<R, F, V>(State(state): State<AppState<R, F, V>>) -> Json<IndexResponse> {
    tokio::time::sleep(state.index_delay).await;
    tracing::debug!("http.index.served");
    Json(IndexResponse::default())
}

/// `POST {base}/transaction/`: run the fraud check for one transaction.
pub async fn check_transaction<R, F, V>(
    State(state): State<AppState<R, F, V>>,
    payload: Result<Json<TransactionPayload>, JsonRejection>,
) -> (StatusCode, Json<CheckTransactionResponse>)
where
    R: TransactionHistoryRepository,
    F: FraudProcessor,
    V: TransactionValidator,
{
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "http.check_transaction.decode_failed");
            return respond(StatusCode::BAD_REQUEST, false);
        }
    };

    if let Err(e) = payload.check_shape() {
        tracing::warn!(
            error = %e,
            transaction_id = payload.transaction_id,
            "http.check_transaction.shape_invalid"
        );
        return respond(StatusCode::BAD_REQUEST, false);
    }

    match state.fraud_check.check_fraudulency(payload.into()).await {
        Ok(is_fraud) => respond(StatusCode::OK, is_fraud),
        Err(FraudCheckError::Validation(e)) => {
            tracing::warn!(error = %e, "http.check_transaction.rejected");
            respond(StatusCode::BAD_REQUEST, false)
        }
        Err(FraudCheckError::Classification { request, source }) => {
            tracing::error!(
                error = %source,
                transaction_id = request.transaction_id,
                user_id = request.user_id,
                "http.check_transaction.classification_failed"
            );
            respond(StatusCode::INTERNAL_SERVER_ERROR, false)
        }
    }
}

fn respond(status: StatusCode, is_fraud: bool) -> (StatusCode, Json<CheckTransactionResponse>) {
    tracing::info!(code = status.as_u16(), is_fraud, "http.check_transaction.response");
    (status, Json(CheckTransactionResponse::new(status, is_fraud)))
}
