// Rust guideline compliant 2026-10-19

//! Wire shapes of the HTTP API.

use std::num::FpCategory;

use axum::http::StatusCode;
use fraud_check::TransactionRequest;
use serde::{Deserialize, Serialize};

/// JSON body of `POST {base}/transaction/`.
///
/// All five fields are required; `payment` and `order` may hold any JSON
/// value except a zero value (`null`, `false`, `0`, `""`). Objects and
/// arrays pass even when empty.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionPayload {
    #[serde(rename = "transactionID")]
    pub transaction_id: u64,
    #[serde(rename = "userID")]
    pub user_id: u64,
    #[serde(rename = "paymentMethod")]
    pub payment_method: String,
    #[serde(rename = "payment")]
    pub payment_info: serde_json::Value,
    pub order: serde_json::Value,
}

/// A required payload field that is present but holds its zero value.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{field} is required")]
pub struct ShapeError {
    /// Wire name of the offending field.
    pub field: &'static str,
}

impl TransactionPayload {
    /// Reject zero ids, an empty payment method and zero-valued payloads.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] naming the first offending field.
    pub fn check_shape(&self) -> Result<(), ShapeError> {
        let missing = [
            ("transactionID", self.transaction_id == 0),
            ("userID", self.user_id == 0),
            ("paymentMethod", self.payment_method.is_empty()),
            ("payment", is_zero_value(&self.payment_info)),
            ("order", is_zero_value(&self.order)),
        ];
        match missing.into_iter().find(|(_, is_missing)| *is_missing) {
            Some((field, _)) => Err(ShapeError { field }),
            None => Ok(()),
        }
    }
}

/// `true` for `null`, `false`, any numeric zero and `""`.
fn is_zero_value(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Bool(b) => !b,
        serde_json::Value::Number(n) => {
            matches!(n.as_f64(), Some(f) if f.classify() == FpCategory::Zero)
        }
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => false,
    }
}

impl From<TransactionPayload> for TransactionRequest {
    fn from(payload: TransactionPayload) -> Self {
        Self::new(
            payload.transaction_id,
            payload.user_id,
            payload.payment_method,
            payload.payment_info,
            payload.order,
        )
    }
}

/// `{"isFraud": bool}`
#[derive(Debug, Serialize)]
pub struct FraudVerdict {
    #[serde(rename = "isFraud")]
    pub is_fraud: bool,
}

/// Envelope of every transaction-route response: `{"code": u16, "message": {"isFraud": bool}}`.
#[derive(Debug, Serialize)]
pub struct CheckTransactionResponse {
    pub code: u16,
    pub message: FraudVerdict,
}

impl CheckTransactionResponse {
    #[must_use]
    pub fn new(status: StatusCode, is_fraud: bool) -> Self {
        Self { code: status.as_u16(), message: FraudVerdict { is_fraud } }
    }
}

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub success: bool,
}

impl Default for IndexResponse {
    fn default() -> Self {
        Self { message: "This is the Index Page", success: true }
    }
}
