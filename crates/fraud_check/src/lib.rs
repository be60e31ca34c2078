// Rust guideline compliant 2026-10-19

//! Fraud-check use case.
//!
//! [`TransactionFraudProcessor`] validates a [`TransactionRequest`], turns it
//! into a `domain::Transaction`, and asks a [`FraudProcessor`] to classify it
//! against a `domain::TransactionHistoryRepository`. Validation and
//! classification are hexagonal ports ([`TransactionValidator`],
//! [`FraudProcessor`]); this crate owns no concrete implementation of either.

use domain::{RepositoryError, Transaction, TransactionHistoryRepository};

// ---------------------------------------------------------------------------
// TransactionRequest
// ---------------------------------------------------------------------------

/// Input of the fraud-check use case.
///
/// Mirrors `domain::Transaction` field for field; it exists so the HTTP payload
/// and the domain entity can evolve independently.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRequest {
    pub transaction_id: u64,
    pub user_id: u64,
    pub payment_method: String,
    /// Opaque payment details, passed through unexamined.
    pub payment_info: serde_json::Value,
    /// Opaque order details, passed through unexamined.
    pub order: serde_json::Value,
}

impl TransactionRequest {
    /// Build a request from its five fields.
    #[must_use]
    pub fn new(
        transaction_id: u64,
        user_id: u64,
        payment_method: impl Into<String>,
        payment_info: serde_json::Value,
        order: serde_json::Value,
    ) -> Self {
        Self {
            transaction_id,
            user_id,
            payment_method: payment_method.into(),
            payment_info,
            order,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Reasons a [`TransactionValidator`] rejects a request.
///
/// One variant per check so callers can tell which one failed; each carries
/// the offending request for diagnosis.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("bad transaction order | transaction_request: {request:?}")]
    BadOrder { request: TransactionRequest },
    #[error("bad transaction payment method | transaction_request: {request:?}")]
    BadPaymentMethod { request: TransactionRequest },
    #[error("bad transaction payment info | transaction_request: {request:?}")]
    BadPaymentInfo { request: TransactionRequest },
}

/// Errors from the [`FraudProcessor`] port.
#[derive(Debug, thiserror::Error)]
pub enum FraudProcessorError {
    /// The processor could not reach a verdict.
    #[error("fraud evaluation failed: {reason}")]
    EvaluationFailed {
        /// Human-readable description.
        reason: String,
    },
    /// Transaction history could not be consulted.
    #[error("transaction history error: {0}")]
    History(#[from] RepositoryError),
}

/// Errors returned by [`TransactionFraudProcessor::check_fraudulency`].
#[derive(Debug, thiserror::Error)]
pub enum FraudCheckError {
    /// The validator rejected the request.
    #[error("transaction validator could not validate the transaction request")]
    Validation(#[source] ValidationError),
    /// The fraud processor failed on a validated request.
    #[error("fraud classification failed | transaction_request: {request:?}")]
    Classification {
        /// The request being classified.
        request: Box<TransactionRequest>,
        #[source]
        source: FraudProcessorError,
    },
}

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Hexagonal port: decides whether a transaction is fraudulent.
///
/// Receives the transaction history so real implementations can look at past
/// behaviour of the same user.
pub trait FraudProcessor: Send + Sync {
    /// Classify `transaction`; `Ok(true)` means fraudulent.
    ///
    /// # Errors
    ///
    /// Returns [`FraudProcessorError`] when no verdict can be reached.
    fn evaluate<R: TransactionHistoryRepository>(
        &self,
        transaction: &Transaction,
        history: &R,
    ) -> impl Future<Output = Result<bool, FraudProcessorError>> + Send;
}

/// Hexagonal port: business-rule validation of an incoming request.
pub trait TransactionValidator: Send + Sync {
    /// Check `request`, failing fast on the first rule it breaks.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] variant naming the failed check.
    fn validate(
        &self,
        request: &TransactionRequest,
    ) -> impl Future<Output = Result<(), ValidationError>> + Send;
}

// ---------------------------------------------------------------------------
// TransactionFraudProcessor
// ---------------------------------------------------------------------------

/// Use-case interactor: validate, materialize, classify.
///
/// Generic over the three ports for static dispatch; the concrete adapters
/// are chosen once at process start. Holds no per-call state of its own.
#[derive(Debug)]
pub struct TransactionFraudProcessor<R, F, V> {
    repository: R,
    fraud_processor: F,
    validator: V,
}

impl<R, F, V> TransactionFraudProcessor<R, F, V>
where
    R: TransactionHistoryRepository,
    F: FraudProcessor,
    V: TransactionValidator,
{
    /// Wire the three ports together.
    #[must_use]
    pub fn new(repository: R, fraud_processor: F, validator: V) -> Self {
        Self { repository, fraud_processor, validator }
    }

    /// Run the fraud check for one request.
    ///
    /// No retries and no timeout: whatever latency the fraud processor adds
    /// reaches the caller unchanged.
    ///
    /// # Errors
    ///
    /// - [`FraudCheckError::Validation`] if the validator rejects `request`.
    /// - [`FraudCheckError::Classification`] if the fraud processor fails.
    pub async fn check_fraudulency(&self, request: TransactionRequest) -> Result<bool, FraudCheckError> {
        self.validator
            .validate(&request)
            .await
            .map_err(FraudCheckError::Validation)?;

        let transaction = Self::create_transaction(&request);
        tracing::debug!(
            transaction_id = transaction.transaction_id,
            user_id = transaction.user_id,
            "fraud_check.transaction.created"
        );

        match self.fraud_processor.evaluate(&transaction, &self.repository).await {
            Ok(is_fraud) => Ok(is_fraud),
            Err(source) => Err(FraudCheckError::Classification { request: Box::new(request), source }),
        }
    }

    /// Build the domain transaction for a validated request.
    #[must_use]
    pub fn create_transaction(request: &TransactionRequest) -> Transaction {
        Transaction::new(
            request.transaction_id,
            request.user_id,
            request.payment_method.clone(),
            request.payment_info.clone(),
            request.order.clone(),
        )
    }
}
