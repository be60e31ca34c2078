// Rust guideline compliant 2026-10-19

//! Core domain types for the fraud-police service.
//!
//! Defines [`Transaction`], [`RepositoryError`], and the hexagonal
//! [`TransactionHistoryRepository`] port. Nothing here knows about HTTP, the
//! use-case layer, or any concrete store.

/// A payment transaction submitted for a fraud check.
///
/// Identifiers are caller-supplied and not checked for uniqueness here.
/// `payment_info` and `order` are opaque payloads passed through unexamined.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transaction {
    /// Caller-supplied transaction identifier.
    pub transaction_id: u64,
    /// Caller-supplied identifier of the paying user.
    pub user_id: u64,
    /// Payment method label (e.g. `"card"`).
    pub payment_method: String,
    /// Opaque payment details.
    pub payment_info: serde_json::Value,
    /// Opaque order details.
    pub order: serde_json::Value,
}

impl Transaction {
    /// Build a transaction from its five fields. No validation is performed.
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

/// Errors from the [`TransactionHistoryRepository`] port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// No transaction is stored under `id`.
    #[error("transaction {id} not found")]
    NotFound {
        /// The identifier that was looked up.
        id: u64,
    },
    /// The backing store could not be reached.
    #[error("repository unavailable: {reason}")]
    Unavailable {
        /// Human-readable description.
        reason: String,
    },
}

/// Hexagonal port: history of past transactions.
///
/// Fraud processors read from it; gateways outside the domain implement it.
/// Futures are `Send` so the port can be driven from a multi-threaded server.
pub trait TransactionHistoryRepository: Send + Sync {
    /// Look up a previously stored transaction.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` when nothing is stored under `id`,
    /// or `RepositoryError::Unavailable` when the store cannot be reached.
    fn find_by_id(
        &self,
        id: u64,
    ) -> impl Future<Output = Result<Transaction, RepositoryError>> + Send;

    /// Persist `transaction` and return the identifier it was stored under.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` when the store cannot be reached.
    fn store(
        &self,
        transaction: &Transaction,
    ) -> impl Future<Output = Result<u64, RepositoryError>> + Send;
}
