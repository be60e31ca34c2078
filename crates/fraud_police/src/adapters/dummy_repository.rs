// Rust guideline compliant 2026-10-19

//! Placeholder adapter for the `TransactionHistoryRepository` port.
//!
//! Backed by no store at all: lookups return a zero-valued transaction and
//! writes return a wall-clock derived id. Ids produced within the same second
//! collide; a real gateway needs a proper id allocator.

use std::time::{SystemTime, UNIX_EPOCH};

use domain::{RepositoryError, Transaction, TransactionHistoryRepository};

/// `TransactionHistoryRepository` adapter that stores nothing.
#[derive(Debug)]
pub struct DummyTransactionHistoryRepo;

impl DummyTransactionHistoryRepo {
    /// Create a new placeholder repository.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyTransactionHistoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionHistoryRepository for DummyTransactionHistoryRepo {
    /// Always returns `Transaction::default()`; never signals not-found.
    async fn find_by_id(&self, id: u64) -> Result<Transaction, RepositoryError> {
        tracing::debug!(id, "dummy_repository.find_by_id");
        Ok(Transaction::default())
    }

    /// Returns the current Unix time in whole seconds.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` if the system clock reads
    /// earlier than the Unix epoch.
    async fn store(&self, transaction: &Transaction) -> Result<u64, RepositoryError> {
        let id = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| RepositoryError::Unavailable { reason: format!("system clock: {e}") })?
            .as_secs();
        tracing::debug!(
            transaction_id = transaction.transaction_id,
            stored_id = id,
            "dummy_repository.store"
        );
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::DummyTransactionHistoryRepo;
    use domain::{Transaction, TransactionHistoryRepository as _};
    use serde_json::json;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[tokio::test]
    async fn find_by_id_returns_zero_valued_transaction() {
        let repo = DummyTransactionHistoryRepo::new();
        for id in [0, 1, u64::MAX] {
            assert_eq!(repo.find_by_id(id).await.unwrap(), Transaction::default());
        }
    }

    #[tokio::test]
    async fn store_returns_current_unix_seconds() {
        let repo = DummyTransactionHistoryRepo::new();
        let before = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();
        let tx = Transaction::new(5, 6, "card", json!({"cvv": "123"}), json!(["book"]));
        let id = repo.store(&tx).await.unwrap();
        let after = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();
        assert!((before..=after).contains(&id), "{id} not in [{before}, {after}]");
    }

    #[tokio::test]
    async fn store_accepts_zero_valued_transaction() {
        let repo = DummyTransactionHistoryRepo::new();
        repo.store(&Transaction::default()).await.unwrap();
    }
}
