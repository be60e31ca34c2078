// Rust guideline compliant 2026-10-19

//! Placeholder adapter for the `FraudProcessor` port.
//!
//! Flags every [`FRAUD_CYCLE`]-th call on an instance as fraudulent and every
//! other call as legitimate, after a random artificial delay. The transaction
//! and its history are ignored. The counter is a single atomic so one instance
//! can be shared by concurrent requests without losing increments.

use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use domain::{Transaction, TransactionHistoryRepository};
use fraud_check::{FraudProcessor, FraudProcessorError};
use rand::Rng as _;

/// Number of calls per cycle; the last call of each cycle reports fraud.
pub const FRAUD_CYCLE: u32 = 10;

/// Concrete adapter for the `fraud_check::FraudProcessor` port.
#[derive(Debug)]
pub struct CounterFraudProcessor {
    /// Calls seen in the current cycle, in `[0, FRAUD_CYCLE)`.
    count: AtomicU32,
    /// Inclusive range the per-call delay is drawn from.
    delay: RangeInclusive<Duration>,
}

impl CounterFraudProcessor {
    /// Create a processor at the start of a cycle.
    ///
    /// Each `evaluate` sleeps for a uniformly random duration in `delay`.
    /// Pass `Duration::ZERO..=Duration::ZERO` to disable the delay.
    #[must_use]
    pub fn new(delay: RangeInclusive<Duration>) -> Self {
        Self { count: AtomicU32::new(0), delay }
    }

    /// Advance the cycle by one call and report whether it completed.
    fn advance(&self) -> bool {
        let step = |count: u32| Some(if count + 1 >= FRAUD_CYCLE { 0 } else { count + 1 });
        // `step` always returns `Some`, so both arms carry the previous value.
        let previous = match self.count.fetch_update(Ordering::AcqRel, Ordering::Acquire, step) {
            Ok(previous) | Err(previous) => previous,
        };
        previous + 1 >= FRAUD_CYCLE
    }

    fn pick_delay(&self) -> Duration {
        if self.delay.start() >= self.delay.end() {
            return *self.delay.start();
        }
        rand::rng().random_range(self.delay.clone())
    }
}

impl FraudProcessor for CounterFraudProcessor {
    /// Sleep, then advance the cycle; `Ok(true)` on every tenth call.
    ///
    /// # Errors
    ///
    /// Currently infallible; returns `Ok(bool)`.
    async fn evaluate<R: TransactionHistoryRepository>(
        &self,
        transaction: &Transaction,
        _history: &R,
    ) -> Result<bool, FraudProcessorError> {
        let delay = self.pick_delay();
        tokio::time::sleep(delay).await;
        let is_fraud = self.advance();
        tracing::debug!(
            transaction_id = transaction.transaction_id,
            delay_ms = delay.as_millis(),
            is_fraud,
            "counter_fraud_processor.evaluate"
        );
        Ok(is_fraud)
    }
}

#[cfg(test)]
mod tests {
    use super::{CounterFraudProcessor, FRAUD_CYCLE};
    use crate::adapters::dummy_repository::DummyTransactionHistoryRepo;
    use domain::Transaction;
    use fraud_check::FraudProcessor as _;
    use std::sync::Arc;
    use std::time::Duration;

    fn no_delay() -> CounterFraudProcessor {
        CounterFraudProcessor::new(Duration::ZERO..=Duration::ZERO)
    }

    #[tokio::test]
    async fn tenth_call_is_fraud_then_cycle_restarts() {
        let processor = no_delay();
        let repo = DummyTransactionHistoryRepo::new();
        let tx = Transaction::default();
        let mut verdicts = Vec::new();
        for _ in 0..25 {
            verdicts.push(processor.evaluate(&tx, &repo).await.unwrap());
        }
        let fraud_calls: Vec<usize> =
            verdicts.iter().enumerate().filter(|(_, f)| **f).map(|(i, _)| i + 1).collect();
        assert_eq!(fraud_calls, [10, 20]);
    }

    #[tokio::test]
    async fn instances_count_independently() {
        let a = no_delay();
        let b = no_delay();
        let repo = DummyTransactionHistoryRepo::new();
        let tx = Transaction::default();
        for _ in 0..9 {
            assert!(!a.evaluate(&tx, &repo).await.unwrap());
        }
        assert!(!b.evaluate(&tx, &repo).await.unwrap());
        assert!(a.evaluate(&tx, &repo).await.unwrap());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_calls_lose_no_increments() {
        let processor = Arc::new(no_delay());
        let calls = 20 * FRAUD_CYCLE;
        let handles: Vec<_> = (0..calls)
            .map(|_| {
                let processor = Arc::clone(&processor);
                tokio::spawn(async move {
                    let repo = DummyTransactionHistoryRepo::new();
                    processor.evaluate(&Transaction::default(), &repo).await.unwrap()
                })
            })
            .collect();
        let mut frauds = 0u32;
        for handle in handles {
            if handle.await.unwrap() {
                frauds += 1;
            }
        }
        assert_eq!(frauds, 20);
    }

    #[tokio::test]
    async fn delay_is_applied_before_verdict() {
        let processor = CounterFraudProcessor::new(Duration::from_millis(20)..=Duration::from_millis(30));
        let repo = DummyTransactionHistoryRepo::new();
        let start = tokio::time::Instant::now();
        processor.evaluate(&Transaction::default(), &repo).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn picked_delay_stays_in_range() {
        let range = Duration::from_millis(1000)..=Duration::from_millis(2000);
        let processor = CounterFraudProcessor::new(range.clone());
        for _ in 0..1_000 {
            assert!(range.contains(&processor.pick_delay()));
        }
    }
}
