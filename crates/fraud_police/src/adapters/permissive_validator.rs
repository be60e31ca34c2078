// Rust guideline compliant 2026-10-19

//! Placeholder adapter for the `TransactionValidator` port.
//!
//! Runs the order, payment-method and payment-info checks in that order and
//! stops at the first failure. Every check currently accepts any request;
//! real business rules go into the `valid_*` functions.

use fraud_check::{TransactionRequest, TransactionValidator, ValidationError};

/// `TransactionValidator` adapter that approves every request.
#[derive(Debug)]
pub struct PermissiveValidator;

impl PermissiveValidator {
    /// Create a new permissive validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn valid_order(_request: &TransactionRequest) -> bool {
        true
    }

    fn valid_payment_method(_request: &TransactionRequest) -> bool {
        true
    }

    fn valid_payment_info(_request: &TransactionRequest) -> bool {
        true
    }
}

impl Default for PermissiveValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionValidator for PermissiveValidator {
    async fn validate(&self, request: &TransactionRequest) -> Result<(), ValidationError> {
        if !Self::valid_order(request) {
            return Err(ValidationError::BadOrder { request: request.clone() });
        }
        if !Self::valid_payment_method(request) {
            return Err(ValidationError::BadPaymentMethod { request: request.clone() });
        }
        if !Self::valid_payment_info(request) {
            return Err(ValidationError::BadPaymentInfo { request: request.clone() });
        }
        Ok(())
    }
}
