// Rust guideline compliant 2026-10-19

//! Placeholder adapters for the fraud-police binary.
//!
//! Each sub-module implements one port trait from the `domain` or
//! `fraud_check` crates. None of them carries real business logic; they are
//! stand-ins to be swapped for real implementations at wiring time.

pub mod counter_fraud_processor;
pub mod dummy_repository;
pub mod permissive_validator;
