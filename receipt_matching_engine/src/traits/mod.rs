//! # Storage backends
//!
//! The [`ReconciliationStore`] trait is the contract a backend must fulfil to hold the pending transactions and
//! receipts and run the join between them. The only backend shipped today is the in-memory
//! [`MemoryStore`](crate::MemoryStore); nothing survives a restart.
mod reconciliation_store;

pub use reconciliation_store::{MatchError, ReconciliationStore};
