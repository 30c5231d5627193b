//! # Receipt matching engine public API
//!
//! [`matching_api::MatchingApi`] is the entry point for callers. It is created by supplying a backend that implements
//! [`ReconciliationStore`](crate::ReconciliationStore), plus the event producers that should hear about matches.
//!
//! ```rust,ignore
//! use receipt_matching_engine::{events::EventProducers, MatchingApi, MemoryStore};
//! let api = MatchingApi::new(MemoryStore::new(), EventProducers::default());
//! let matched = api.process_transaction(transaction).await?;
//! ```
pub mod matching_api;
