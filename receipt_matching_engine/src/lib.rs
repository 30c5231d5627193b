//! Receipt Matching Engine
//!
//! The receipt matching engine pairs bank transaction notifications with receipt emails. The two streams are
//! independent: either side can arrive first, and either side may never arrive at all.
//!
//! The library is divided into these sections:
//! 1. Vendor classification ([`mod@vendor`]). Free text is mapped onto one of a configured list of vendors. The vendor
//!    is the primary join key.
//! 2. Storage backends ([`mod@traits`], [`MemoryStore`]). A backend holds the unmatched transactions and receipts and
//!    performs the join atomically.
//! 3. The public API ([`MatchingApi`]). Callers submit transactions and receipts here and receive a [`Match`] when a
//!    pairing is found.
//!
//! The engine also publishes a `MatchFoundEvent` for every pairing (see [`mod@events`]), so that side effects such as
//! attaching the rendered receipt to the transaction can run outside the engine's critical section.
pub mod events;
pub mod match_types;
mod memory;
mod rme_api;
pub mod traits;
pub mod vendor;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

pub use match_types::{is_match, ExpiryResult, Match, PendingCounts, PendingReceipt, PendingTransaction};
pub use memory::{MemoryStore, PendingItem, PendingQueue, PendingState};
pub use rme_api::matching_api::MatchingApi;
pub use traits::{MatchError, ReconciliationStore};
pub use vendor::{VendorKey, VendorList};
