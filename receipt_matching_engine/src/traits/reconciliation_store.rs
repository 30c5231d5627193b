use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::match_types::{ExpiryResult, Match, PendingCounts, PendingReceipt, PendingTransaction};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("Transaction {0} has no amount. It would match every receipt from the same vendor.")]
    EmptyAmount(String),
    #[error("A {0} was submitted without an identifier.")]
    MissingIdentifier(&'static str),
}

/// Behaviour that backends holding the pending collections must provide.
///
/// Both `reconcile_*` calls are a single critical section: the scan of one collection, and the removal from it or the
/// insertion into the other, must be atomic with respect to every other call on the same store. Implementations must
/// not perform slow I/O while holding that section.
#[allow(async_fn_in_trait)]
pub trait ReconciliationStore: Clone {
    /// Look for a pending receipt that matches `transaction`, oldest first.
    ///
    /// On a hit, the receipt is removed and the pair is returned. `transaction` is not stored, and any older pending
    /// copy of the same transaction id is dropped as well.
    /// Otherwise `transaction` is stored, replacing any pending transaction with the same id, and `None` is returned.
    async fn reconcile_transaction(&self, transaction: PendingTransaction) -> Result<Option<Match>, MatchError>;

    /// The mirror image of [`Self::reconcile_transaction`] for receipts.
    async fn reconcile_receipt(&self, receipt: PendingReceipt) -> Result<Option<Match>, MatchError>;

    /// A snapshot of the pending transactions, in the order they will be scanned.
    async fn fetch_pending_transactions(&self) -> Result<Vec<PendingTransaction>, MatchError>;

    /// A snapshot of the pending receipts, in the order they will be scanned.
    async fn fetch_pending_receipts(&self) -> Result<Vec<PendingReceipt>, MatchError>;

    async fn fetch_pending_counts(&self) -> Result<PendingCounts, MatchError>;

    /// Remove every pending item received before `cutoff`.
    async fn expire_pending(&self, cutoff: DateTime<Utc>) -> Result<ExpiryResult, MatchError>;
}
