use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::{
    match_types::{is_match, ExpiryResult, Match, PendingCounts, PendingReceipt, PendingTransaction},
    memory::PendingQueue,
    traits::{MatchError, ReconciliationStore},
};

/// Both pending collections. Every method is one atomic step of the join when called under the [`MemoryStore`] lock.
#[derive(Debug, Clone, Default)]
pub struct PendingState {
    transactions: PendingQueue<PendingTransaction>,
    receipts: PendingQueue<PendingReceipt>,
}

impl PendingState {
    pub fn reconcile_transaction(&mut self, transaction: PendingTransaction) -> Result<Option<Match>, MatchError> {
        if transaction.id.is_empty() {
            return Err(MatchError::MissingIdentifier("transaction"));
        }
        if transaction.amount.is_empty() {
            return Err(MatchError::EmptyAmount(transaction.id));
        }
        match self.receipts.take_first(|r| is_match(&transaction, r)) {
            Some(receipt) => {
                // A stale copy of this transaction must not be able to match a second receipt later on.
                self.transactions.remove(&transaction.id);
                Ok(Some(Match::new(transaction, receipt)))
            },
            None => {
                self.transactions.insert(transaction);
                Ok(None)
            },
        }
    }

    pub fn reconcile_receipt(&mut self, receipt: PendingReceipt) -> Result<Option<Match>, MatchError> {
        if receipt.message_id.is_empty() {
            return Err(MatchError::MissingIdentifier("receipt"));
        }
        match self.transactions.take_first(|t| is_match(t, &receipt)) {
            Some(transaction) => {
                self.receipts.remove(&receipt.message_id);
                Ok(Some(Match::new(transaction, receipt)))
            },
            None => {
                self.receipts.insert(receipt);
                Ok(None)
            },
        }
    }

    pub fn expire(&mut self, cutoff: DateTime<Utc>) -> ExpiryResult {
        ExpiryResult {
            transactions: self.transactions.drain_received_before(cutoff),
            receipts: self.receipts.drain_received_before(cutoff),
        }
    }

    pub fn transactions(&self) -> &PendingQueue<PendingTransaction> {
        &self.transactions
    }

    pub fn receipts(&self) -> &PendingQueue<PendingReceipt> {
        &self.receipts
    }

    pub fn counts(&self) -> PendingCounts {
        PendingCounts { transactions: self.transactions.len(), receipts: self.receipts.len() }
    }
}

/// A [`ReconciliationStore`] that keeps everything in process memory. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<PendingState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReconciliationStore for MemoryStore {
    async fn reconcile_transaction(&self, transaction: PendingTransaction) -> Result<Option<Match>, MatchError> {
        self.state.lock().reconcile_transaction(transaction)
    }

    async fn reconcile_receipt(&self, receipt: PendingReceipt) -> Result<Option<Match>, MatchError> {
        self.state.lock().reconcile_receipt(receipt)
    }

    async fn fetch_pending_transactions(&self) -> Result<Vec<PendingTransaction>, MatchError> {
        Ok(self.state.lock().transactions().iter().cloned().collect())
    }

    async fn fetch_pending_receipts(&self) -> Result<Vec<PendingReceipt>, MatchError> {
        Ok(self.state.lock().receipts().iter().cloned().collect())
    }

    async fn fetch_pending_counts(&self) -> Result<PendingCounts, MatchError> {
        Ok(self.state.lock().counts())
    }

    async fn expire_pending(&self, cutoff: DateTime<Utc>) -> Result<ExpiryResult, MatchError> {
        Ok(self.state.lock().expire(cutoff))
    }
}
