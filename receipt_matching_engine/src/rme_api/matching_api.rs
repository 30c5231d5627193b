use std::fmt::Debug;

use chrono::{Duration, Utc};
use log::*;

use crate::{
    events::{EventProducers, MatchFoundEvent},
    match_types::{ExpiryResult, Match, PendingCounts, PendingReceipt, PendingTransaction},
    traits::{MatchError, ReconciliationStore},
};

/// `MatchingApi` pairs incoming bank transactions with incoming receipt emails, in whichever order they arrive.
///
/// Every successful pairing is returned to the caller *and* published to the `on_match_found` subscribers. The
/// publication happens after the backend has released its critical section, so subscribers are free to do slow I/O.
pub struct MatchingApi<B> {
    db: B,
    producers: EventProducers,
}

impl<B> Debug for MatchingApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MatchingApi")
    }
}

impl<B: Clone> Clone for MatchingApi<B> {
    fn clone(&self) -> Self {
        Self { db: self.db.clone(), producers: self.producers.clone() }
    }
}

impl<B> MatchingApi<B> {
    pub fn new(db: B, producers: EventProducers) -> Self {
        Self { db, producers }
    }

    pub fn db(&self) -> &B {
        &self.db
    }
}

impl<B> MatchingApi<B>
where B: ReconciliationStore
{
    /// Submit a newly observed debit.
    ///
    /// If a pending receipt from the same vendor mentions the amount, that receipt is consumed and the pair is
    /// returned. Otherwise the transaction is held until its receipt shows up.
    pub async fn process_transaction(&self, transaction: PendingTransaction) -> Result<Option<Match>, MatchError> {
        let id = transaction.id.clone();
        trace!("🧾️ Processing transaction {transaction}");
        let result = self.db.reconcile_transaction(transaction).await?;
        match &result {
            Some(m) => {
                info!("🧾️ Matched transaction to receipt: {m}");
                self.call_match_found_hook(m).await;
            },
            None => info!("🧾️ Transaction [{id}] queued"),
        }
        Ok(result)
    }

    /// Submit a newly received receipt. This is the mirror image of [`Self::process_transaction`].
    pub async fn process_receipt(&self, receipt: PendingReceipt) -> Result<Option<Match>, MatchError> {
        let id = receipt.message_id.clone();
        trace!("🧾️ Processing receipt {receipt}");
        let result = self.db.reconcile_receipt(receipt).await?;
        match &result {
            Some(m) => {
                info!("🧾️ Matched receipt to transaction: {m}");
                self.call_match_found_hook(m).await;
            },
            None => info!("🧾️ Receipt [{id}] queued"),
        }
        Ok(result)
    }

    async fn call_match_found_hook(&self, matched: &Match) {
        for emitter in &self.producers.match_found_producer {
            debug!("🧾️ Notifying match found hook subscribers");
            emitter.publish_event(MatchFoundEvent::new(matched.clone())).await;
        }
    }

    pub async fn pending_transactions(&self) -> Result<Vec<PendingTransaction>, MatchError> {
        self.db.fetch_pending_transactions().await
    }

    pub async fn pending_receipts(&self) -> Result<Vec<PendingReceipt>, MatchError> {
        self.db.fetch_pending_receipts().await
    }

    pub async fn pending_counts(&self) -> Result<PendingCounts, MatchError> {
        self.db.fetch_pending_counts().await
    }

    /// Drop every pending item that has been waiting for longer than `ttl`.
    ///
    /// A `ttl` reaching back beyond the earliest representable instant expires nothing.
    pub async fn expire_stale_items(&self, ttl: Duration) -> Result<ExpiryResult, MatchError> {
        let Some(cutoff) = Utc::now().checked_sub_signed(ttl) else {
            trace!("🧾️ TTL of {} minutes predates every timestamp. Nothing to expire", ttl.num_minutes());
            return Ok(ExpiryResult::default());
        };
        trace!("🧾️ Expiring items received before {cutoff}");
        let result = self.db.expire_pending(cutoff).await?;
        for t in &result.transactions {
            debug!("🧾️ Transaction expired without a receipt: {t}");
        }
        for r in &result.receipts {
            debug!("🧾️ Receipt expired without a transaction: {r}");
        }
        Ok(result)
    }
}
