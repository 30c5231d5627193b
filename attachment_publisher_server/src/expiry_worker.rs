use chrono::Duration;
use log::*;
use receipt_matching_engine::{MatchingApi, MemoryStore, PendingReceipt, PendingTransaction};
use tokio::task::JoinHandle;

/// Starts the expiry worker. Do not await the returned JoinHandle, as it will run indefinitely.
pub fn start_expiry_worker(
    api: MatchingApi<MemoryStore>,
    ttl: Duration,
    interval: std::time::Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut timer = tokio::time::interval(interval);
        info!("🕰️ Pending item expiry worker started. TTL: {} min", ttl.num_minutes());
        loop {
            timer.tick().await;
            trace!("🕰️ Running pending item expiry job");
            match api.expire_stale_items(ttl).await {
                Ok(result) if result.total_count() == 0 => trace!("🕰️ Nothing to expire"),
                Ok(result) => {
                    info!("🕰️ {} pending items expired", result.total_count());
                    debug!(
                        "🕰️ {} Expired transactions: {}",
                        result.transaction_count(),
                        transaction_list(&result.transactions)
                    );
                    debug!("🕰️ {} Expired receipts: {}", result.receipt_count(), receipt_list(&result.receipts));
                },
                Err(e) => {
                    error!("🕰️ Error running pending item expiry job: {e}");
                },
            }
        }
    })
}

fn transaction_list(transactions: &[PendingTransaction]) -> String {
    transactions
        .iter()
        .map(|t| format!("[{}] {} {}", t.id, t.vendor_key, t.amount))
        .collect::<Vec<String>>()
        .join(", ")
}

fn receipt_list(receipts: &[PendingReceipt]) -> String {
    receipts.iter().map(|r| format!("[{}] {}", r.message_id, r.vendor_key)).collect::<Vec<String>>().join(", ")
}
