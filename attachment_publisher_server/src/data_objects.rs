use std::fmt::Display;

use chrono::{DateTime, Utc};
use receipt_matching_engine::{PendingCounts, PendingReceipt, PendingTransaction};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse {
    pub success: bool,
    pub message: String,
}

impl JsonResponse {
    pub fn success<S: Display>(message: S) -> Self {
        Self { success: true, message: message.to_string() }
    }

    pub fn failure<S: Display>(message: S) -> Self {
        Self { success: false, message: message.to_string() }
    }
}

/// A receipt email, as posted by the inbound mail relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailWebhook {
    pub id: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub sender: Option<String>,
    /// The HTML body, base64url encoded. Padding is optional.
    pub body_html: String,
}

//--------------------------------------   Pending snapshot   ---------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingTransactionSummary {
    pub id: String,
    pub vendor: String,
    pub amount: String,
    pub currency: String,
    pub description: String,
    pub received_at: DateTime<Utc>,
}

impl From<PendingTransaction> for PendingTransactionSummary {
    fn from(tx: PendingTransaction) -> Self {
        Self {
            id: tx.id,
            vendor: tx.vendor_key.into(),
            amount: tx.amount,
            currency: tx.currency,
            description: tx.description,
            received_at: tx.received_at,
        }
    }
}

/// Receipt bodies can be large and may hold personal data, so only the envelope is listed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingReceiptSummary {
    pub message_id: String,
    pub vendor: String,
    pub subject: String,
    pub sender: Option<String>,
    pub received_at: DateTime<Utc>,
}

impl From<PendingReceipt> for PendingReceiptSummary {
    fn from(receipt: PendingReceipt) -> Self {
        Self {
            message_id: receipt.message_id,
            vendor: receipt.vendor_key.into(),
            subject: receipt.subject,
            sender: receipt.sender,
            received_at: receipt.received_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingSummary {
    pub counts: PendingCounts,
    pub transactions: Vec<PendingTransactionSummary>,
    pub receipts: Vec<PendingReceiptSummary>,
}

impl PendingSummary {
    pub fn new(transactions: Vec<PendingTransaction>, receipts: Vec<PendingReceipt>) -> Self {
        let counts = PendingCounts { transactions: transactions.len(), receipts: receipts.len() };
        Self {
            counts,
            transactions: transactions.into_iter().map(PendingTransactionSummary::from).collect(),
            receipts: receipts.into_iter().map(PendingReceiptSummary::from).collect(),
        }
    }
}
