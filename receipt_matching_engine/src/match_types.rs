use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::vendor::VendorKey;

//--------------------------------------  PendingTransaction  ---------------------------------------------------------
/// A debit reported by the bank that is waiting for its receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTransaction {
    /// The bank's transaction id. Attachments are registered against this id.
    pub id: String,
    /// The debit amount as it appears on a receipt, e.g. `"10.50"`. See [`rap_common::MinorUnits::to_receipt_amount`].
    pub amount: String,
    pub currency: String,
    /// Creation timestamp as reported by the bank. It is carried along, never parsed.
    pub created: String,
    pub description: String,
    pub vendor_key: VendorKey,
    /// When this server received the transaction.
    pub received_at: DateTime<Utc>,
}

impl PendingTransaction {
    pub fn new<S: Into<String>>(id: S, amount: S, vendor_key: VendorKey) -> Self {
        Self {
            id: id.into(),
            amount: amount.into(),
            currency: String::default(),
            created: String::default(),
            description: String::default(),
            vendor_key,
            received_at: Utc::now(),
        }
    }

    pub fn with_currency<S: Into<String>>(mut self, currency: S) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_created<S: Into<String>>(mut self, created: S) -> Self {
        self.created = created.into();
        self
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_received_at(mut self, received_at: DateTime<Utc>) -> Self {
        self.received_at = received_at;
        self
    }
}

impl Display for PendingTransaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "id={} vendor={} amount={} description={}",
            self.id, self.vendor_key, self.amount, self.description
        )
    }
}

//--------------------------------------    PendingReceipt    ---------------------------------------------------------
/// A receipt email that is waiting for its transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingReceipt {
    pub message_id: String,
    pub subject: String,
    pub sender: Option<String>,
    /// The decoded HTML body. The amount search runs against this text.
    pub body_html: String,
    /// `body_html`, base64url encoded, ready to hand to the renderer.
    pub body_html_base64url: String,
    pub vendor_key: VendorKey,
    pub received_at: DateTime<Utc>,
}

impl PendingReceipt {
    pub fn new<S: Into<String>>(message_id: S, vendor_key: VendorKey, body_html: S) -> Self {
        let body_html = body_html.into();
        let body_html_base64url = base64::encode_config(body_html.as_bytes(), base64::URL_SAFE);
        Self {
            message_id: message_id.into(),
            subject: String::default(),
            sender: None,
            body_html,
            body_html_base64url,
            vendor_key,
            received_at: Utc::now(),
        }
    }

    pub fn with_subject<S: Into<String>>(mut self, subject: S) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_sender<S: Into<String>>(mut self, sender: S) -> Self {
        self.sender = Some(sender.into());
        self
    }

    pub fn with_received_at(mut self, received_at: DateTime<Utc>) -> Self {
        self.received_at = received_at;
        self
    }
}

impl Display for PendingReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "message id={} vendor={} sender={} subject={}",
            self.message_id,
            self.vendor_key,
            self.sender.as_deref().unwrap_or("unknown"),
            self.subject
        )
    }
}

//--------------------------------------         Match        ---------------------------------------------------------
/// A transaction paired with its receipt. Matches are handed to the caller and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub transaction: PendingTransaction,
    pub receipt: PendingReceipt,
}

impl Match {
    pub fn new(transaction: PendingTransaction, receipt: PendingReceipt) -> Self {
        Self { transaction, receipt }
    }
}

impl Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] --> [{}]", self.transaction, self.receipt)
    }
}

/// The join predicate: same vendor, and the receipt body mentions the transaction amount verbatim.
pub fn is_match(transaction: &PendingTransaction, receipt: &PendingReceipt) -> bool {
    receipt.vendor_key == transaction.vendor_key && receipt.body_html.contains(transaction.amount.as_str())
}

//--------------------------------------     ExpiryResult     ---------------------------------------------------------
/// The items removed by an expiry sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpiryResult {
    pub transactions: Vec<PendingTransaction>,
    pub receipts: Vec<PendingReceipt>,
}

impl ExpiryResult {
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn receipt_count(&self) -> usize {
        self.receipts.len()
    }

    pub fn total_count(&self) -> usize {
        self.transaction_count() + self.receipt_count()
    }
}

/// Number of items in each pending collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCounts {
    pub transactions: usize,
    pub receipts: usize,
}
