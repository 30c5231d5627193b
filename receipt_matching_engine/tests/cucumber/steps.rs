use cucumber::{then, when};
use receipt_matching_engine::{MatchError, PendingReceipt, PendingTransaction, VendorKey};

use crate::cucumber::MatchingWorld;

fn vendor(key: &str) -> VendorKey {
    VendorKey::new(key).expect("Vendor keys in features must not be blank")
}

#[when(expr = "transaction {word} for {word} from {word} arrives")]
async fn transaction_arrives(world: &mut MatchingWorld, id: String, amount: String, vendor_key: String) {
    let tx = PendingTransaction::new(id, amount, vendor(&vendor_key));
    let result = world.api().process_transaction(tx).await;
    world.record(result);
}

#[when(expr = "transaction {word} with no amount from {word} arrives")]
async fn transaction_without_amount_arrives(world: &mut MatchingWorld, id: String, vendor_key: String) {
    let tx = PendingTransaction::new(id, String::new(), vendor(&vendor_key));
    let result = world.api().process_transaction(tx).await;
    world.record(result);
}

#[when(expr = "receipt {word} from {word} arrives with body {string}")]
async fn receipt_arrives(world: &mut MatchingWorld, id: String, vendor_key: String, body: String) {
    let receipt = PendingReceipt::new(id, vendor(&vendor_key), body);
    let result = world.api().process_receipt(receipt).await;
    world.record(result);
}

#[when(expr = "I classify {string}")]
async fn classify(world: &mut MatchingWorld, text: String) {
    world.classified = world.vendors.classify(&text).map(|v| v.to_string());
}

#[then("there is no match")]
async fn no_match(world: &mut MatchingWorld) {
    match &world.last_result {
        Some(Ok(None)) => {},
        other => panic!("Expected no match, but got {other:?}"),
    }
}

#[then(expr = "transaction {word} is matched with receipt {word}")]
async fn matched(world: &mut MatchingWorld, tx_id: String, receipt_id: String) {
    match &world.last_result {
        Some(Ok(Some(m))) => {
            assert_eq!(m.transaction.id, tx_id, "Wrong transaction in match");
            assert_eq!(m.receipt.message_id, receipt_id, "Wrong receipt in match");
        },
        other => panic!("Expected a match, but got {other:?}"),
    }
}

#[then(expr = "the submission is rejected because the amount is empty")]
async fn rejected_for_empty_amount(world: &mut MatchingWorld) {
    match &world.last_result {
        Some(Err(MatchError::EmptyAmount(_))) => {},
        other => panic!("Expected an EmptyAmount error, but got {other:?}"),
    }
}

async fn transaction_is_pending(world: &MatchingWorld, id: &str) -> bool {
    let pending = world.api().pending_transactions().await.expect("Error fetching pending transactions");
    pending.iter().any(|t| t.id == id)
}

async fn receipt_is_pending(world: &MatchingWorld, id: &str) -> bool {
    let pending = world.api().pending_receipts().await.expect("Error fetching pending receipts");
    pending.iter().any(|r| r.message_id == id)
}

#[then(expr = "transaction {word} is pending")]
async fn check_transaction_pending(world: &mut MatchingWorld, id: String) {
    assert!(transaction_is_pending(world, &id).await, "Transaction {id} is not pending");
}

#[then(expr = "transaction {word} is not pending")]
async fn check_transaction_not_pending(world: &mut MatchingWorld, id: String) {
    assert!(!transaction_is_pending(world, &id).await, "Transaction {id} is still pending");
}

#[then(expr = "receipt {word} is pending")]
async fn check_receipt_pending(world: &mut MatchingWorld, id: String) {
    assert!(receipt_is_pending(world, &id).await, "Receipt {id} is not pending");
}

#[then(expr = "receipt {word} is not pending")]
async fn check_receipt_not_pending(world: &mut MatchingWorld, id: String) {
    assert!(!receipt_is_pending(world, &id).await, "Receipt {id} is still pending");
}

#[then(expr = "there are {int} pending transactions and {int} pending receipts")]
async fn check_counts(world: &mut MatchingWorld, transactions: usize, receipts: usize) {
    let counts = world.api().pending_counts().await.expect("Error fetching pending counts");
    assert_eq!(counts.transactions, transactions, "Unexpected number of pending transactions");
    assert_eq!(counts.receipts, receipts, "Unexpected number of pending receipts");
}

#[then(expr = "pending transaction {word} has amount {word}")]
async fn check_pending_amount(world: &mut MatchingWorld, id: String, amount: String) {
    let pending = world.api().pending_transactions().await.expect("Error fetching pending transactions");
    let tx = pending.iter().find(|t| t.id == id).unwrap_or_else(|| panic!("Transaction {id} is not pending"));
    assert_eq!(tx.amount, amount);
}

#[then(expr = "{int} matches were made in total")]
async fn check_match_count(world: &mut MatchingWorld, count: usize) {
    assert_eq!(world.matches.len(), count);
}

#[then(expr = "the vendor is {word}")]
async fn check_vendor(world: &mut MatchingWorld, expected: String) {
    assert_eq!(world.classified.as_deref(), Some(expected.as_str()));
}

#[then("no vendor is found")]
async fn check_no_vendor(world: &mut MatchingWorld) {
    assert_eq!(world.classified, None);
}
