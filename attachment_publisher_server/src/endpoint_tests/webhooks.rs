use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, Mutex},
};

use actix_web::http::StatusCode;
use receipt_matching_engine::{
    events::{EventHandlers, EventHooks},
    MatchingApi,
    MemoryStore,
    PendingCounts,
};
use serde_json::json;

use super::helpers::{email_payload, get_request, parse_json, post_request, test_api, transaction_payload};

const TX_PATH: &str = "/webhooks/mondo/transaction";
const EMAIL_PATH: &str = "/webhooks/email";

#[actix_web::test]
async fn transaction_is_queued() {
    let _ = env_logger::try_init().ok();
    let api = test_api();
    let (status, body) = post_request(&api, TX_PATH, &transaction_payload("t1", -1050, "AMAZON EU SARL")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(&body), json!({"success": true, "message": "Transaction queued."}));
    let pending = api.pending_transactions().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, "t1");
    assert_eq!(pending[0].amount, "10.50");
    assert_eq!(pending[0].vendor_key.as_str(), "amazon");
    assert_eq!(pending[0].currency, "GBP");
}

#[actix_web::test]
async fn credit_is_ignored() {
    let _ = env_logger::try_init().ok();
    let api = test_api();
    let (status, body) = post_request(&api, TX_PATH, &transaction_payload("t1", 1050, "Refund from amazon")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(&body), json!({"success": true, "message": "Ignored credit transaction."}));
    assert_eq!(api.pending_counts().await.unwrap(), PendingCounts::default());
}

#[actix_web::test]
async fn unknown_vendor_is_ignored() {
    let _ = env_logger::try_init().ok();
    let api = test_api();
    let (status, body) = post_request(&api, TX_PATH, &transaction_payload("t1", -350, "Coffee at Pret")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(&body)["message"], "Ignored unrecognised vendor.");
    let (status, body) = post_request(&api, EMAIL_PATH, &email_payload("e1", "Your Pret receipt", "3.50")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(&body)["message"], "Ignored unrecognised vendor.");
    assert_eq!(api.pending_counts().await.unwrap(), PendingCounts::default());
}

#[actix_web::test]
async fn transaction_then_email() {
    let _ = env_logger::try_init().ok();
    let api = test_api();
    post_request(&api, TX_PATH, &transaction_payload("t1", -1050, "AMAZON EU SARL")).await;
    let html = "<html><body>Your amazon order total was £10.50</body></html>";
    let (status, body) = post_request(&api, EMAIL_PATH, &email_payload("e1", "Your Amazon.co.uk order", html)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(&body), json!({"success": true, "message": "Receipt matched to transaction t1."}));
    assert_eq!(api.pending_counts().await.unwrap(), PendingCounts::default());
}

#[actix_web::test]
async fn email_then_transaction() {
    let _ = env_logger::try_init().ok();
    let api = test_api();
    let (_, body) = post_request(&api, EMAIL_PATH, &email_payload("e2", "Apple receipt", "Apple total 5.00")).await;
    assert_eq!(parse_json(&body)["message"], "Receipt queued.");
    let receipts = api.pending_receipts().await.unwrap();
    assert_eq!(receipts[0].body_html, "Apple total 5.00");
    assert_eq!(receipts[0].sender.as_deref(), Some("orders@example.com"));
    let (_, body) = post_request(&api, TX_PATH, &transaction_payload("t2", -500, "APPLE.COM/BILL")).await;
    assert_eq!(parse_json(&body)["message"], "Transaction matched to receipt e2.");
    assert_eq!(api.pending_counts().await.unwrap(), PendingCounts::default());
}

#[actix_web::test]
async fn padded_email_body_is_accepted() {
    let _ = env_logger::try_init().ok();
    let api = test_api();
    let payload = json!({
        "id": "e1",
        "subject": "Beatport order",
        "body_html": base64::encode_config("Total: 3.00?>", base64::URL_SAFE),
    })
    .to_string();
    let (status, body) = post_request(&api, EMAIL_PATH, &payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(&body)["success"], true);
    let receipts = api.pending_receipts().await.unwrap();
    assert_eq!(receipts[0].body_html, "Total: 3.00?>");
    assert_eq!(receipts[0].sender, None);
}

#[actix_web::test]
async fn malformed_json_is_rejected() {
    let _ = env_logger::try_init().ok();
    let api = test_api();
    let (status, body) = post_request(&api, TX_PATH, "{\"type\": \"transaction.created\", \"data\": ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(parse_json(&body)["error"].as_str().unwrap().starts_with("Could not read request body"));
    let (status, _) = post_request(&api, EMAIL_PATH, "{\"id\": \"e1\"}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn undecodable_body_is_rejected() {
    let _ = env_logger::try_init().ok();
    let api = test_api();
    let payload = json!({"id": "e1", "subject": "amazon", "body_html": "***"}).to_string();
    let (status, body) = post_request(&api, EMAIL_PATH, &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(parse_json(&body)["error"].as_str().unwrap().contains("base64url"));
    assert_eq!(api.pending_counts().await.unwrap(), PendingCounts::default());
}

#[actix_web::test]
async fn missing_id_is_reported() {
    let _ = env_logger::try_init().ok();
    let api = test_api();
    let (status, body) = post_request(&api, EMAIL_PATH, &email_payload("", "amazon order", "1.00")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(&body), json!({"success": false, "message": "A receipt was submitted without an identifier."}));
}

#[actix_web::test]
async fn pending_snapshot() {
    let _ = env_logger::try_init().ok();
    let api = test_api();
    post_request(&api, TX_PATH, &transaction_payload("t3", -300, "Beatport Ltd")).await;
    post_request(&api, EMAIL_PATH, &email_payload("e3", "Your beatport purchase", "no amount mentioned here")).await;
    let (status, body) = get_request(&api, "/pending").await;
    assert_eq!(status, StatusCode::OK);
    let snapshot = parse_json(&body);
    assert_eq!(snapshot["counts"], json!({"transactions": 1, "receipts": 1}));
    assert_eq!(snapshot["transactions"][0]["id"], "t3");
    assert_eq!(snapshot["transactions"][0]["amount"], "3.00");
    assert_eq!(snapshot["transactions"][0]["vendor"], "beatport");
    assert_eq!(snapshot["receipts"][0]["message_id"], "e3");
    assert_eq!(snapshot["receipts"][0]["subject"], "Your beatport purchase");
    assert!(snapshot["receipts"][0].get("body_html").is_none());
}

#[actix_web::test]
async fn matches_reach_the_event_handler() {
    let _ = env_logger::try_init().ok();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen2 = seen.clone();
    let mut hooks = EventHooks::default();
    hooks.on_match_found(move |ev| {
        let seen = seen.clone();
        Box::pin(async move {
            let pair = (ev.matched.transaction.id.clone(), ev.matched.receipt.message_id.clone());
            seen.lock().unwrap().push(pair);
        }) as Pin<Box<dyn Future<Output = ()> + Send>>
    });
    let handlers = EventHandlers::new(5, hooks);
    let api = MatchingApi::new(MemoryStore::new(), handlers.producers());
    let handler = handlers.on_match_found.expect("handler was registered");

    post_request(&api, TX_PATH, &transaction_payload("t1", -1050, "amazon")).await;
    post_request(&api, EMAIL_PATH, &email_payload("e1", "amazon order", "total 10.50")).await;
    // The handler finishes once the last producer is gone
    drop(api);
    handler.start_handler().await;
    assert_eq!(*seen2.lock().unwrap(), vec![("t1".to_string(), "e1".to_string())]);
}
