use actix_web::{http::StatusCode, test, test::TestRequest, web, App};
use log::debug;
use receipt_matching_engine::{
    events::EventProducers,
    vendor::DEFAULT_VENDORS,
    MatchingApi,
    MemoryStore,
    VendorList,
};
use serde_json::{json, Value};

use crate::{
    routes::{health, PendingRoute},
    server::json_config,
    webhook_routes::{EmailWebhookRoute, TransactionWebhookRoute},
};

pub fn test_api() -> MatchingApi<MemoryStore> {
    MatchingApi::new(MemoryStore::new(), EventProducers::default())
}

pub async fn get_request(api: &MatchingApi<MemoryStore>, path: &str) -> (StatusCode, String) {
    call(api, TestRequest::get().uri(path)).await
}

pub async fn post_request(api: &MatchingApi<MemoryStore>, path: &str, body: &str) -> (StatusCode, String) {
    let req = TestRequest::post()
        .uri(path)
        .insert_header(("content-type", "application/json"))
        .set_payload(body.to_string());
    call(api, req).await
}

async fn call(api: &MatchingApi<MemoryStore>, req: TestRequest) -> (StatusCode, String) {
    let app = App::new()
        .app_data(web::Data::new(api.clone()))
        .app_data(web::Data::new(VendorList::from_csv(DEFAULT_VENDORS)))
        .app_data(json_config())
        .service(health)
        .service(PendingRoute::<MemoryStore>::new())
        .service(TransactionWebhookRoute::<MemoryStore>::new())
        .service(EmailWebhookRoute::<MemoryStore>::new());
    let service = test::init_service(app).await;
    debug!("Making request");
    let res = test::call_service(&service, req.to_request()).await;
    let status = res.status();
    let body = test::read_body(res).await;
    (status, String::from_utf8_lossy(&body).into_owned())
}

pub fn transaction_payload(id: &str, amount: i64, description: &str) -> String {
    json!({
        "type": "transaction.created",
        "data": {
            "account_id": "acc_00008gju41AHyfLUzBUk8A",
            "id": id,
            "amount": amount,
            "created": "2015-09-04T14:28:40Z",
            "currency": "GBP",
            "description": description,
        }
    })
    .to_string()
}

pub fn email_payload(id: &str, subject: &str, html: &str) -> String {
    json!({
        "id": id,
        "subject": subject,
        "sender": "orders@example.com",
        "body_html": base64::encode_config(html, base64::URL_SAFE_NO_PAD),
    })
    .to_string()
}

pub fn parse_json(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|e| panic!("Response was not JSON. {e}: {body}"))
}
