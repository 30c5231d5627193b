//! Webhook handlers
//!
//! Both senders retry on anything outside the 200 range, so every payload that parses gets a 200 response, even when
//! it is ignored. The `success` flag and `message` in the body say what actually happened.
use actix_web::{web, HttpResponse};
use log::*;
use mondo_tools::WebhookRequest;
use rap_common::MinorUnits;
use receipt_matching_engine::{MatchingApi, PendingReceipt, PendingTransaction, ReconciliationStore, VendorList};

use crate::{
    data_objects::{EmailWebhook, JsonResponse},
    errors::ServerError,
    helpers::decode_base64url_html,
    route,
};

//----------------------------------------------   Transactions  ----------------------------------------------------
route!(transaction_webhook => Post "/webhooks/mondo/transaction" impl ReconciliationStore);
pub async fn transaction_webhook<B: ReconciliationStore>(
    body: web::Json<WebhookRequest>,
    api: web::Data<MatchingApi<B>>,
    vendors: web::Data<VendorList>,
) -> HttpResponse {
    let WebhookRequest { event_type, data } = body.into_inner();
    trace!("💻️ Received {event_type} webhook for transaction {}", data.id);
    let amount = MinorUnits::from(data.amount);
    if amount.is_credit() {
        info!("💻️ Ignored credit transaction {} ({amount})", data.id);
        return HttpResponse::Ok().json(JsonResponse::success("Ignored credit transaction."));
    }
    let Some(vendor) = vendors.classify(&data.description) else {
        info!("💻️ Ignored transaction {} from unrecognised vendor: {}", data.id, data.description);
        return HttpResponse::Ok().json(JsonResponse::success("Ignored unrecognised vendor."));
    };
    let transaction = PendingTransaction::new(data.id, amount.to_receipt_amount(), vendor.clone())
        .with_currency(data.currency)
        .with_created(data.created)
        .with_description(data.description);
    let result = match api.process_transaction(transaction).await {
        Ok(Some(m)) => JsonResponse::success(format!("Transaction matched to receipt {}.", m.receipt.message_id)),
        Ok(None) => JsonResponse::success("Transaction queued."),
        Err(e) => {
            warn!("💻️ Transaction was rejected. {e}");
            JsonResponse::failure(e)
        },
    };
    HttpResponse::Ok().json(result)
}

//----------------------------------------------   Emails  ----------------------------------------------------
route!(email_webhook => Post "/webhooks/email" impl ReconciliationStore);
pub async fn email_webhook<B: ReconciliationStore>(
    body: web::Json<EmailWebhook>,
    api: web::Data<MatchingApi<B>>,
    vendors: web::Data<VendorList>,
) -> Result<HttpResponse, ServerError> {
    let email = body.into_inner();
    trace!("💻️ Received email webhook for message {}", email.id);
    let body_html = decode_base64url_html(&email.body_html).map_err(|e| {
        warn!("💻️ Could not decode the HTML body of message {}. {e}", email.id);
        e
    })?;
    let Some(vendor) = vendors.classify(&email.subject) else {
        info!("💻️ Ignored email {} from unrecognised vendor: {}", email.id, email.subject);
        return Ok(HttpResponse::Ok().json(JsonResponse::success("Ignored unrecognised vendor.")));
    };
    let mut receipt = PendingReceipt::new(email.id, vendor.clone(), body_html).with_subject(email.subject);
    if let Some(sender) = email.sender {
        receipt = receipt.with_sender(sender);
    }
    let result = match api.process_receipt(receipt).await {
        Ok(Some(m)) => JsonResponse::success(format!("Receipt matched to transaction {}.", m.transaction.id)),
        Ok(None) => JsonResponse::success("Receipt queued."),
        Err(e) => {
            warn!("💻️ Receipt was rejected. {e}");
            JsonResponse::failure(e)
        },
    };
    Ok(HttpResponse::Ok().json(result))
}
