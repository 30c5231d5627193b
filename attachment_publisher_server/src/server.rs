use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use log::*;
use mondo_tools::{MondoApi, MondoConfig};
use receipt_matching_engine::{MatchingApi, MemoryStore};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    expiry_worker::start_expiry_worker,
    integrations::mondo::create_mondo_event_handlers,
    routes::{health, PendingRoute},
    webhook_routes::{EmailWebhookRoute, TransactionWebhookRoute},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let handlers = create_mondo_event_handlers(
        config.mondo_config.clone(),
        config.html2png_config.clone(),
        config.feed_items,
    )?;
    let api = MatchingApi::new(MemoryStore::new(), handlers.producers());
    handlers.start_handlers().await;
    match config.pending_ttl {
        Some(ttl) => {
            let _ = start_expiry_worker(api.clone(), ttl, config.expiry_interval);
        },
        None => info!("🕰️ No TTL configured. Pending items are kept until they are matched."),
    }
    let webhook = register_transaction_webhook(&config).await;
    let mondo_config = config.mondo_config.clone();
    let srv = create_server_instance(config, api)?;
    let result = srv.await.map_err(|e| ServerError::Unspecified(e.to_string()));
    if let Some(webhook_id) = webhook {
        unregister_transaction_webhook(mondo_config, &webhook_id).await;
    }
    result
}

pub fn create_server_instance(config: ServerConfig, api: MatchingApi<MemoryStore>) -> Result<Server, ServerError> {
    let vendors = config.vendors.clone();
    let srv = HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("rap::access_log"))
            .app_data(web::Data::new(api.clone()))
            .app_data(web::Data::new(vendors.clone()))
            .app_data(json_config())
            .service(health)
            .service(PendingRoute::<MemoryStore>::new())
            .service(TransactionWebhookRoute::<MemoryStore>::new())
            .service(EmailWebhookRoute::<MemoryStore>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}

/// Malformed JSON bodies are answered with the same `{"error": ...}` shape as every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!("💻️ Could not deserialize request body. {err}");
        ServerError::InvalidRequestBody(err.to_string()).into()
    })
}

/// Asks the bank to post transactions to this server. Only happens if both the account id and the public url are
/// known. Failures are logged, and the server carries on; the webhook may have been registered by other means.
///
/// Returns the id of the new webhook, so that it can be removed again on shutdown.
async fn register_transaction_webhook(config: &ServerConfig) -> Option<String> {
    let (Some(account_id), Some(url)) = (&config.mondo_config.account_id, config.transaction_webhook_url()) else {
        info!("🏦️ RAP_MONDO_ACCOUNT_ID or RAP_PUBLIC_URL is not set. Skipping webhook registration.");
        return None;
    };
    let api = match MondoApi::new(config.mondo_config.clone()) {
        Ok(api) => api,
        Err(e) => {
            error!("🏦️ Could not create the bank API client. {e}");
            return None;
        },
    };
    match api.register_webhook(account_id, &url).await {
        Ok(res) => {
            info!("🏦️ Transaction webhook {} points at {}", res.webhook.id, res.webhook.url);
            Some(res.webhook.id)
        },
        Err(e) => {
            error!("🏦️ Could not register the transaction webhook at {url}. {e}");
            None
        },
    }
}

/// Removes a webhook registered by [`register_transaction_webhook`], so the bank stops posting to a server that is
/// no longer listening.
async fn unregister_transaction_webhook(config: MondoConfig, webhook_id: &str) {
    let result = match MondoApi::new(config) {
        Ok(api) => api.unregister_webhook(webhook_id).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(()) => info!("🏦️ Transaction webhook {webhook_id} removed"),
        Err(e) => warn!("🏦️ Could not remove transaction webhook {webhook_id}. {e}"),
    }
}
