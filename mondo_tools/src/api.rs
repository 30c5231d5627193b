use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client,
    Method,
    RequestBuilder,
};
use serde::de::DeserializeOwned;

use crate::{
    config::MondoConfig,
    data_objects::{FeedItem, RegisterAttachmentResponse, RegisterWebhookResponse},
    MondoApiError,
};

/// A thin client for the bank's REST API. Every call is authenticated with the configured bearer token.
#[derive(Clone)]
pub struct MondoApi {
    config: MondoConfig,
    client: Arc<Client>,
}

impl MondoApi {
    pub fn new(config: MondoConfig) -> Result<Self, MondoApiError> {
        let mut headers = HeaderMap::with_capacity(1);
        let mut val = HeaderValue::from_str(&format!("Bearer {}", config.access_token.reveal()))
            .map_err(|e| MondoApiError::Initialization(e.to_string()))?;
        val.set_sensitive(true);
        headers.insert(AUTHORIZATION, val);
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| MondoApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn config(&self) -> &MondoConfig {
        &self.config
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_url)
    }

    /// Sends a request with an optional form-encoded body and returns the raw successful response text.
    async fn send(&self, method: Method, path: &str, form: &[(&str, &str)]) -> Result<String, MondoApiError> {
        let url = self.url(path);
        trace!("🏦️ Sending {method} request: {url}");
        let mut req: RequestBuilder = self.client.request(method, url);
        if !form.is_empty() {
            req = req.form(form);
        }
        let response = req.send().await.map_err(|e| MondoApiError::RestResponseError(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| MondoApiError::RestResponseError(e.to_string()))?;
        if status.is_success() {
            trace!("🏦️ Request successful. {status}");
            Ok(text)
        } else {
            Err(MondoApiError::QueryError { status: status.as_u16(), message: text })
        }
    }

    async fn form_query<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<T, MondoApiError> {
        let text = self.send(method, path, form).await?;
        serde_json::from_str(&text).map_err(|e| MondoApiError::JsonError(e.to_string()))
    }

    /// Attach the file at `file_url` to the transaction `external_id`.
    pub async fn register_attachment(
        &self,
        external_id: &str,
        file_url: &str,
        file_type: &str,
    ) -> Result<RegisterAttachmentResponse, MondoApiError> {
        debug!("🏦️ Registering attachment for external_id={external_id} file_url={file_url} file_type={file_type}");
        let form = [("external_id", external_id), ("file_type", file_type), ("file_url", file_url)];
        let result = self.form_query::<RegisterAttachmentResponse>(Method::POST, "/attachment/register", &form).await?;
        info!("🏦️ Attachment {} registered against {external_id}", result.attachment.id);
        Ok(result)
    }

    /// Ask the bank to post transaction events for `account_id` to `url`.
    pub async fn register_webhook(&self, account_id: &str, url: &str) -> Result<RegisterWebhookResponse, MondoApiError> {
        debug!("🏦️ Registering webhook for account_id={account_id} url={url}");
        let form = [("account_id", account_id), ("url", url)];
        let result = self.form_query::<RegisterWebhookResponse>(Method::POST, "/webhooks", &form).await?;
        info!("🏦️ Webhook {} registered for {account_id}", result.webhook.id);
        Ok(result)
    }

    pub async fn unregister_webhook(&self, webhook_id: &str) -> Result<(), MondoApiError> {
        debug!("🏦️ Unregistering webhook {webhook_id}");
        let path = format!("/webhooks/{webhook_id}");
        self.send(Method::DELETE, &path, &[]).await?;
        info!("🏦️ Webhook {webhook_id} unregistered");
        Ok(())
    }

    pub async fn create_feed_item(&self, item: &FeedItem) -> Result<(), MondoApiError> {
        debug!("🏦️ Creating feed item for account_id={} title={}", item.account_id, item.title);
        self.send(Method::POST, "/feed", &item.form_fields()).await?;
        Ok(())
    }
}
