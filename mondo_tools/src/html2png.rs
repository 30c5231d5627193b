use std::sync::Arc;

use log::*;
use reqwest::{header::CONTENT_TYPE, Client};

use crate::{config::Html2PngConfig, data_objects::RenderResponse, RenderError};

/// Client for the HTML to PNG rendering service.
///
/// The service takes a base64url encoded HTML document as a `text/plain` body, renders it, hosts the resulting image
/// and replies with `{"uri": "<image url>"}`.
#[derive(Clone)]
pub struct Html2PngApi {
    config: Html2PngConfig,
    client: Arc<Client>,
}

impl Html2PngApi {
    pub fn new(config: Html2PngConfig) -> Result<Self, RenderError> {
        let client = Client::builder().build().map_err(|e| RenderError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub async fn render(&self, body_base64url: &str) -> Result<RenderResponse, RenderError> {
        debug!("🖼️ POST uri={} length={}", self.config.post_uri, body_base64url.len());
        let response = self
            .client
            .post(&self.config.post_uri)
            .header(CONTENT_TYPE, "text/plain")
            .body(body_base64url.to_string())
            .send()
            .await
            .map_err(|e| RenderError::RequestError(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            return Err(RenderError::RenderFailed { status: status.as_u16(), message });
        }
        let result = response.json::<RenderResponse>().await.map_err(|e| RenderError::JsonError(e.to_string()))?;
        info!("🖼️ Receipt rendered to {}", result.uri);
        Ok(result)
    }
}
