use log::*;
use rap_common::Secret;

pub const DEFAULT_MONDO_API_URL: &str = "https://staging-api.gmon.io";
pub const DEFAULT_HTML2PNG_POST_URI: &str = "http://127.0.0.1:3000/render";

#[derive(Debug, Clone, Default)]
pub struct MondoConfig {
    /// Base url of the bank API, without a trailing slash.
    pub api_url: String,
    pub access_token: Secret<String>,
    /// The account that webhooks and feed items are registered against. Optional, since attachments only need the
    /// transaction id.
    pub account_id: Option<String>,
}

impl MondoConfig {
    pub fn new_from_env_or_default() -> Self {
        let api_url = std::env::var("RAP_MONDO_API_URL").unwrap_or_else(|_| {
            warn!("RAP_MONDO_API_URL not set, using {DEFAULT_MONDO_API_URL} as default");
            DEFAULT_MONDO_API_URL.to_string()
        });
        let access_token = Secret::new(std::env::var("RAP_MONDO_ACCESS_TOKEN").unwrap_or_else(|_| {
            error!("RAP_MONDO_ACCESS_TOKEN not set. Attachments cannot be registered without it.");
            String::default()
        }));
        let account_id = std::env::var("RAP_MONDO_ACCOUNT_ID").ok().filter(|s| !s.trim().is_empty());
        Self { api_url: api_url.trim_end_matches('/').to_string(), access_token, account_id }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Html2PngConfig {
    /// The endpoint that accepts a base64url encoded HTML document and responds with the uri of the rendered image.
    pub post_uri: String,
}

impl Html2PngConfig {
    pub fn new_from_env_or_default() -> Self {
        let post_uri = std::env::var("RAP_HTML2PNG_POST_URI").unwrap_or_else(|_| {
            warn!("RAP_HTML2PNG_POST_URI not set, using (probably useless) default {DEFAULT_HTML2PNG_POST_URI}");
            DEFAULT_HTML2PNG_POST_URI.to_string()
        });
        Self { post_uri }
    }
}
