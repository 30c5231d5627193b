use std::env;

use chrono::Duration;
use log::*;
use mondo_tools::{Html2PngConfig, MondoConfig};
use rap_common::parse_boolean_flag;
use receipt_matching_engine::{vendor::DEFAULT_VENDORS, VendorList};

const DEFAULT_RAP_HOST: &str = "127.0.0.1";
const DEFAULT_RAP_PORT: u16 = 8360;
const DEFAULT_EXPIRY_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);

/// The path the bank posts transactions to. Used when registering the webhook on startup.
pub const TRANSACTION_WEBHOOK_PATH: &str = "/webhooks/mondo/transaction";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Vendor tokens, in priority order.
    pub vendors: VendorList,
    /// The externally reachable base url of this server, e.g. `https://receipts.example.com`.
    pub public_url: Option<String>,
    /// If true, a feed item is posted to the account for every receipt that gets attached.
    pub feed_items: bool,
    /// Unmatched items older than this are dropped. `None` keeps them forever.
    pub pending_ttl: Option<Duration>,
    /// How often the expiry worker runs. Ignored when `pending_ttl` is `None`.
    pub expiry_interval: std::time::Duration,
    pub mondo_config: MondoConfig,
    pub html2png_config: Html2PngConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RAP_HOST.to_string(),
            port: DEFAULT_RAP_PORT,
            vendors: VendorList::from_csv(DEFAULT_VENDORS),
            public_url: None,
            feed_items: false,
            pending_ttl: None,
            expiry_interval: DEFAULT_EXPIRY_INTERVAL,
            mondo_config: MondoConfig::default(),
            html2png_config: Html2PngConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("RAP_HOST").ok().unwrap_or_else(|| DEFAULT_RAP_HOST.into());
        let port = env::var("RAP_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for RAP_PORT. {e} Using the default, {DEFAULT_RAP_PORT}, instead."
                    );
                    DEFAULT_RAP_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_RAP_PORT);
        let vendors = configure_vendors(env::var("RAP_VENDORS").ok());
        let public_url = env::var("RAP_PUBLIC_URL")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());
        let feed_items = parse_boolean_flag(env::var("RAP_FEED_ITEMS").ok(), false);
        let pending_ttl = parse_pending_ttl(env::var("RAP_PENDING_TTL_MINUTES").ok());
        let expiry_interval = parse_expiry_interval(env::var("RAP_EXPIRY_INTERVAL_SECS").ok());
        let mondo_config = MondoConfig::new_from_env_or_default();
        let html2png_config = Html2PngConfig::new_from_env_or_default();
        Self {
            host,
            port,
            vendors,
            public_url,
            feed_items,
            pending_ttl,
            expiry_interval,
            mondo_config,
            html2png_config,
        }
    }

    /// The full url of the transaction webhook, if both an account and a public url have been configured.
    pub fn transaction_webhook_url(&self) -> Option<String> {
        match (&self.mondo_config.account_id, &self.public_url) {
            (Some(_), Some(url)) => Some(format!("{url}{TRANSACTION_WEBHOOK_PATH}")),
            _ => None,
        }
    }
}

fn configure_vendors(value: Option<String>) -> VendorList {
    let vendors = match value {
        Some(s) => {
            let vendors = VendorList::from_csv(&s);
            if vendors.is_empty() {
                warn!("🪛️ RAP_VENDORS is set, but contains no vendors. Using the default list, {DEFAULT_VENDORS}.");
                VendorList::from_csv(DEFAULT_VENDORS)
            } else {
                vendors
            }
        },
        None => {
            info!("🪛️ RAP_VENDORS is not set. Using the default list, {DEFAULT_VENDORS}.");
            VendorList::from_csv(DEFAULT_VENDORS)
        },
    };
    info!("🪛️ Matching receipts for vendors: {vendors}");
    vendors
}

fn parse_pending_ttl(value: Option<String>) -> Option<Duration> {
    let Some(s) = value else {
        info!("🪛️ RAP_PENDING_TTL_MINUTES is not set. Unmatched transactions and receipts will be kept indefinitely.");
        return None;
    };
    match s.trim().parse::<i64>() {
        Ok(m) if m > 0 => match Duration::try_minutes(m) {
            Some(ttl) => {
                info!("🪛️ Unmatched transactions and receipts will expire after {m} minutes.");
                Some(ttl)
            },
            None => {
                warn!("🪛️ RAP_PENDING_TTL_MINUTES is out of range ({m}). Pending items will never expire.");
                None
            },
        },
        Ok(m) => {
            warn!("🪛️ RAP_PENDING_TTL_MINUTES must be positive, but was {m}. Pending items will never expire.");
            None
        },
        Err(e) => {
            warn!("🪛️ Invalid configuration value for RAP_PENDING_TTL_MINUTES. {e}. Pending items will never expire.");
            None
        },
    }
}

fn parse_expiry_interval(value: Option<String>) -> std::time::Duration {
    value
        .and_then(|s| {
            s.trim()
                .parse::<u64>()
                .map_err(|e| warn!("🪛️ Invalid configuration value for RAP_EXPIRY_INTERVAL_SECS. {e}"))
                .ok()
        })
        .filter(|&secs| secs > 0)
        .map(std::time::Duration::from_secs)
        .unwrap_or(DEFAULT_EXPIRY_INTERVAL)
}
