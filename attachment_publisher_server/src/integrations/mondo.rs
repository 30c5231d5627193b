use futures::future::BoxFuture;
use log::*;
use mondo_tools::{FeedItem, Html2PngApi, Html2PngConfig, MondoApi, MondoConfig};
use receipt_matching_engine::{
    events::{EventHandlers, EventHooks, MatchFoundEvent},
    Match,
};

use crate::errors::ServerError;

pub const MONDO_EVENT_BUFFER_SIZE: usize = 25;
pub const ATTACHMENT_FILE_TYPE: &str = "image/png";
const FEED_ITEM_TITLE: &str = "Receipt attached";

/// Assigns the match handler that publishes receipts to the bank.
///
/// For every [`MatchFoundEvent`]:
/// 1. The receipt's HTML body is rendered to a PNG by the html2png service.
/// 2. The image is registered as an attachment on the matched transaction.
/// 3. If `feed_items` is true and an account id is configured, a feed item announcing the receipt is posted.
///
/// A failure at any step is logged and the remaining steps are skipped. Nothing is retried.
pub fn create_mondo_event_handlers(
    mondo_config: MondoConfig,
    html2png_config: Html2PngConfig,
    feed_items: bool,
) -> Result<EventHandlers, ServerError> {
    let mut hooks = EventHooks::default();
    let feed_account = match (feed_items, &mondo_config.account_id) {
        (true, Some(account)) => Some(account.clone()),
        (true, None) => {
            warn!("🏦️ Feed items are enabled, but RAP_MONDO_ACCOUNT_ID is not set. No feed items will be posted.");
            None
        },
        (false, _) => None,
    };
    let api = MondoApi::new(mondo_config).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let renderer = Html2PngApi::new(html2png_config).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    hooks.on_match_found(move |ev| -> BoxFuture<'static, ()> {
        let MatchFoundEvent { matched, .. } = ev;
        let api = api.clone();
        let renderer = renderer.clone();
        let feed_account = feed_account.clone();
        Box::pin(async move {
            publish_receipt(&api, &renderer, &matched, feed_account.as_deref()).await;
        })
    });
    Ok(EventHandlers::new(MONDO_EVENT_BUFFER_SIZE, hooks))
}

async fn publish_receipt(api: &MondoApi, renderer: &Html2PngApi, matched: &Match, feed_account: Option<&str>) {
    let tx_id = matched.transaction.id.as_str();
    let rendered = match renderer.render(&matched.receipt.body_html_base64url).await {
        Ok(r) => r,
        Err(e) => {
            error!("🖼️ Could not render receipt {} for transaction {tx_id}. {e}", matched.receipt.message_id);
            return;
        },
    };
    match api.register_attachment(tx_id, &rendered.uri, ATTACHMENT_FILE_TYPE).await {
        Ok(res) => info!(
            "🏦️ Receipt {} attached to transaction {tx_id} as {}",
            matched.receipt.message_id, res.attachment.id
        ),
        Err(e) => {
            error!("🏦️ Could not attach receipt {} to transaction {tx_id}. {e}", matched.receipt.message_id);
            return;
        },
    }
    if let Some(account_id) = feed_account {
        let item = feed_item_for(account_id, matched, &rendered.uri);
        match api.create_feed_item(&item).await {
            Ok(()) => info!("🏦️ Feed item posted for transaction {tx_id}"),
            Err(e) => error!("🏦️ Could not post feed item for transaction {tx_id}. {e}"),
        }
    }
}

fn feed_item_for(account_id: &str, matched: &Match, image_url: &str) -> FeedItem {
    let tx = &matched.transaction;
    let body = if tx.currency.is_empty() {
        format!("{} {}", tx.vendor_key, tx.amount)
    } else {
        format!("{} {} {}", tx.vendor_key, tx.amount, tx.currency)
    };
    FeedItem::basic(account_id.to_string(), FEED_ITEM_TITLE.to_string(), image_url.to_string(), body)
}
