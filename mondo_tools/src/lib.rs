//! REST clients for the services the attachment publisher talks to:
//!
//! * [`MondoApi`] for the bank API: attachment registration, webhook management and feed items.
//! * [`Html2PngApi`] for the rendering service that turns a receipt's HTML body into a PNG and hosts it.
//!
//! The bank's incoming webhook payload types live in [`data_objects`] as well, since they are part of the same wire
//! contract.
mod api;
mod config;
pub mod data_objects;
mod error;
mod html2png;

pub use api::MondoApi;
pub use config::{Html2PngConfig, MondoConfig};
pub use data_objects::{
    Attachment,
    FeedItem,
    RegisterAttachmentResponse,
    RegisterWebhookResponse,
    RenderResponse,
    TransactionData,
    Webhook,
    WebhookRequest,
};
pub use error::{MondoApiError, RenderError};
pub use html2png::Html2PngApi;
