use serde::{Deserialize, Serialize};

//--------------------------------------   Incoming webhooks   --------------------------------------------------------
/// The envelope the bank posts to our transaction webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookRequest {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: TransactionData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionData {
    pub id: String,
    /// Minor units. Debits are negative.
    pub amount: i64,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub description: String,
}

//--------------------------------------       Webhooks        --------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    pub account_id: String,
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterWebhookResponse {
    pub webhook: Webhook,
}

//--------------------------------------      Attachments      --------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub external_id: String,
    pub file_url: String,
    pub file_type: String,
    #[serde(default)]
    pub created: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterAttachmentResponse {
    pub attachment: Attachment,
}

//--------------------------------------       Feed items      --------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub account_id: String,
    pub item_type: String,
    pub title: String,
    pub image_url: String,
    pub body: String,
}

impl FeedItem {
    /// A "basic" feed item, the only type the bank supports.
    pub fn basic<S: Into<String>>(account_id: S, title: S, image_url: S, body: S) -> Self {
        Self {
            account_id: account_id.into(),
            item_type: "basic".to_string(),
            title: title.into(),
            image_url: image_url.into(),
            body: body.into(),
        }
    }

    /// The form fields for `POST /feed`.
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("account_id", self.account_id.as_str()),
            ("type", self.item_type.as_str()),
            ("title", self.title.as_str()),
            ("image_url", self.image_url.as_str()),
            ("body", self.body.as_str()),
        ]
    }
}

//--------------------------------------        html2png       --------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderResponse {
    pub uri: String,
}
