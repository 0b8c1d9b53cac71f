//! Wire shapes for the closed set of webhook message variants.
//!
//! Field names mirror the remote API exactly (`picUrl`, `singleURL`,
//! `btnOrientation`, ...). No value validation happens here: empty strings
//! and malformed URLs pass through unchanged, the endpoint is the judge.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Plain text message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub content: String,
}

/// Link card: preview text, title, picture, and the URL the click opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    pub title: String,
    #[serde(rename = "picUrl")]
    pub pic_url: String,
    #[serde(rename = "messageUrl")]
    pub message_url: String,
}

/// Markdown message. Only a subset of markdown renders in chat clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markdown {
    pub title: String,
    pub text: String,
}

/// Action card whose whole surface is one jump button.
///
/// Setting `singleTitle`/`singleURL` is what distinguishes this form on the
/// wire; it must never carry a `btns` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleActionCard {
    pub title: String,
    pub text: String,
    /// `"0"` stacks buttons vertically, `"1"` lays them out horizontally.
    #[serde(rename = "btnOrientation")]
    pub btn_orientation: String,
    #[serde(rename = "singleTitle")]
    pub single_title: String,
    #[serde(rename = "singleURL")]
    pub single_url: String,
}

/// Action card with an ordered list of independently targeted buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiActionCard {
    pub title: String,
    pub text: String,
    #[serde(rename = "btnOrientation")]
    pub btn_orientation: String,
    pub btns: Vec<ActionCardButton>,
}

/// One button on a [`MultiActionCard`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCardButton {
    pub title: String,
    #[serde(rename = "actionURL")]
    pub action_url: String,
}

/// Feed card: an ordered list of headline rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedCard {
    pub links: Vec<FeedCardLink>,
}

/// One row of a [`FeedCard`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedCardLink {
    pub title: String,
    #[serde(rename = "messageURL")]
    pub message_url: String,
    #[serde(rename = "picURL")]
    pub pic_url: String,
}

/// The closed set of message variants the webhook accepts.
///
/// Both action card forms share the `actionCard` envelope tag; the remote
/// API tells them apart by the presence of `btns` versus
/// `singleTitle`/`singleURL`, so they stay separate variants instead of one
/// struct with optional fields. Dispatch is an exhaustive match, there is
/// no open-ended fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Text(Text),
    Link(Link),
    Markdown(Markdown),
    SingleActionCard(SingleActionCard),
    MultiActionCard(MultiActionCard),
    FeedCard(FeedCard),
}

impl Message {
    /// Returns the tag carried in the envelope's outer `msgtype` field.
    pub fn msg_type(&self) -> &'static str {
        match self {
            Message::Text(_) => "text",
            Message::Link(_) => "link",
            Message::Markdown(_) => "markdown",
            Message::SingleActionCard(_) | Message::MultiActionCard(_) => "actionCard",
            Message::FeedCard(_) => "feedCard",
        }
    }

    /// Wire-encodes the variant payload. The tag only ever appears at the
    /// envelope level, never inside the payload itself.
    pub fn payload(&self) -> Result<Value, serde_json::Error> {
        match self {
            Message::Text(inner) => serde_json::to_value(inner),
            Message::Link(inner) => serde_json::to_value(inner),
            Message::Markdown(inner) => serde_json::to_value(inner),
            Message::SingleActionCard(inner) => serde_json::to_value(inner),
            Message::MultiActionCard(inner) => serde_json::to_value(inner),
            Message::FeedCard(inner) => serde_json::to_value(inner),
        }
    }
}

impl From<Text> for Message {
    fn from(inner: Text) -> Self {
        Message::Text(inner)
    }
}

impl From<Link> for Message {
    fn from(inner: Link) -> Self {
        Message::Link(inner)
    }
}

impl From<Markdown> for Message {
    fn from(inner: Markdown) -> Self {
        Message::Markdown(inner)
    }
}

impl From<SingleActionCard> for Message {
    fn from(inner: SingleActionCard) -> Self {
        Message::SingleActionCard(inner)
    }
}

impl From<MultiActionCard> for Message {
    fn from(inner: MultiActionCard) -> Self {
        Message::MultiActionCard(inner)
    }
}

impl From<FeedCard> for Message {
    fn from(inner: FeedCard) -> Self {
        Message::FeedCard(inner)
    }
}

/// A bare string is shorthand for a text message.
impl From<String> for Message {
    fn from(content: String) -> Self {
        Message::Text(Text { content })
    }
}

impl From<&str> for Message {
    fn from(content: &str) -> Self {
        Message::Text(Text {
            content: content.to_string(),
        })
    }
}
