//! The webhook bot client: envelope assembly, signing, dispatch.

use std::sync::Arc;

use reqwest::{Client, Method};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{RobotError, RobotResult};
use crate::message::{
    FeedCard, FeedCardLink, Link, Markdown, Message, MultiActionCard, SingleActionCard, Text,
};
use crate::options::SendOptions;
use crate::sign;
use crate::transport::{ReqwestTransport, ResponseMap, Transport, TransportRequest};

/// Fixed endpoint every signed call goes to.
pub const DEFAULT_WEBHOOK_URL: &str = "https://oapi.dingtalk.com/robot/send";

/// A webhook bot bound to one access token and shared secret.
///
/// Credentials are immutable after construction, and every call builds its
/// own envelope, signature, and request, so one `Robot` can be shared
/// across tasks without coordination. The only suspension point is the
/// network round trip, bounded by the per-call timeout.
pub struct Robot {
    transport: Arc<dyn Transport>,
    webhook_url: String,
    access_token: String,
    secret: String,
}

impl Robot {
    pub fn new(access_token: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            transport: Arc::new(ReqwestTransport::default()),
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            access_token: access_token.into(),
            secret: secret.into(),
        }
    }

    /// Points the bot at a different endpoint (proxies, test servers).
    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = url.into();
        self
    }

    /// Reuses an existing `reqwest` client so connection pools are shared.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.transport = Arc::new(ReqwestTransport::new(client));
        self
    }

    /// Swaps the HTTP seam entirely (test doubles, instrumentation).
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Sends a plain text message.
    pub async fn send_text(
        &self,
        content: impl Into<String>,
        options: SendOptions,
    ) -> RobotResult<ResponseMap> {
        self.send(
            Text {
                content: content.into(),
            },
            options,
        )
        .await
    }

    /// Sends a link card.
    pub async fn send_link(&self, link: Link, options: SendOptions) -> RobotResult<ResponseMap> {
        self.send(link, options).await
    }

    /// Sends a markdown message.
    pub async fn send_markdown(
        &self,
        title: impl Into<String>,
        text: impl Into<String>,
        options: SendOptions,
    ) -> RobotResult<ResponseMap> {
        self.send(
            Markdown {
                title: title.into(),
                text: text.into(),
            },
            options,
        )
        .await
    }

    /// Sends an action card with a single whole-card button.
    pub async fn send_action_card(
        &self,
        card: SingleActionCard,
        options: SendOptions,
    ) -> RobotResult<ResponseMap> {
        self.send(card, options).await
    }

    /// Sends an action card with independently targeted buttons.
    pub async fn send_multi_action_card(
        &self,
        card: MultiActionCard,
        options: SendOptions,
    ) -> RobotResult<ResponseMap> {
        self.send(card, options).await
    }

    /// Sends a feed card.
    pub async fn send_feed_card(
        &self,
        links: Vec<FeedCardLink>,
        options: SendOptions,
    ) -> RobotResult<ResponseMap> {
        self.send(FeedCard { links }, options).await
    }

    /// Dispatches any message variant: wire-encodes the payload, merges
    /// mention metadata into the envelope, signs with the bot's secret, and
    /// hands the assembled request to the transport. Failures come back
    /// unwrapped; there is no retry.
    pub async fn send(
        &self,
        message: impl Into<Message>,
        options: SendOptions,
    ) -> RobotResult<ResponseMap> {
        let message = message.into();
        let msg_type = message.msg_type();
        let body = build_envelope(&message, &options)?;

        // Signed immediately before sending; a stale timestamp would be
        // rejected by the endpoint's tolerance window.
        let signature = sign::sign(&self.secret);
        let query = vec![
            ("access_token".to_string(), self.access_token.clone()),
            ("timestamp".to_string(), signature.timestamp),
            ("sign".to_string(), signature.sign),
        ];

        debug!(
            msg_type,
            timeout_ms = options.timeout().as_millis() as u64,
            "sending webhook message"
        );

        let response = self
            .transport
            .request(TransportRequest {
                method: Method::POST,
                url: self.webhook_url.clone(),
                query,
                body: Value::Object(body),
                timeout: options.timeout(),
            })
            .await?;

        debug!(msg_type, keys = response.len(), "webhook response decoded");
        Ok(response)
    }
}

/// Builds `{"msgtype": tag, tag: payload}` plus the optional `at` block.
/// The `at` key is attached only for a non-default mention; it is omitted
/// entirely otherwise, never sent as an empty object.
fn build_envelope(message: &Message, options: &SendOptions) -> RobotResult<Map<String, Value>> {
    let msg_type = message.msg_type();
    let payload = message.payload().map_err(RobotError::Encode)?;

    let mut body = Map::new();
    body.insert("msgtype".to_string(), Value::String(msg_type.to_string()));
    body.insert(msg_type.to_string(), payload);

    let mention = options.mention();
    if !mention.is_default() {
        let at = serde_json::to_value(mention).map_err(RobotError::Encode)?;
        body.insert("at".to_string(), at);
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(message: Message, options: SendOptions) -> Value {
        Value::Object(build_envelope(&message, &options).unwrap())
    }

    #[test]
    fn at_block_is_absent_for_default_mention() {
        let body = envelope("hello".into(), SendOptions::default());
        assert_eq!(
            body,
            json!({"msgtype": "text", "text": {"content": "hello"}})
        );
    }

    #[test]
    fn at_block_appears_for_at_all_only() {
        let body = envelope("hello".into(), SendOptions::default().with_at_all(true));
        assert_eq!(
            body["at"],
            json!({"isAtAll": true, "atMobiles": [], "atUserIds": []})
        );
    }

    #[test]
    fn at_block_appears_for_mobiles_only() {
        let body = envelope(
            "hello".into(),
            SendOptions::default().with_at_mobiles(["13800000000"]),
        );
        assert_eq!(
            body["at"],
            json!({"isAtAll": false, "atMobiles": ["13800000000"], "atUserIds": []})
        );
    }

    #[test]
    fn at_block_appears_for_user_ids_only() {
        let body = envelope(
            "hello".into(),
            SendOptions::default().with_at_user_ids(["user-1"]),
        );
        assert_eq!(
            body["at"],
            json!({"isAtAll": false, "atMobiles": [], "atUserIds": ["user-1"]})
        );
    }

    #[test]
    fn at_block_combines_all_three_fields() {
        let body = envelope(
            "hello".into(),
            SendOptions::default()
                .with_at_all(true)
                .with_at_mobiles(["13800000000"])
                .with_at_user_ids(["user-1", "user-2"]),
        );
        assert_eq!(
            body["at"],
            json!({
                "isAtAll": true,
                "atMobiles": ["13800000000"],
                "atUserIds": ["user-1", "user-2"],
            })
        );
    }

    #[test]
    fn both_action_card_forms_share_the_action_card_tag() {
        let single = envelope(
            SingleActionCard {
                title: "t".into(),
                text: "b".into(),
                btn_orientation: "0".into(),
                single_title: "Go".into(),
                single_url: "https://example.com".into(),
            }
            .into(),
            SendOptions::default(),
        );
        assert_eq!(single["msgtype"], "actionCard");
        assert!(single["actionCard"].get("singleTitle").is_some());
        assert!(single["actionCard"].get("btns").is_none());

        let multi = envelope(
            MultiActionCard {
                title: "t".into(),
                text: "b".into(),
                btn_orientation: "1".into(),
                btns: vec![],
            }
            .into(),
            SendOptions::default(),
        );
        assert_eq!(multi["msgtype"], "actionCard");
        assert!(multi["actionCard"].get("btns").is_some());
        assert!(multi["actionCard"].get("singleTitle").is_none());
    }

    #[test]
    fn envelope_nests_payload_under_the_tag() {
        let body = envelope(
            Link {
                text: "b".into(),
                title: "t".into(),
                pic_url: "p".into(),
                message_url: "m".into(),
            }
            .into(),
            SendOptions::default(),
        );
        assert_eq!(body["msgtype"], "link");
        assert_eq!(
            body["link"],
            json!({"text": "b", "title": "t", "picUrl": "p", "messageUrl": "m"})
        );
    }
}
