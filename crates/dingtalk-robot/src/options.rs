//! Per-call settings resolved onto fixed defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timeout applied when no override is given.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Who to @-mention when the message lands in the chat.
///
/// Serializes as the envelope's `at` block. The block is attached only when
/// at least one field is non-default; an all-default mention is omitted
/// entirely rather than sent as an empty object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    #[serde(rename = "isAtAll")]
    pub at_all: bool,
    #[serde(rename = "atMobiles")]
    pub mobiles: Vec<String>,
    #[serde(rename = "atUserIds")]
    pub user_ids: Vec<String>,
}

impl Mention {
    /// True when every field still holds its default value.
    pub fn is_default(&self) -> bool {
        !self.at_all && self.mobiles.is_empty() && self.user_ids.is_empty()
    }
}

/// Options for one `send` call: timeout plus mention metadata.
///
/// Start from [`SendOptions::default`] and chain `with_*` overrides. Each
/// method touches exactly one logical field; independent fields do not
/// interact, and setting the same field twice keeps the later value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOptions {
    timeout: Duration,
    mention: Mention,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            mention: Mention::default(),
        }
    }
}

impl SendOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Mentions everyone in the chat. Text and markdown messages render it.
    pub fn with_at_all(mut self, at_all: bool) -> Self {
        self.mention.at_all = at_all;
        self
    }

    /// Mentions participants by mobile number.
    pub fn with_at_mobiles<I, S>(mut self, mobiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mention.mobiles = mobiles.into_iter().map(Into::into).collect();
        self
    }

    /// Mentions participants by user id.
    pub fn with_at_user_ids<I, S>(mut self, user_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mention.user_ids = user_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn mention(&self) -> &Mention {
        &self.mention
    }
}
