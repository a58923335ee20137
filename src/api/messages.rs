//! Messages: newsletters, autoresponders and drafts.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::{params, to_params};
use crate::Client;
use crate::Error;
use crate::transport::Dispatch;

/// Kind of message, as used by the `type` filter of `get_messages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// A one-off broadcast.
    Newsletter,
    /// A message sent on a given day of the contact's cycle.
    Autoresponder,
    /// An unsent message.
    Draft,
}

impl MessageType {
    /// Returns the name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Newsletter => "newsletter",
            MessageType::Autoresponder => "autoresponder",
            MessageType::Draft => "draft",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time buckets of `get_message_stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsGrouping {
    /// One bucket per hour.
    Hourly,
    /// One bucket per day.
    Daily,
    /// One bucket per month.
    Monthly,
    /// One bucket per year.
    #[default]
    Yearly,
}

/// Body of a message. At least one part should be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContents {
    /// HTML part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Plain text part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain: Option<String>,
}

impl MessageContents {
    /// Returns `true` if neither part is set.
    pub fn is_empty(&self) -> bool {
        self.html.is_none() && self.plain.is_none()
    }
}

/// Parameters of `add_autoresponder`.
///
/// ```rust
/// use getresponse::AutoresponderRequest;
///
/// let request = AutoresponderRequest::new("CAMPAIGN_ID", "Welcome!", 1)
///     .with_plain("Thanks for joining.")
///     .with_flag("clicktrack");
/// assert_eq!(request.day_of_cycle, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoresponderRequest {
    /// Campaign ID.
    pub campaign: String,
    /// Subject line.
    pub subject: String,
    /// Day of the contact's cycle on which the message goes out.
    pub day_of_cycle: u32,
    /// Message body.
    #[serde(skip_serializing_if = "MessageContents::is_empty")]
    pub contents: MessageContents,
    /// From-field ID, see `get_account_from_fields`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_field: Option<String>,
    /// Extra features: `clicktrack`, `subscription_reminder`, `openrate`,
    /// `google_analytics`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<String>,
}

impl AutoresponderRequest {
    /// Creates a request with no body, from field or flags.
    pub fn new(campaign: impl Into<String>, subject: impl Into<String>, day_of_cycle: u32) -> Self {
        Self {
            campaign: campaign.into(),
            subject: subject.into(),
            day_of_cycle,
            contents: MessageContents::default(),
            from_field: None,
            flags: Vec::new(),
        }
    }

    /// Sets the HTML part.
    #[must_use]
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.contents.html = Some(html.into());
        self
    }

    /// Sets the plain text part.
    #[must_use]
    pub fn with_plain(mut self, plain: impl Into<String>) -> Self {
        self.contents.plain = Some(plain.into());
        self
    }

    /// Sets the from-field ID.
    #[must_use]
    pub fn with_from_field(mut self, from_field: impl Into<String>) -> Self {
        self.from_field = Some(from_field.into());
        self
    }

    /// Adds a feature flag.
    #[must_use]
    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flags.push(flag.into());
        self
    }
}

impl<D: Dispatch> Client<D> {
    /// Lists messages, keyed by message ID, optionally narrowed to some
    /// campaigns and to one kind of message.
    pub fn get_messages(
        &self,
        campaigns: Option<&[&str]>,
        message_type: Option<MessageType>,
    ) -> Result<D::Output, Error> {
        let mut map = Map::new();
        if let Some(campaigns) = campaigns {
            map.insert("campaigns".into(), json!(campaigns));
        }
        if let Some(message_type) = message_type {
            map.insert("type".into(), Value::from(message_type.as_str()));
        }
        self.execute("get_messages", Some(map))
    }

    /// Gets one message by ID.
    pub fn get_message(&self, id: &str) -> Result<D::Output, Error> {
        self.execute("get_message", params(json!({"message": id})))
    }

    /// Gets the HTML and plain text parts of a message.
    pub fn get_message_contents(&self, id: &str) -> Result<D::Output, Error> {
        self.execute("get_message_contents", params(json!({"message": id})))
    }

    /// Gets delivery statistics of a message, bucketed by `grouping`.
    pub fn get_message_stats(&self, id: &str, grouping: StatsGrouping) -> Result<D::Output, Error> {
        self.execute(
            "get_message_stats",
            params(json!({"message": id, "grouping": grouping})),
        )
    }

    /// Adds an autoresponder to a campaign.
    pub fn add_autoresponder(&self, request: &AutoresponderRequest) -> Result<D::Output, Error> {
        self.execute("add_autoresponder", to_params(request)?)
    }

    /// Deletes an autoresponder by message ID.
    pub fn delete_autoresponder(&self, id: &str) -> Result<D::Output, Error> {
        self.execute("delete_autoresponder", params(json!({"message": id})))
    }
}
