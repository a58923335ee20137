//! Contacts (subscribers) and their custom fields.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

use super::{TextFilter, TextOperator, name_content, params, to_params};
use crate::Client;
use crate::Error;
use crate::envelope::Params;
use crate::transport::Dispatch;

/// A filter on one custom field of a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomFilter {
    /// Custom field name.
    pub name: String,
    /// Comparison applied to the field content.
    pub content: TextFilter,
}

impl CustomFilter {
    /// Creates a custom field filter.
    pub fn new(name: impl Into<String>, content: TextFilter) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }
}

/// Conditions of a `get_contacts` query. Unset conditions are not sent, so
/// the default query lists every contact.
///
/// ```rust
/// use getresponse::{ContactQuery, TextFilter};
///
/// let query = ContactQuery::new()
///     .with_campaigns(["CAMPAIGN_ID"])
///     .with_email(TextFilter::contains("@example.com"));
/// assert!(!query.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactQuery {
    campaigns: Vec<String>,
    name: Option<TextFilter>,
    email: Option<TextFilter>,
    customs: Vec<CustomFilter>,
}

impl ContactQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Narrows the query to the given campaign IDs.
    #[must_use]
    pub fn with_campaigns<I, S>(mut self, campaigns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.campaigns.extend(campaigns.into_iter().map(Into::into));
        self
    }

    /// Filters on the contact name.
    #[must_use]
    pub fn with_name(mut self, filter: TextFilter) -> Self {
        self.name = Some(filter);
        self
    }

    /// Filters on the contact email.
    #[must_use]
    pub fn with_email(mut self, filter: TextFilter) -> Self {
        self.email = Some(filter);
        self
    }

    /// Adds a custom field filter.
    #[must_use]
    pub fn with_custom(mut self, filter: CustomFilter) -> Self {
        self.customs.push(filter);
        self
    }

    /// Returns `true` if the query has no conditions.
    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
            && self.name.is_none()
            && self.email.is_none()
            && self.customs.is_empty()
    }

    fn to_params(&self) -> Params {
        let mut map = Map::new();
        if !self.campaigns.is_empty() {
            map.insert("campaigns".into(), json!(self.campaigns));
        }
        if let Some(name) = &self.name {
            map.insert("name".into(), name.to_value());
        }
        if let Some(email) = &self.email {
            map.insert("email".into(), email.to_value());
        }
        if !self.customs.is_empty() {
            let customs = self
                .customs
                .iter()
                .map(|custom| (custom.name.as_str(), custom.content.to_value()));
            map.insert("customs".into(), name_content(customs));
        }
        map
    }
}

/// How `add_contact` treats an address that is already subscribed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscribeAction {
    /// Add new contacts, skip existing ones.
    #[default]
    Standard,
    /// Add new contacts only, as a one-off insert.
    Insert,
    /// Update existing contacts, add new ones.
    Update,
}

/// Parameters of `add_contact`.
///
/// A new contact must confirm its subscription by email. The call returns
/// `queued`, and `duplicated` when the address was submitted before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewContact {
    /// Campaign ID.
    pub campaign: String,
    /// Handling of existing subscriptions.
    pub action: SubscribeAction,
    /// Email address.
    pub email: String,
    /// Day of cycle the contact starts on.
    pub cycle_day: u32,
    /// Contact name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// IP address the subscription came from.
    #[serde(rename = "ipAddress", skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// Custom fields as `(name, content)`.
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_customs"
    )]
    pub customs: Vec<(String, String)>,
}

fn serialize_customs<S>(customs: &[(String, String)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    name_content(customs.iter().map(|(name, content)| (name.as_str(), content)))
        .serialize(serializer)
}

impl NewContact {
    /// Creates a standard subscription on day 0 of the cycle.
    pub fn new(campaign: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
            action: SubscribeAction::Standard,
            email: email.into(),
            cycle_day: 0,
            name: None,
            ip_address: None,
            customs: Vec::new(),
        }
    }

    /// Sets the contact name. An empty name is not sent.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into()).filter(|name: &String| !name.is_empty());
        self
    }

    /// Sets the subscribe action.
    #[must_use]
    pub fn with_action(mut self, action: SubscribeAction) -> Self {
        self.action = action;
        self
    }

    /// Sets the starting day of cycle.
    #[must_use]
    pub fn with_cycle_day(mut self, cycle_day: u32) -> Self {
        self.cycle_day = cycle_day;
        self
    }

    /// Sets the originating IP address.
    #[must_use]
    pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }

    /// Adds a custom field.
    #[must_use]
    pub fn with_custom(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.customs.push((name.into(), content.into()));
        self
    }
}

impl<D: Dispatch> Client<D> {
    /// Lists contacts matching `query`, keyed by contact ID.
    pub fn get_contacts(&self, query: &ContactQuery) -> Result<D::Output, Error> {
        self.execute("get_contacts", Some(query.to_params()))
    }

    /// Lists contacts whose email matches, optionally narrowed to some
    /// campaigns. `Contains` finds addresses containing `email`.
    pub fn get_contacts_by_email(
        &self,
        email: &str,
        campaigns: Option<&[&str]>,
        operator: TextOperator,
    ) -> Result<D::Output, Error> {
        let query = ContactQuery::new()
            .with_campaigns(campaigns.unwrap_or_default().iter().copied())
            .with_email(TextFilter::new(operator, email));
        self.get_contacts(&query)
    }

    /// Lists contacts whose custom fields match, one `(name, value)` pair per
    /// field, all compared with `operator`.
    pub fn get_contacts_by_customs(
        &self,
        campaigns: Option<&[&str]>,
        customs: &[(&str, &str)],
        operator: TextOperator,
    ) -> Result<D::Output, Error> {
        let query = customs.iter().fold(
            ContactQuery::new().with_campaigns(campaigns.unwrap_or_default().iter().copied()),
            |query, (name, value)| {
                query.with_custom(CustomFilter::new(*name, TextFilter::new(operator, *value)))
            },
        );
        self.get_contacts(&query)
    }

    /// Gets one contact by ID.
    pub fn get_contact(&self, id: &str) -> Result<D::Output, Error> {
        self.execute("get_contact", contact(id, Map::new()))
    }

    /// Renames a contact.
    pub fn set_contact_name(&self, id: &str, name: &str) -> Result<D::Output, Error> {
        self.execute("set_contact_name", contact(id, with("name", name)))
    }

    /// Moves a contact to another day of its cycle.
    pub fn set_contact_cycle(&self, id: &str, cycle_day: u32) -> Result<D::Output, Error> {
        self.execute("set_contact_cycle", contact(id, with("cycle_day", cycle_day)))
    }

    /// Moves a contact to another campaign.
    pub fn move_contact(&self, id: &str, campaign: &str) -> Result<D::Output, Error> {
        self.execute("move_contact", contact(id, with("campaign", campaign)))
    }

    /// Gets the custom fields of a contact.
    pub fn get_contact_customs(&self, id: &str) -> Result<D::Output, Error> {
        self.execute("get_contact_customs", contact(id, Map::new()))
    }

    /// Sets custom fields of a contact. A field is added if missing,
    /// updated if present, and removed when its content is `None`.
    pub fn set_contact_customs(
        &self,
        id: &str,
        customs: &[(&str, Option<&str>)],
    ) -> Result<D::Output, Error> {
        let customs = name_content(customs.iter().copied());
        self.execute("set_contact_customs", contact(id, with("customs", customs)))
    }

    /// Gets the location of a contact, resolved from its IP address.
    pub fn get_contact_geoip(&self, id: &str) -> Result<D::Output, Error> {
        self.execute("get_contact_geoip", contact(id, Map::new()))
    }

    /// Lists when a contact opened messages.
    pub fn get_contact_opens(&self, id: &str) -> Result<D::Output, Error> {
        self.execute("get_contact_opens", contact(id, Map::new()))
    }

    /// Lists when a contact clicked links in messages.
    pub fn get_contact_clicks(&self, id: &str) -> Result<D::Output, Error> {
        self.execute("get_contact_clicks", contact(id, Map::new()))
    }

    /// Subscribes a contact to a campaign.
    pub fn add_contact(&self, new_contact: &NewContact) -> Result<D::Output, Error> {
        self.execute("add_contact", to_params(new_contact)?)
    }

    /// Deletes a contact.
    pub fn delete_contact(&self, id: &str) -> Result<D::Output, Error> {
        self.execute("delete_contact", params(json!({"contact": id})))
    }
}

fn with(key: &str, value: impl Into<Value>) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(key.to_owned(), value.into());
    map
}

/// `{"contact": id}` followed by the call's other params.
fn contact(id: &str, rest: Map<String, Value>) -> Option<Params> {
    let mut map = with("contact", id);
    map.extend(rest);
    Some(map)
}
