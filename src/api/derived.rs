//! Lookups that combine or post-filter other calls.
//!
//! They need the result of one call before deciding what to return, so they
//! only exist on the single-call client.

use serde::Serialize;
use serde_json::{Map, Value};

use super::MessageType;
use crate::Client;
use crate::Error;
use crate::client::expect_object;
use crate::transport::SingleCall;

/// A webform together with the campaign it subscribes to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebformDetails {
    /// Webform ID.
    pub webform_id: String,
    /// Webform record as returned by the service.
    pub data: Value,
    /// ID of the campaign the webform subscribes to, if the record names one.
    pub campaign_id: Option<String>,
    /// Campaign record, if it could be fetched.
    pub campaign: Option<Value>,
}

impl Client<SingleCall> {
    /// Returns the ID of the campaign named exactly `name`, or `None` if
    /// there is no such campaign.
    pub fn get_campaign_id_by_name(&self, name: &str) -> Result<Option<String>, Error> {
        let result = self.get_campaign_by_name(name)?;
        if result.is_null() {
            return Ok(None);
        }
        Ok(expect_object("get_campaigns", &result)?.keys().next().cloned())
    }

    /// Returns the from fields whose address is `email`, keyed by from-field
    /// ID.
    pub fn get_account_from_fields_by_email(&self, email: &str) -> Result<Value, Error> {
        let result = self.get_account_from_fields()?;
        retain(&result, "get_account_from_fields", |field| {
            field.get("email").and_then(Value::as_str) == Some(email)
        })
    }

    /// Returns the autoresponders of `campaign` sent on `cycle_day`, keyed by
    /// message ID.
    pub fn get_messages_by_cycle_day(&self, campaign: &str, cycle_day: u32) -> Result<Value, Error> {
        let result = self.autoresponders(campaign)?;
        retain(&result, "get_messages", |message| {
            is_cycle_day(message, cycle_day)
        })
    }

    /// Returns the contents of the first autoresponder of `campaign` sent on
    /// `cycle_day`, or `None` if there is none.
    pub fn get_message_contents_by_cycle_day(
        &self,
        campaign: &str,
        cycle_day: u32,
    ) -> Result<Option<Value>, Error> {
        let result = self.autoresponders(campaign)?;
        if result.is_null() {
            return Ok(None);
        }
        let found = expect_object("get_messages", &result)?
            .iter()
            .find(|(_, message)| is_cycle_day(message, cycle_day))
            .map(|(id, _)| id.clone());

        match found {
            Some(id) => self.get_message_contents(&id).map(Some),
            None => Ok(None),
        }
    }

    /// Lists the webforms of the account, each with its campaign record.
    ///
    /// Issues one `get_campaign` call per webform.
    pub fn get_webforms_with_campaigns(&self) -> Result<Vec<WebformDetails>, Error> {
        let result = self.get_webforms()?;
        self.webform_details(&result)
    }

    /// Gets one webform with its campaign record, or `None` if the service
    /// returned no webform.
    pub fn get_webform_with_campaign(&self, id: &str) -> Result<Option<WebformDetails>, Error> {
        let result = self.get_webform(id)?;
        Ok(self.webform_details(&result)?.into_iter().next())
    }

    fn autoresponders(&self, campaign: &str) -> Result<Value, Error> {
        self.get_messages(Some(&[campaign][..]), Some(MessageType::Autoresponder))
    }

    fn webform_details(&self, result: &Value) -> Result<Vec<WebformDetails>, Error> {
        if result.is_null() {
            return Ok(Vec::new());
        }

        expect_object("get_webforms", result)?
            .iter()
            .map(|(webform_id, data)| -> Result<WebformDetails, Error> {
                let campaign_id = data
                    .get("campaign")
                    .and_then(Value::as_str)
                    .map(str::to_owned);
                let campaign = match &campaign_id {
                    Some(campaign_id) => self
                        .get_campaign(campaign_id)?
                        .get(campaign_id.as_str())
                        .cloned(),
                    None => None,
                };
                Ok(WebformDetails {
                    webform_id: webform_id.clone(),
                    data: data.clone(),
                    campaign_id,
                    campaign,
                })
            })
            .collect()
    }
}

/// Copies the entries of an object result that satisfy `keep`. A null result
/// counts as an empty object.
fn retain(result: &Value, method: &str, keep: impl Fn(&Value) -> bool) -> Result<Value, Error> {
    if result.is_null() {
        return Ok(Value::Object(Map::new()));
    }
    let kept = expect_object(method, result)?
        .iter()
        .filter(|(_, entry)| keep(entry))
        .map(|(key, entry)| (key.clone(), entry.clone()))
        .collect();
    Ok(Value::Object(kept))
}

/// `day_of_cycle` comes back as a number or a numeric string.
fn is_cycle_day(message: &Value, cycle_day: u32) -> bool {
    match message.get("day_of_cycle") {
        Some(Value::Number(n)) => n.as_u64() == Some(u64::from(cycle_day)),
        Some(Value::String(s)) => s.trim().parse::<u32>().ok() == Some(cycle_day),
        _ => false,
    }
}
