//! Campaigns (mailing lists).

use serde_json::json;

use super::{TextFilter, params};
use crate::Client;
use crate::Error;
use crate::transport::Dispatch;

impl<D: Dispatch> Client<D> {
    /// Lists campaigns, keyed by campaign ID. With a filter, only campaigns
    /// whose name matches are returned.
    ///
    /// ```rust
    /// # use std::sync::Arc;
    /// # use getresponse::{Client, TextFilter, testing::MockWire};
    /// # use serde_json::json;
    /// # let wire = Arc::new(MockWire::new());
    /// # wire.reply_json(200, json!({"result": {}}));
    /// # let client = Client::builder().api_key("key").wire(wire.clone()).build()?;
    /// let campaigns = client.get_campaigns(Some(&TextFilter::contains("news")))?;
    /// # assert!(campaigns.is_object());
    /// # assert_eq!(wire.requests()[0]["params"][1], json!({"name": {"CONTAINS": "%news%"}}));
    /// # Ok::<(), getresponse::Error>(())
    /// ```
    pub fn get_campaigns(&self, name: Option<&TextFilter>) -> Result<D::Output, Error> {
        let params = name.and_then(|filter| params(json!({"name": filter.to_value()})));
        self.execute("get_campaigns", params)
    }

    /// Gets one campaign by ID.
    pub fn get_campaign(&self, id: &str) -> Result<D::Output, Error> {
        self.execute("get_campaign", params(json!({"campaign": id})))
    }

    /// Lists campaigns whose name is exactly `name`.
    ///
    /// Campaign names are unique, so the result holds at most one entry.
    /// [`get_campaign_id_by_name`](Client::get_campaign_id_by_name) extracts
    /// its ID.
    pub fn get_campaign_by_name(&self, name: &str) -> Result<D::Output, Error> {
        self.get_campaigns(Some(&TextFilter::equals(name)))
    }
}
