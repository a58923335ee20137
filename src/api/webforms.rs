//! Webforms (subscription forms).

use serde_json::json;

use super::params;
use crate::Client;
use crate::Error;
use crate::transport::Dispatch;

impl<D: Dispatch> Client<D> {
    /// Lists the webforms of the account, keyed by webform ID.
    pub fn get_webforms(&self) -> Result<D::Output, Error> {
        self.execute("get_webforms", None)
    }

    /// Gets one webform by ID.
    pub fn get_webform(&self, id: &str) -> Result<D::Output, Error> {
        self.execute("get_webform", params(json!({"webform": id})))
    }
}
