//! Account information and the account-level blacklist.

use serde_json::json;

use super::params;
use crate::Client;
use crate::Error;
use crate::transport::Dispatch;

impl<D: Dispatch> Client<D> {
    /// Gets basic information about the account the API key belongs to.
    pub fn get_account_info(&self) -> Result<D::Output, Error> {
        self.execute("get_account_info", None)
    }

    /// Lists the "From" addresses of the account, keyed by from-field ID.
    pub fn get_account_from_fields(&self) -> Result<D::Output, Error> {
        self.execute("get_account_from_fields", None)
    }

    /// Gets one "From" address by from-field ID.
    pub fn get_account_from_field(&self, id: &str) -> Result<D::Output, Error> {
        self.execute(
            "get_account_from_field",
            params(json!({"account_from_field": id})),
        )
    }

    /// Lists the blacklist masks of the account.
    pub fn get_account_blacklist(&self) -> Result<D::Output, Error> {
        self.execute("get_account_blacklist", None)
    }

    /// Adds a blacklist mask (an address, a domain or a pattern).
    pub fn add_account_blacklist(&self, mask: &str) -> Result<D::Output, Error> {
        self.execute("add_account_blacklist", params(json!({"mask": mask})))
    }

    /// Removes a blacklist mask.
    pub fn delete_account_blacklist(&self, mask: &str) -> Result<D::Output, Error> {
        self.execute("delete_account_blacklist", params(json!({"mask": mask})))
    }
}
