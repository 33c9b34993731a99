//! Client information types.

use crate::{Account, Jar};
use serde::{Deserialize, Serialize};

/// Personal information about a client together with their accounts and
/// jars, as returned by the client-info endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Unique identifier of the client (matches the send.monobank.ua id).
    pub client_id: String,
    /// Client's name.
    pub name: String,
    /// Webhook URL currently registered for the client, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_hook_url: Option<String>,
    /// Rights granted to the token, one character per capability.
    #[serde(default)]
    pub permissions: String,
    /// Accounts available to the client, in API order.
    #[serde(default)]
    pub accounts: Vec<Account>,
    /// Jars owned by the client, in API order.
    #[serde(default)]
    pub jars: Vec<Jar>,
}

impl UserInfo {
    /// Check whether the token carries a capability flag.
    pub fn has_permission(&self, flag: char) -> bool {
        self.permissions.contains(flag)
    }
}
