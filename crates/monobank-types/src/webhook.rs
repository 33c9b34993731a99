//! Webhook registration types.

use serde::{Deserialize, Serialize};

/// Request body for registering a new webhook URL. The bank POSTs
/// transaction notifications to the URL; if it does not answer within 5
/// seconds the delivery is retried in 60 and 600 seconds, then the hook is
/// disabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    /// URL to register.
    pub new_hook_url: String,
}

impl Webhook {
    /// Create a registration request for `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            new_hook_url: url.into(),
        }
    }
}
