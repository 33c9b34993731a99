//! The API's error payload.

use serde::{Deserialize, Serialize};

/// Error body the API attaches to rejected requests. Parsed
/// opportunistically: endpoints are not consistent about returning it, so
/// both fields tolerate absence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine-readable error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err_code: Option<String>,
    /// Human-readable error text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err_text: Option<String>,
}
