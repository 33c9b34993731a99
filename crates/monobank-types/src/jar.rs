//! Jar (savings goal) types.

use serde::{Deserialize, Serialize};

/// A jar: a sub-account a client accumulates funds in, optionally towards a
/// target amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jar {
    /// Unique identifier of the jar.
    pub id: String,
    /// Identifier for the send.monobank.ua transfer page, when enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_id: Option<String>,
    /// Display title of the jar.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// ISO 4217 numeric currency code.
    pub currency_code: i32,
    /// Balance in minor units of the jar currency.
    pub balance: i64,
    /// Target amount in minor units; absent when the jar has no goal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<i64>,
}

impl Jar {
    /// Check whether the jar has reached its goal. A jar without a goal is
    /// never considered complete.
    pub fn is_complete(&self) -> bool {
        matches!(self.goal, Some(goal) if self.balance >= goal)
    }
}
