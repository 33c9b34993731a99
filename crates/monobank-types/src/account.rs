//! Account types for the Monobank open API.

use serde::{Deserialize, Serialize};

/// Cashback accrual type configured for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashbackType {
    /// No cashback accrues on this account.
    None,
    /// Cashback accrues in hryvnia.
    #[serde(rename = "UAH")]
    Uah,
    /// Cashback accrues in airline miles.
    Miles,
}

impl CashbackType {
    /// Check whether the account accrues any cashback at all.
    pub fn accrues(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl Default for CashbackType {
    fn default() -> Self {
        Self::None
    }
}

/// A client's account as returned by the client-info endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier of the account.
    pub id: String,
    /// Identifier for the send.monobank.ua transfer page, when enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_id: Option<String>,
    /// Balance in minor units of the account currency.
    pub balance: i64,
    /// Credit limit in minor units of the account currency.
    pub credit_limit: i64,
    /// Account product type ("black", "white", "fop", ...). The set is open
    /// on the API side, so this stays a plain string.
    #[serde(rename = "type")]
    pub account_type: String,
    /// ISO 4217 numeric currency code.
    pub currency_code: i32,
    /// Cashback accrual type.
    #[serde(default)]
    pub cashback_type: CashbackType,
    /// Masked card numbers; premium accounts can carry more than one card.
    #[serde(default)]
    pub masked_pan: Vec<String>,
    /// International bank account number.
    pub iban: String,
}

impl Account {
    /// Balance available on top of the client's own funds, i.e. own balance
    /// excluding the credit limit.
    pub fn own_balance(&self) -> i64 {
        self.balance - self.credit_limit
    }
}
