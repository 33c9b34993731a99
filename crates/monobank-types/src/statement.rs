//! Account statement types.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One transaction in an account statement. The API returns items ordered
/// by transaction time descending; that order is preserved as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementItem {
    /// Unique identifier of the transaction.
    pub id: String,
    /// Time of the transaction, Unix seconds. Calendar interpretation is a
    /// caller concern; see [`StatementItem::time_utc`].
    pub time: i64,
    /// Description of the transaction.
    pub description: String,
    /// Merchant Category Code, ISO 18245.
    pub mcc: i32,
    /// MCC before any substitution applied by the bank.
    #[serde(default)]
    pub original_mcc: i32,
    /// True while the authorization hold is in place and funds are reserved
    /// but not yet settled.
    pub hold: bool,
    /// Amount in minor units of the account currency. Negative for debits.
    pub amount: i64,
    /// Amount in minor units of the transaction currency.
    pub operation_amount: i64,
    /// ISO 4217 numeric code of the transaction currency.
    pub currency_code: i32,
    /// Commission in minor units.
    pub commission_rate: i64,
    /// Cashback accrued, minor units.
    pub cashback_amount: i64,
    /// Account balance after the transaction, minor units.
    pub balance: i64,
    /// Client's comment on the transfer, when one was attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// check.gov.ua receipt number, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
    /// Invoice number, present on FOP account transactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    /// Counterparty EDRPOU code, present only for certain account types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_edrpou: Option<String>,
    /// Counterparty IBAN, present only for certain account types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_iban: Option<String>,
}

impl StatementItem {
    /// Transaction time as a UTC timestamp. Returns `None` only for
    /// out-of-range values that do not map to a calendar instant.
    pub fn time_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.time, 0).single()
    }

    /// Check whether the transaction debited the account.
    pub fn is_debit(&self) -> bool {
        self.amount < 0
    }
}
