//! Currency exchange rate types.

use serde::{Deserialize, Serialize};

/// Exchange rates for one currency pair. The bank refreshes rates at most
/// once every five minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    /// ISO 4217 numeric code of the base currency.
    pub currency_code_a: i32,
    /// ISO 4217 numeric code of the quote currency.
    pub currency_code_b: i32,
    /// Time of the rate, Unix seconds.
    pub date: i64,
    /// Sell rate; zero when only a cross rate is published for the pair.
    #[serde(default)]
    pub rate_sell: f64,
    /// Buy rate; zero when only a cross rate is published for the pair.
    #[serde(default)]
    pub rate_buy: f64,
    /// Cross rate; zero when direct sell/buy rates apply.
    #[serde(default)]
    pub rate_cross: f64,
}

impl CurrencyInfo {
    /// Check whether the pair is quoted only through a cross rate.
    pub fn is_cross_only(&self) -> bool {
        self.rate_cross != 0.0 && self.rate_sell == 0.0 && self.rate_buy == 0.0
    }
}
