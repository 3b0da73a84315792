use serde::{Deserialize, Serialize};

use crate::core::{QuotedValue, wire::quoted};

/// Identity and current trading state of a symbol, from the `price` module.
///
/// Deserializes from Yahoo's camelCase wire names and serializes with the
/// Rust field names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct TickerInfo {
    #[serde(default)]
    pub symbol: String,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub quote_type: Option<String>,
    pub exchange: Option<String>,
    pub exchange_name: Option<String>,
    /// Minutes the exchange feed is delayed by.
    pub exchange_data_delayed_by: Option<i64>,
    pub market_state: Option<String>,
    pub currency: Option<String>,
    pub currency_symbol: Option<String>,
    pub quote_source_name: Option<String>,
    pub max_age: Option<i64>,

    #[serde(default, deserialize_with = "quoted")]
    pub regular_market_price: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub regular_market_change: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub regular_market_change_percent: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub regular_market_open: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub regular_market_day_high: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub regular_market_day_low: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub regular_market_previous_close: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub regular_market_volume: Option<QuotedValue>,
    /// Epoch seconds of the last regular-session trade.
    pub regular_market_time: Option<i64>,

    #[serde(default, deserialize_with = "quoted")]
    pub pre_market_price: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub pre_market_change: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub post_market_price: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub post_market_change: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub post_market_change_percent: Option<QuotedValue>,
    pub post_market_time: Option<i64>,

    #[serde(default, deserialize_with = "quoted")]
    pub average_daily_volume_10_day: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub average_daily_volume_3_month: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub market_cap: Option<QuotedValue>,
}
