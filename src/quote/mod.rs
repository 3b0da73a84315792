//! Ticker identity and live price from the quoteSummary `price` module.

mod model;

pub use model::TickerInfo;

use serde::Deserialize;

use crate::core::{QuotedValue, YfClient, YfError, quotesummary::fetch_module_result};

#[derive(Deserialize)]
struct PriceResult {
    price: Option<TickerInfo>,
}

/// Fetches [`TickerInfo`] for `symbol`.
///
/// # Errors
/// [`YfError::NotFound`] (`"info"`) when upstream has no result, or no `price`
/// module, for the symbol.
pub async fn info(client: &YfClient, symbol: &str) -> Result<TickerInfo, YfError> {
    let r: PriceResult = fetch_module_result(client, symbol, &["price"], "info").await?;
    r.price.ok_or_else(|| YfError::not_found("info", symbol))
}

/// Current regular-session price.
///
/// # Errors
/// [`YfError::NotAvailable`] when the price module omits it, plus any [`info`] error.
pub async fn price(client: &YfClient, symbol: &str) -> Result<QuotedValue, YfError> {
    info(client, symbol)
        .await?
        .regular_market_price
        .ok_or_else(|| YfError::not_available("regular market price", symbol))
}
