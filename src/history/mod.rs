//! Historical OHLCV bars from the chart endpoint.

mod api;
mod model;
mod transform;
mod wire;

pub use model::{HistoryQuery, PriceSeries};

use crate::{YfClient, YfError};

/// Fetches price bars for `symbol`.
///
/// # Errors
/// - [`YfError::InvalidDates`] if the query's start is not before its end.
/// - [`YfError::NotFound`] (`"data"`) when the chart carries no result.
/// - Transport and decode errors as-is.
pub async fn history(
    client: &YfClient,
    symbol: &str,
    query: &HistoryQuery,
) -> Result<PriceSeries, YfError> {
    api::fetch(client, symbol, query).await
}
