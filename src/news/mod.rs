mod api;
mod model;
mod wire;

pub use model::{NewsItem, Thumbnail};

use crate::{YfClient, YfError};

/// Fetches news for `symbol` from the search endpoint.
///
/// `count <= 0` requests the default of 10 items; a negative `start` is
/// treated as 0. A response without a news array yields an empty list.
pub async fn news(
    client: &YfClient,
    symbol: &str,
    count: i64,
    start: i64,
) -> Result<Vec<NewsItem>, YfError> {
    api::fetch_news(client, symbol, count, start).await
}
