use crate::core::{YfClient, YfError, net};

use super::model::{NewsItem, Thumbnail};
use super::wire::{NewsEnvelope, NewsNode};

const SEARCH_PATH: &str = "v1/finance/search";

pub(crate) const DEFAULT_COUNT: u32 = 10;

/// Non-positive count becomes the default; negative start becomes zero.
pub(crate) fn normalize_paging(count: i64, start: i64) -> (u32, u32) {
    let count = if count <= 0 {
        DEFAULT_COUNT
    } else {
        u32::try_from(count).unwrap_or(u32::MAX)
    };
    let start = u32::try_from(start.max(0)).unwrap_or(u32::MAX);
    (count, start)
}

pub(super) async fn fetch_news(
    client: &YfClient,
    symbol: &str,
    count: i64,
    start: i64,
) -> Result<Vec<NewsItem>, YfError> {
    let (count, start) = normalize_paging(count, start);
    let count = count.to_string();
    let start = start.to_string();

    let raw = net::issue(
        client,
        SEARCH_PATH,
        None,
        &[
            ("symbols", symbol),
            ("count", count.as_str()),
            ("start", start.as_str()),
            ("region", "US"),
            ("lang", "en-US"),
        ],
    )
    .await?;

    let env: NewsEnvelope = net::decode(&raw)?;
    Ok(env.into_items().into_iter().map(NewsItem::from).collect())
}

impl From<NewsNode> for NewsItem {
    fn from(n: NewsNode) -> Self {
        Self {
            uuid: n.uuid,
            title: n.title,
            publisher: n.publisher,
            link: n.link,
            provider_publish_time: n.provider_publish_time,
            kind: n.kind,
            thumbnails: n
                .thumbnail
                .map(|t| t.resolutions)
                .unwrap_or_default()
                .into_iter()
                .map(|r| Thumbnail {
                    url: r.url,
                    width: r.width,
                    height: r.height,
                    tag: r.tag,
                })
                .collect(),
            related_tickers: n.related_tickers,
        }
    }
}
