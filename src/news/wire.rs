use serde::Deserialize;

/// The search endpoint has returned items both at the top level and under
/// `result`; anything else carries no news.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum NewsEnvelope {
    Flat { news: Vec<NewsNode> },
    Nested { result: NestedResult },
    Other(serde::de::IgnoredAny),
}

#[derive(Deserialize)]
pub(crate) struct NestedResult {
    #[serde(default)]
    pub(crate) news: Vec<NewsNode>,
}

impl NewsEnvelope {
    pub(crate) fn into_items(self) -> Vec<NewsNode> {
        match self {
            Self::Flat { news } | Self::Nested { result: NestedResult { news } } => news,
            Self::Other(_) => Vec::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewsNode {
    #[serde(default)]
    pub(crate) uuid: String,
    #[serde(default)]
    pub(crate) title: String,
    pub(crate) publisher: Option<String>,
    pub(crate) link: Option<String>,
    #[serde(default)]
    pub(crate) provider_publish_time: i64,
    #[serde(rename = "type")]
    pub(crate) kind: Option<String>,
    pub(crate) thumbnail: Option<ThumbnailNode>,
    #[serde(default)]
    pub(crate) related_tickers: Vec<String>,
}

#[derive(Deserialize)]
pub(crate) struct ThumbnailNode {
    #[serde(default)]
    pub(crate) resolutions: Vec<ResolutionNode>,
}

#[derive(Deserialize)]
pub(crate) struct ResolutionNode {
    pub(crate) url: String,
    #[serde(default)]
    pub(crate) width: u32,
    #[serde(default)]
    pub(crate) height: u32,
    pub(crate) tag: Option<String>,
}
