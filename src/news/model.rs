use serde::Serialize;

/// A single news article related to a ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    /// A unique identifier for the article.
    pub uuid: String,
    /// The headline of the article.
    pub title: String,
    /// The publisher of the article (e.g., "Reuters").
    pub publisher: Option<String>,
    /// A direct link to the article.
    pub link: Option<String>,
    /// The Unix timestamp (in seconds) of when the article was published.
    pub provider_publish_time: i64,
    /// Upstream content type, e.g. `"STORY"` or `"VIDEO"`.
    pub kind: Option<String>,
    /// Thumbnail renditions, largest first as upstream lists them.
    pub thumbnails: Vec<Thumbnail>,
    pub related_tickers: Vec<String>,
}

/// One rendition of an article thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub tag: Option<String>,
}
