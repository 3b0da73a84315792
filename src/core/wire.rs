use serde::{Deserialize, Deserializer};

use crate::core::models::QuotedValue;

#[derive(Deserialize)]
struct RawQuoted {
    raw: Option<f64>,
    fmt: Option<String>,
    #[serde(rename = "longFmt")]
    long_fmt: Option<String>,
}

/// Decodes `{raw, fmt, longFmt}` into a [`QuotedValue`].
///
/// Yahoo reports a missing metric as `null`, by omitting the key, or as `{}`.
/// All three become `None`; a present `raw` (zero included) is a value.
/// Use with `#[serde(default, deserialize_with = "quoted")]`.
pub(crate) fn quoted<'de, D>(deserializer: D) -> Result<Option<QuotedValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let node = Option::<RawQuoted>::deserialize(deserializer)?;
    Ok(node.and_then(|n| {
        n.raw.map(|raw| QuotedValue {
            raw,
            fmt: n.fmt.unwrap_or_default(),
            long_fmt: n.long_fmt,
        })
    }))
}

/// Envelope for any endpoint shaped `{ <root>: { result: [...], error: ... } }`.
#[derive(Deserialize)]
pub(crate) struct ResultNode<T> {
    pub(crate) result: Option<Vec<T>>,
    pub(crate) error: Option<serde_json::Value>,
}

impl<T> ResultNode<T> {
    /// The first result entry. An upstream error field or an empty/absent result
    /// array both mean "nothing for this symbol".
    pub(crate) fn into_first(self) -> Option<T> {
        if let Some(err) = &self.error {
            tracing::debug!(error = %err, "upstream reported an error");
        }
        self.result.and_then(|v| v.into_iter().next())
    }
}
