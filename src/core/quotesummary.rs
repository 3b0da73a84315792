use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::core::{YfClient, YfError, net, wire::ResultNode};

/// quoteSummary path; the symbol is appended as its own segment.
pub(crate) const QUOTE_SUMMARY_PATH: &str = "v10/finance/quoteSummary";

#[derive(Deserialize)]
struct V10Envelope<T> {
    #[serde(rename = "quoteSummary")]
    quote_summary: Option<ResultNode<T>>,
}

/// Requests `modules` for `symbol` and decodes the first result entry as `T`.
///
/// An empty `result` array (or an upstream `error` in place of it) is reported
/// as [`YfError::NotFound`] with `what` naming the requested data.
pub(crate) async fn fetch_module_result<T>(
    client: &YfClient,
    symbol: &str,
    modules: &[&str],
    what: &'static str,
) -> Result<T, YfError>
where
    T: DeserializeOwned,
{
    let modules = modules.join(",");
    let raw = net::issue(
        client,
        QUOTE_SUMMARY_PATH,
        Some(symbol),
        &[("modules", modules.as_str())],
    )
    .await?;

    let env: V10Envelope<T> = net::decode(&raw)?;
    env.quote_summary
        .and_then(ResultNode::into_first)
        .ok_or_else(|| YfError::not_found(what, symbol))
}
