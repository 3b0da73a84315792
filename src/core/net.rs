use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::{YfClient, YfError, client::RequestSigner};

/// A response body with the status and (crumb-free) URL it came from.
pub(crate) struct RawResponse {
    pub(crate) status: StatusCode,
    pub(crate) url: Url,
    pub(crate) body: String,
}

/// Issues one GET to `{base}/{path}[/{symbol}]?{params}`.
///
/// Authentication is best-effort: the session handshake runs first (once per
/// session) and the request proceeds with or without a crumb. Transport errors
/// are returned as-is; there is no retry.
pub(crate) async fn issue(
    client: &YfClient,
    path: &str,
    symbol: Option<&str>,
    params: &[(&str, &str)],
) -> Result<RawResponse, YfError> {
    let session = client.session();
    let auth = session.ensure_authenticated().await;

    let url = client.endpoint(path, symbol)?;
    tracing::debug!(%url, ?params, authenticated = auth.is_authenticated(), "GET");

    let signed = RequestSigner::new(session).sign(url.clone(), params);
    let resp = signed.into_request(client.http()).send().await?;

    let status = resp.status();
    let body = resp.text().await?;
    tracing::debug!(%url, status = status.as_u16(), bytes = body.len(), "response");

    Ok(RawResponse { status, url, body })
}

/// Decodes a JSON body. Upstream sends well-formed envelopes even on 404
/// (unknown symbol), so the status only matters when the body does not decode.
pub(crate) fn decode<T: DeserializeOwned>(raw: &RawResponse) -> Result<T, YfError> {
    match serde_json::from_str(&raw.body) {
        Ok(v) => Ok(v),
        Err(_) if !raw.status.is_success() => Err(YfError::Status {
            status: raw.status.as_u16(),
            url: raw.url.to_string(),
        }),
        Err(e) => Err(YfError::Json(e)),
    }
}
