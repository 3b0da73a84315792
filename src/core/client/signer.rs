//! Attaches session credentials and a client identity to outgoing requests.

use std::fmt;
use std::sync::Arc;

use rand::Rng;
use reqwest::{Client, RequestBuilder, header};
use url::Url;

use super::auth::{Cookie, Session};

/// Strategy for choosing one entry out of the user-agent pool.
///
/// The default [`RandomPicker`] draws uniformly per request; tests can inject
/// [`FixedPicker`] to make the outbound identity deterministic.
pub trait AgentPicker: Send + Sync + fmt::Debug {
    /// Returns an index in `0..pool_len`. `pool_len` is never zero.
    fn pick(&self, pool_len: usize) -> usize;
}

/// Uniform selection backed by the thread-local CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl AgentPicker for RandomPicker {
    fn pick(&self, pool_len: usize) -> usize {
        rand::thread_rng().gen_range(0..pool_len)
    }
}

/// Always selects the same slot (wrapped into the pool).
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl AgentPicker for FixedPicker {
    fn pick(&self, pool_len: usize) -> usize {
        self.0 % pool_len
    }
}

/// The user-agent pool together with the strategy that draws from it.
#[derive(Debug, Clone)]
pub(crate) struct ClientIdentity {
    agents: Arc<[String]>,
    picker: Arc<dyn AgentPicker>,
}

impl ClientIdentity {
    /// `agents` must be non-empty; the builder enforces it.
    pub(crate) fn new(agents: Vec<String>, picker: Arc<dyn AgentPicker>) -> Self {
        Self {
            agents: agents.into(),
            picker,
        }
    }

    /// One draw from the pool.
    pub(crate) fn next(&self) -> &str {
        let idx = self.picker.pick(self.agents.len());
        &self.agents[idx.min(self.agents.len() - 1)]
    }
}

/// Renders cookies as a single `Cookie` header value.
pub(crate) fn cookie_header(cookies: &[Cookie]) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    Some(
        cookies
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; "),
    )
}

/// A request URL plus the headers it must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// Endpoint with the caller's query and, when held, the crumb.
    pub url: Url,
    /// The client identity drawn for this request.
    pub user_agent: String,
    /// The `Cookie` header value, if the session holds any cookies.
    pub cookie: Option<String>,
}

impl SignedRequest {
    pub(crate) fn into_request(self, http: &Client) -> RequestBuilder {
        let mut req = http
            .get(self.url)
            .header(header::USER_AGENT, self.user_agent)
            .header(header::ACCEPT, "application/json");
        if let Some(cookie) = self.cookie {
            req = req.header(header::COOKIE, cookie);
        }
        req
    }
}

/// Signs requests with whatever the session currently holds.
///
/// Signing never triggers authentication; call
/// [`Session::ensure_authenticated`] first.
#[derive(Debug, Clone, Copy)]
pub struct RequestSigner<'a> {
    session: &'a Session,
}

impl<'a> RequestSigner<'a> {
    /// Borrows the session whose credentials will be attached.
    #[must_use]
    pub const fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Appends `params` (and the crumb, when held) to `url` and draws a user agent.
    #[must_use]
    pub fn sign(&self, mut url: Url, params: &[(&str, &str)]) -> SignedRequest {
        {
            let mut qp = url.query_pairs_mut();
            for (k, v) in params {
                qp.append_pair(k, v);
            }
            if let Some(crumb) = self.session.crumb() {
                qp.append_pair("crumb", crumb);
            }
        }
        // An empty query string would still leave a trailing '?'.
        if url.query() == Some("") {
            url.set_query(None);
        }

        SignedRequest {
            url,
            user_agent: self.session.identity().next().to_string(),
            cookie: cookie_header(self.session.cookies()),
        }
    }
}
