//! Cookie & crumb acquisition for Yahoo endpoints.
//!
//! A [`Session`] performs the handshake at most once for its whole lifetime:
//! the first caller of [`Session::ensure_authenticated`] runs the bootstrap,
//! concurrent callers wait on the same gate, and everybody afterwards reads the
//! stored outcome. Failures are logged and remembered, never propagated.

use reqwest::{Client, header};
use tokio::sync::OnceCell;
use url::Url;

use super::signer::{ClientIdentity, cookie_header};
use crate::core::YfError;

/// A single cookie captured from the cookie-issuing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    /// Cookie name.
    pub name: String,
    /// Cookie value.
    pub value: String,
}

/// Outcome of the session bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// A crumb is held and will be attached to every request.
    Authenticated,
    /// The bootstrap failed; requests go out without a crumb.
    Unauthenticated,
}

impl AuthStatus {
    /// `true` when a crumb is held.
    #[must_use]
    pub const fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

#[derive(Debug, Default)]
struct Credentials {
    cookies: Vec<Cookie>,
    crumb: Option<String>,
}

/// Cookie jar + crumb shared by every request issued through one client.
///
/// Cloning a [`YfClient`](crate::YfClient) shares its session; building a new
/// client starts a fresh one.
#[derive(Debug)]
pub struct Session {
    http: Client,
    cookie_url: Url,
    crumb_url: Url,
    identity: ClientIdentity,
    credentials: OnceCell<Credentials>,
}

impl Session {
    pub(crate) fn new(http: Client, cookie_url: Url, crumb_url: Url, identity: ClientIdentity) -> Self {
        Self {
            http,
            cookie_url,
            crumb_url,
            identity,
            credentials: OnceCell::new(),
        }
    }

    /// Runs the cookie/crumb handshake if no caller has run it yet.
    ///
    /// Concurrent first callers are serialized on a one-shot gate: exactly one
    /// cookie fetch and one crumb fetch are issued, and every caller observes the
    /// same result once this returns. A failed handshake is not retried.
    pub async fn ensure_authenticated(&self) -> AuthStatus {
        let creds = self
            .credentials
            .get_or_init(|| self.bootstrap())
            .await;
        if creds.crumb.is_some() {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Unauthenticated
        }
    }

    /// The crumb, if the handshake has completed and produced one.
    #[must_use]
    pub fn crumb(&self) -> Option<&str> {
        self.credentials.get().and_then(|c| c.crumb.as_deref())
    }

    /// Cookies captured during the handshake (empty before it runs).
    #[must_use]
    pub fn cookies(&self) -> &[Cookie] {
        self.credentials
            .get()
            .map(|c| c.cookies.as_slice())
            .unwrap_or_default()
    }

    /// `true` once the handshake has run, whatever its outcome.
    #[must_use]
    pub fn is_bootstrapped(&self) -> bool {
        self.credentials.initialized()
    }

    pub(crate) const fn identity(&self) -> &ClientIdentity {
        &self.identity
    }

    async fn bootstrap(&self) -> Credentials {
        let cookies = match self.fetch_cookies().await {
            Ok(cookies) => {
                tracing::debug!(count = cookies.len(), "captured session cookies");
                cookies
            }
            Err(e) => {
                tracing::warn!(error = %e, url = %self.cookie_url, "cookie fetch failed; continuing without cookies");
                Vec::new()
            }
        };

        let crumb = match self.fetch_crumb(&cookies).await {
            Ok(body) if is_usable_crumb(&body) => {
                tracing::info!("session authenticated");
                Some(body)
            }
            Ok(body) => {
                tracing::warn!(len = body.len(), "crumb endpoint returned an unusable body; requests will omit the crumb");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, url = %self.crumb_url, "crumb fetch failed; requests will omit the crumb");
                None
            }
        };

        Credentials { cookies, crumb }
    }

    async fn fetch_cookies(&self) -> Result<Vec<Cookie>, YfError> {
        // fc.yahoo.com answers 404 but still sets the cookies we need, so the status is ignored.
        let resp = self
            .http
            .get(self.cookie_url.clone())
            .header(header::USER_AGENT, self.identity.next())
            .send()
            .await?;

        Ok(resp
            .cookies()
            .map(|c| Cookie {
                name: c.name().to_string(),
                value: c.value().to_string(),
            })
            .collect())
    }

    async fn fetch_crumb(&self, cookies: &[Cookie]) -> Result<String, YfError> {
        let mut req = self
            .http
            .get(self.crumb_url.clone())
            .header(header::USER_AGENT, self.identity.next());
        if let Some(cookie) = cookie_header(cookies) {
            req = req.header(header::COOKIE, cookie);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(YfError::Status {
                status: status.as_u16(),
                url: self.crumb_url.to_string(),
            });
        }
        Ok(resp.text().await?)
    }
}

/// The crumb is stored verbatim; only bodies that cannot be a token are rejected.
fn is_usable_crumb(body: &str) -> bool {
    !body.is_empty() && !body.contains('{') && !body.contains('<')
}
