//! Public client surface + builder.
//! Internals are split into `auth` (cookie/crumb session), `signer` (crumb + identity
//! on each request) and `constants` (UA pool + default endpoints).

mod auth;
mod constants;
mod signer;

pub use auth::{AuthStatus, Cookie, Session};
pub use signer::{AgentPicker, FixedPicker, RandomPicker, RequestSigner, SignedRequest};

use crate::core::YfError;
use constants::{CRUMB_PATH, DEFAULT_BASE_URL, DEFAULT_COOKIE_URL, USER_AGENTS};
use reqwest::Client;
use signer::ClientIdentity;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Handle to the Yahoo Finance API.
///
/// Cheap to clone; clones share one HTTP connection pool and one [`Session`],
/// so the cookie/crumb handshake happens once per client family.
#[derive(Debug, Clone)]
pub struct YfClient {
    http: Client,
    base_url: Url,
    session: Arc<Session>,
}

impl Default for YfClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl YfClient {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> YfClientBuilder {
        YfClientBuilder::default()
    }

    /// The session shared by every request issued through this client.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) const fn http(&self) -> &Client {
        &self.http
    }

    /// `{base}/{path}[/{symbol}]`; the symbol is pushed as one percent-encoded segment.
    pub(crate) fn endpoint(&self, path: &str, symbol: Option<&str>) -> Result<Url, YfError> {
        let mut url = self.base_url.join(path)?;
        if let Some(sym) = symbol {
            url.path_segments_mut()
                .map_err(|()| YfError::Config("base URL cannot carry a path".into()))?
                .pop_if_empty()
                .push(sym);
        }
        Ok(url)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct YfClientBuilder {
    base_url: Option<Url>,
    cookie_url: Option<Url>,
    crumb_url: Option<Url>,
    user_agents: Option<Vec<String>>,
    agent_picker: Option<Arc<dyn AgentPicker>>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl YfClientBuilder {
    /// Override the API host (e.g., `https://query2.finance.yahoo.com`).
    /// Versioned paths such as `v10/finance/quoteSummary/` are appended to it.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the cookie bootstrap URL.
    #[must_use]
    pub fn cookie_url(mut self, url: Url) -> Self {
        self.cookie_url = Some(url);
        self
    }

    /// Override the crumb URL. Defaults to `{base}/v1/test/getcrumb`.
    #[must_use]
    pub fn crumb_url(mut self, url: Url) -> Self {
        self.crumb_url = Some(url);
        self
    }

    /// Replace the pool of User-Agent strings drawn from per request.
    #[must_use]
    pub fn user_agents<I, S>(mut self, agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.user_agents = Some(agents.into_iter().map(Into::into).collect());
        self
    }

    /// Inject the strategy used to draw from the User-Agent pool.
    #[must_use]
    pub fn agent_picker(mut self, picker: impl AgentPicker + 'static) -> Self {
        self.agent_picker = Some(Arc::new(picker));
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default URL fails to parse, the User-Agent pool is
    /// empty, or the underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<YfClient, YfError> {
        let base_url = with_trailing_slash(match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        });
        let cookie_url = match self.cookie_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_COOKIE_URL)?,
        };
        let crumb_url = match self.crumb_url {
            Some(u) => u,
            None => base_url.join(CRUMB_PATH)?,
        };

        let agents = self
            .user_agents
            .unwrap_or_else(|| USER_AGENTS.iter().map(|s| (*s).to_string()).collect());
        if agents.is_empty() {
            return Err(YfError::Config("user agent pool is empty".into()));
        }
        let picker = self
            .agent_picker
            .unwrap_or_else(|| Arc::new(RandomPicker) as Arc<dyn AgentPicker>);

        // Cookies are replayed explicitly by the signer, so reqwest's own jar stays off.
        let mut httpb = reqwest::Client::builder();
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }
        let http = httpb.build()?;

        let session = Session::new(
            http.clone(),
            cookie_url,
            crumb_url,
            ClientIdentity::new(agents, picker),
        );

        Ok(YfClient {
            http,
            base_url,
            session: Arc::new(session),
        })
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
