use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum YfError {
    /// An error occurred during an HTTP request (connection, DNS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not the JSON shape we expected.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unsuccessful HTTP status and a body we could not decode.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// A well-formed response carried no result entries for the symbol.
    #[error("no {what} found for symbol: {symbol}")]
    NotFound {
        /// What was requested (e.g. "data", "info", "financial data").
        what: &'static str,
        /// The symbol the request was made for.
        symbol: String,
    },

    /// A single metric the caller asked for was not reported upstream.
    #[error("{what} not available for symbol: {symbol}")]
    NotAvailable {
        /// The metric that was missing.
        what: &'static str,
        /// The symbol the request was made for.
        symbol: String,
    },

    /// An invalid date range was provided for a historical data request (start must be before end).
    #[error("invalid date range: start must be before end")]
    InvalidDates,

    /// The client was configured with unusable settings.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl YfError {
    pub(crate) fn not_found(what: &'static str, symbol: &str) -> Self {
        Self::NotFound {
            what,
            symbol: symbol.to_string(),
        }
    }

    pub(crate) fn not_available(what: &'static str, symbol: &str) -> Self {
        Self::NotAvailable {
            what,
            symbol: symbol.to_string(),
        }
    }

    /// Returns `true` for the empty-result case, so callers can treat
    /// "nothing upstream for this symbol" differently from transport or decode failures.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
