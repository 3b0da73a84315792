//! Centralized constants for default endpoints and the client-identity pool.

/// Yahoo query API host; versioned paths are appended.
pub(crate) const DEFAULT_BASE_URL: &str = "https://query2.finance.yahoo.com";

/// A URL that returns Set-Cookie headers for Yahoo domains.
pub(crate) const DEFAULT_COOKIE_URL: &str = "https://fc.yahoo.com";

/// Path (relative to the base) that hands out a crumb for the held cookies.
pub(crate) const CRUMB_PATH: &str = "v1/test/getcrumb";

/// Desktop browser UAs; one is drawn per request to avoid a fixed fingerprint.
pub(crate) const USER_AGENTS: &[&str] = &[
    concat!(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
        "AppleWebKit/537.36 (KHTML, like Gecko) ",
        "Chrome/124.0.0.0 Safari/537.36"
    ),
    concat!(
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) ",
        "AppleWebKit/537.36 (KHTML, like Gecko) ",
        "Chrome/124.0.0.0 Safari/537.36"
    ),
    concat!(
        "Mozilla/5.0 (X11; Linux x86_64) ",
        "AppleWebKit/537.36 (KHTML, like Gecko) ",
        "Chrome/122.0.0.0 Safari/537.36"
    ),
    concat!(
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) ",
        "AppleWebKit/605.1.15 (KHTML, like Gecko) ",
        "Version/17.4 Safari/605.1.15"
    ),
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
    concat!(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
        "AppleWebKit/537.36 (KHTML, like Gecko) ",
        "Chrome/124.0.0.0 Safari/537.36 Edg/124.0.0.0"
    ),
];
