use serde::Serialize;

/* ----- QUOTED VALUES (shared by quote/ and fundamentals/) ----- */

/// A reported metric: the machine value plus Yahoo's display strings.
///
/// Wherever a metric may be unreported the crate uses `Option<QuotedValue>`;
/// `None` means "not reported", which is distinct from a reported zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuotedValue {
    /// Full-precision value.
    pub raw: f64,
    /// Short display form (e.g. `"28.52"`, `"3.4T"`).
    pub fmt: String,
    /// Long display form (e.g. `"3,401,000,000,000"`), when upstream supplies one.
    pub long_fmt: Option<String>,
}

/* ----- HISTORY ----- */

/// One OHLCV bar. Every column is independently nullable upstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBar {
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<u64>,
}

/* ----- HISTORY PARAMS ----- */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Range {
    D1,
    D5,
    M1,
    M3,
    M6,
    #[default]
    Y1,
    Y2,
    Y5,
    Y10,
    Ytd,
    Max,
}

impl Range {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1d",
            Self::D5 => "5d",
            Self::M1 => "1mo",
            Self::M3 => "3mo",
            Self::M6 => "6mo",
            Self::Y1 => "1y",
            Self::Y2 => "2y",
            Self::Y5 => "5y",
            Self::Y10 => "10y",
            Self::Ytd => "ytd",
            Self::Max => "max",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interval {
    I1m,
    I2m,
    I5m,
    I15m,
    I30m,
    I60m,
    I90m,
    I1h,
    #[default]
    D1,
    D5,
    W1,
    M1,
    M3,
}

impl Interval {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I1m => "1m",
            Self::I2m => "2m",
            Self::I5m => "5m",
            Self::I15m => "15m",
            Self::I30m => "30m",
            Self::I60m => "60m",
            Self::I90m => "90m",
            Self::I1h => "1h",
            Self::D1 => "1d",
            Self::D5 => "5d",
            Self::W1 => "1wk",
            Self::M1 => "1mo",
            Self::M3 => "3mo",
        }
    }
}
