use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::core::{Interval, PriceBar, Range};

/// Price bars keyed by formatted time.
///
/// Keys are `YYYY-MM-DD` for daily and coarser intervals and
/// `YYYY-MM-DD HH:MM:SS` (UTC) for intraday ones, so iteration is chronological.
pub type PriceSeries = BTreeMap<String, PriceBar>;

/// Parameters of a historical price request.
///
/// Unset range and interval fall back to `1y` and `1d`. An absolute window set
/// with [`between`](Self::between) is sent alongside the range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    pub range: Option<Range>,
    pub interval: Option<Interval>,
    pub period: Option<(i64, i64)>,
}

impl HistoryQuery {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            range: None,
            interval: None,
            period: None,
        }
    }

    #[must_use]
    pub const fn range(mut self, range: Range) -> Self {
        self.range = Some(range);
        self
    }

    #[must_use]
    pub const fn interval(mut self, interval: Interval) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Sets `period1`/`period2` from start and end instants.
    #[must_use]
    pub fn between(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.period = Some((start.timestamp(), end.timestamp()));
        self
    }

    pub(crate) fn range_or_default(&self) -> Range {
        self.range.unwrap_or_default()
    }

    pub(crate) fn interval_or_default(&self) -> Interval {
        self.interval.unwrap_or_default()
    }
}
