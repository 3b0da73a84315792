use chrono::{DateTime, Utc};

use crate::core::PriceBar;

use super::model::PriceSeries;
use super::wire::{ChartResult, QuoteBlock};

const DATE_FMT: &str = "%Y-%m-%d";
const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Daily and coarser bars are keyed by calendar date; intraday bars by date and time.
pub(crate) fn is_date_keyed(interval: &str) -> bool {
    interval.ends_with('d') || interval.ends_with("wk") || interval.ends_with("mo")
}

fn bar_at(q: &QuoteBlock, i: usize) -> Option<PriceBar> {
    Some(PriceBar {
        open: *q.open.get(i)?,
        high: *q.high.get(i)?,
        low: *q.low.get(i)?,
        close: *q.close.get(i)?,
        volume: *q.volume.get(i)?,
    })
}

/// Reshapes the columnar chart payload into a key-ordered series.
///
/// Only the first result and its first quote block are read. A position is
/// emitted only when every column reaches it; later positions overwrite
/// earlier ones that format to the same key. No result yields an empty series.
pub(crate) fn to_series(results: &[ChartResult], interval: &str) -> PriceSeries {
    let mut series = PriceSeries::new();
    let Some(result) = results.first() else {
        return series;
    };
    let Some(quote) = result.indicators.quote.first() else {
        return series;
    };

    let fmt = if is_date_keyed(interval) {
        DATE_FMT
    } else {
        DATETIME_FMT
    };

    for (i, &ts) in result.timestamp.iter().enumerate() {
        let Some(at) = DateTime::<Utc>::from_timestamp(ts, 0) else {
            tracing::debug!(ts, "skipping out-of-range timestamp");
            continue;
        };
        if let Some(bar) = bar_at(quote, i) {
            series.insert(at.format(fmt).to_string(), bar);
        }
    }
    series
}
