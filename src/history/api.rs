use crate::core::{YfClient, YfError, net, wire::ResultNode};

use super::model::{HistoryQuery, PriceSeries};
use super::transform::to_series;
use super::wire::ChartEnvelope;

const CHART_PATH: &str = "v8/finance/chart";

pub(super) async fn fetch(
    client: &YfClient,
    symbol: &str,
    query: &HistoryQuery,
) -> Result<PriceSeries, YfError> {
    let interval = query.interval_or_default().as_str();
    let range = query.range_or_default().as_str();

    let period = match query.period {
        Some((p1, p2)) if p1 >= p2 => return Err(YfError::InvalidDates),
        Some((p1, p2)) => Some((p1.to_string(), p2.to_string())),
        None => None,
    };

    let mut params = vec![("range", range), ("interval", interval)];
    if let Some((p1, p2)) = &period {
        params.push(("period1", p1.as_str()));
        params.push(("period2", p2.as_str()));
    }

    let raw = net::issue(client, CHART_PATH, Some(symbol), &params).await?;
    let env: ChartEnvelope = net::decode(&raw)?;

    let first = env
        .chart
        .and_then(ResultNode::into_first)
        .ok_or_else(|| YfError::not_found("data", symbol))?;

    Ok(to_series(&[first], interval))
}
