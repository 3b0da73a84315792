use crate::core::{QuotedValue, YfClient, YfError};
use crate::fundamentals::{
    self, BalanceSheet, CashFlow, DividendInfo, FinancialData, IncomeStatement, Ratios, Summary,
};
use crate::history::{self, HistoryQuery, PriceSeries};
use crate::news::{self, NewsItem};
use crate::quote::{self, TickerInfo};

/// A high-level interface for a single ticker symbol.
///
/// A `Ticker` pairs a [`YfClient`] handle with a symbol. Clones of the client
/// share one session, so every ticker built from the same client reuses the
/// same cookies and crumb.
///
/// # Example
///
/// ```no_run
/// # use yfinance_lite::{HistoryQuery, Interval, Range, Ticker, YfClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = YfClient::default();
/// let ticker = Ticker::new(&client, "AAPL");
///
/// let price = ticker.price().await?;
/// println!("AAPL last price: {}", price.fmt);
///
/// let bars = ticker
///     .history(HistoryQuery::new().range(Range::M1).interval(Interval::D1))
///     .await?;
/// println!("Fetched {} daily bars.", bars.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Ticker {
    client: YfClient,
    symbol: String,
}

impl Ticker {
    /// Creates a new `Ticker` for a given symbol.
    pub fn new(client: &YfClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
        }
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn set_symbol(&mut self, symbol: impl Into<String>) {
        self.symbol = symbol.into();
    }

    /* ---------------- quote ---------------- */

    /// Identity and trading state from the `price` module.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn info(&self) -> Result<TickerInfo, YfError> {
        quote::info(&self.client, &self.symbol).await
    }

    /// Current regular-session price.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn price(&self) -> Result<QuotedValue, YfError> {
        quote::price(&self.client, &self.symbol).await
    }

    /* ---------------- history / news ---------------- */

    /// Price bars keyed by formatted time. See [`HistoryQuery`] for defaults.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn history(&self, query: HistoryQuery) -> Result<PriceSeries, YfError> {
        history::history(&self.client, &self.symbol, &query).await
    }

    /// News items; `count <= 0` means 10, negative `start` means 0.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn news(&self, count: i64, start: i64) -> Result<Vec<NewsItem>, YfError> {
        news::news(&self.client, &self.symbol, count, start).await
    }

    /* ---------------- fundamentals ---------------- */

    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn financial_data(&self) -> Result<FinancialData, YfError> {
        fundamentals::financial_data(&self.client, &self.symbol).await
    }

    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn financial_ratios(&self) -> Result<Ratios, YfError> {
        fundamentals::financial_ratios(&self.client, &self.symbol).await
    }

    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn key_statistics(&self) -> Result<Summary, YfError> {
        fundamentals::key_statistics(&self.client, &self.symbol).await
    }

    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn income_statement(&self) -> Result<IncomeStatement, YfError> {
        fundamentals::income_statement(&self.client, &self.symbol).await
    }

    /// Most recent balance sheet. An empty statement list gives all-`None` fields.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn balance_sheet(&self) -> Result<BalanceSheet, YfError> {
        fundamentals::balance_sheet(&self.client, &self.symbol).await
    }

    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn cash_flow(&self) -> Result<CashFlow, YfError> {
        fundamentals::cash_flow(&self.client, &self.symbol).await
    }

    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn dividend_info(&self) -> Result<DividendInfo, YfError> {
        fundamentals::dividend_info(&self.client, &self.symbol).await
    }

    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn current_dividend_yield(&self) -> Result<f64, YfError> {
        fundamentals::current_dividend_yield(&self.client, &self.symbol).await
    }

    /// Annual dividend per share; `Ok(0.0)` when upstream reports zero.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn dividend_rate(&self) -> Result<f64, YfError> {
        fundamentals::dividend_rate(&self.client, &self.symbol).await
    }

    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn is_dividend_paying(&self) -> Result<bool, YfError> {
        fundamentals::is_dividend_paying(&self.client, &self.symbol).await
    }
}
