//! yfinance-lite: a small Yahoo Finance client.
//!
//! A [`YfClient`] owns one cookie/crumb [`Session`], established lazily and at
//! most once on first use. [`Ticker`] is the per-symbol entry point for quote
//! info, price history, news and normalized fundamentals.
//!
//! ```no_run
//! # use yfinance_lite::{Ticker, YfClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), yfinance_lite::YfError> {
//! let client = YfClient::default();
//! let ratios = Ticker::new(&client, "MSFT").financial_ratios().await?;
//! if let Some(pe) = ratios.price_to_earnings {
//!     println!("MSFT trailing P/E: {}", pe.fmt);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod fundamentals;
pub mod history;
pub mod news;
pub mod quote;
mod ticker;

pub use crate::core::{
    AgentPicker, AuthStatus, Cookie, FixedPicker, Interval, PriceBar, QuotedValue, RandomPicker,
    Range, RequestSigner, Session, SignedRequest, YfClient, YfClientBuilder, YfError,
};
pub use fundamentals::{
    BalanceSheet, CashFlow, DividendInfo, FinancialData, IncomeStatement, Ratios, Summary,
};
pub use history::{HistoryQuery, PriceSeries};
pub use news::{NewsItem, Thumbnail};
pub use quote::TickerInfo;
pub use ticker::Ticker;
