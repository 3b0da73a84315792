//! Normalized fundamentals from the multi-module quoteSummary endpoint.
//!
//! Each entry point requests its own module list and collapses the result into
//! a flat record of optional [`QuotedValue`](crate::QuotedValue)s. An empty
//! result array is [`YfError::NotFound`]; a missing module or field is `None`.

mod api;
mod merge;
mod model;
mod wire;

pub use model::{BalanceSheet, CashFlow, DividendInfo, FinancialData, IncomeStatement, Ratios, Summary};

use crate::{YfClient, YfError};

/// Ratios, key statistics and the latest statements in a single request.
pub async fn financial_data(client: &YfClient, symbol: &str) -> Result<FinancialData, YfError> {
    api::financial_data(client, symbol).await
}

pub async fn financial_ratios(client: &YfClient, symbol: &str) -> Result<Ratios, YfError> {
    api::ratios(client, symbol).await
}

pub async fn key_statistics(client: &YfClient, symbol: &str) -> Result<Summary, YfError> {
    api::key_statistics(client, symbol).await
}

pub async fn income_statement(client: &YfClient, symbol: &str) -> Result<IncomeStatement, YfError> {
    api::income_statement(client, symbol).await
}

pub async fn balance_sheet(client: &YfClient, symbol: &str) -> Result<BalanceSheet, YfError> {
    api::balance_sheet(client, symbol).await
}

pub async fn cash_flow(client: &YfClient, symbol: &str) -> Result<CashFlow, YfError> {
    api::cash_flow(client, symbol).await
}

pub async fn dividend_info(client: &YfClient, symbol: &str) -> Result<DividendInfo, YfError> {
    api::dividend_info(client, symbol).await
}

/// Current dividend yield.
///
/// # Errors
/// [`YfError::NotAvailable`] when the yield is not reported, plus any fetch error.
pub async fn current_dividend_yield(client: &YfClient, symbol: &str) -> Result<f64, YfError> {
    let info = api::dividend_info(client, symbol).await?;
    api::dividend_yield_of(&info, symbol)
}

/// Annual dividend per share. A reported `0` is returned as `Ok(0.0)`.
///
/// # Errors
/// [`YfError::NotAvailable`] when the rate is not reported, plus any fetch error.
pub async fn dividend_rate(client: &YfClient, symbol: &str) -> Result<f64, YfError> {
    let info = api::dividend_info(client, symbol).await?;
    api::dividend_rate_of(&info, symbol)
}

/// `true` when a strictly positive dividend rate is reported.
pub async fn is_dividend_paying(client: &YfClient, symbol: &str) -> Result<bool, YfError> {
    let info = api::dividend_info(client, symbol).await?;
    Ok(api::pays_dividend(&info))
}
