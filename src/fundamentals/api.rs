use crate::core::{QuotedValue, YfClient, YfError, quotesummary::fetch_module_result};

use super::merge;
use super::model::{
    BalanceSheet, CashFlow, DividendInfo, FinancialData, IncomeStatement, Ratios, Summary,
};
use super::wire::V10Result;

const FINANCIAL_DATA_MODULES: &[&str] = &[
    "defaultKeyStatistics",
    "financialData",
    "summaryDetail",
    "incomeStatementHistory",
    "balanceSheetHistory",
    "cashflowStatementHistory",
];
const RATIO_MODULES: &[&str] = &["defaultKeyStatistics", "financialData", "summaryDetail"];
const KEY_STATISTICS_MODULES: &[&str] = &["defaultKeyStatistics", "summaryDetail"];
const DIVIDEND_MODULES: &[&str] = &[
    "summaryDetail",
    "defaultKeyStatistics",
    "cashflowStatementHistory",
    "calendarEvents",
];

async fn fetch(
    client: &YfClient,
    symbol: &str,
    modules: &[&str],
    what: &'static str,
) -> Result<V10Result, YfError> {
    fetch_module_result::<V10Result>(client, symbol, modules, what).await
}

pub(super) async fn financial_data(
    client: &YfClient,
    symbol: &str,
) -> Result<FinancialData, YfError> {
    let r = fetch(client, symbol, FINANCIAL_DATA_MODULES, "financial data").await?;
    Ok(FinancialData {
        ratios: merge::ratios(&r),
        summary: merge::summary(&r),
        income_statement: merge::income_statement(&r),
        balance_sheet: merge::balance_sheet(&r),
        cash_flow: merge::cash_flow(&r),
    })
}

pub(super) async fn ratios(client: &YfClient, symbol: &str) -> Result<Ratios, YfError> {
    let r = fetch(client, symbol, RATIO_MODULES, "financial ratios").await?;
    Ok(merge::ratios(&r))
}

pub(super) async fn key_statistics(client: &YfClient, symbol: &str) -> Result<Summary, YfError> {
    let r = fetch(client, symbol, KEY_STATISTICS_MODULES, "key statistics").await?;
    Ok(merge::summary(&r))
}

pub(super) async fn income_statement(
    client: &YfClient,
    symbol: &str,
) -> Result<IncomeStatement, YfError> {
    let r = fetch(client, symbol, &["incomeStatementHistory"], "income statement").await?;
    Ok(merge::income_statement(&r))
}

pub(super) async fn balance_sheet(client: &YfClient, symbol: &str) -> Result<BalanceSheet, YfError> {
    let r = fetch(client, symbol, &["balanceSheetHistory"], "balance sheet").await?;
    Ok(merge::balance_sheet(&r))
}

pub(super) async fn cash_flow(client: &YfClient, symbol: &str) -> Result<CashFlow, YfError> {
    let r = fetch(client, symbol, &["cashflowStatementHistory"], "cash flow").await?;
    Ok(merge::cash_flow(&r))
}

pub(super) async fn dividend_info(client: &YfClient, symbol: &str) -> Result<DividendInfo, YfError> {
    let r = fetch(client, symbol, DIVIDEND_MODULES, "dividend info").await?;
    Ok(merge::dividend_info(&r))
}

/* ---------------- single-metric lookups ---------------- */

fn require(v: Option<&QuotedValue>, what: &'static str, symbol: &str) -> Result<f64, YfError> {
    v.map(|q| q.raw)
        .ok_or_else(|| YfError::not_available(what, symbol))
}

/// Annual dividend per share. A reported `0` is returned as-is.
pub(crate) fn dividend_rate_of(info: &DividendInfo, symbol: &str) -> Result<f64, YfError> {
    require(info.dividend_rate.as_ref(), "dividend rate", symbol)
}

pub(crate) fn dividend_yield_of(info: &DividendInfo, symbol: &str) -> Result<f64, YfError> {
    require(info.dividend_yield.as_ref(), "dividend yield", symbol)
}

/// Paying means a reported, strictly positive rate.
pub(crate) fn pays_dividend(info: &DividendInfo) -> bool {
    info.dividend_rate.as_ref().is_some_and(|r| r.raw > 0.0)
}
