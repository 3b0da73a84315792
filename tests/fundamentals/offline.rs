use crate::common;
use yfinance_lite::{Ticker, YfError};

const FINANCIAL_MODULES: &str = "defaultKeyStatistics,financialData,summaryDetail,incomeStatementHistory,balanceSheetHistory,cashflowStatementHistory";

fn raw(v: Option<&yfinance_lite::QuotedValue>) -> Option<f64> {
    v.map(|q| q.raw)
}

#[tokio::test]
async fn ratios_follow_module_precedence() {
    let server = common::setup_server();
    let (_cookie, _crumb) = common::mock_cookie_crumb(&server);
    let api = common::mock_quote_summary(
        &server,
        "AAPL",
        "defaultKeyStatistics,financialData,summaryDetail",
        200,
        "quotesummary_financial_AAPL",
    );

    let client = common::client_for(&server);
    let r = Ticker::new(&client, "AAPL").financial_ratios().await.unwrap();
    api.assert();

    // summaryDetail wins over defaultKeyStatistics
    assert_eq!(raw(r.price_to_earnings.as_ref()), Some(28.5));
    // only defaultKeyStatistics has it, so the fallback fills it
    assert_eq!(raw(r.price_to_book.as_ref()), Some(60.12));
    assert_eq!(raw(r.price_to_sales.as_ref()), Some(8.72));
    assert_eq!(raw(r.enterprise_to_ebitda.as_ref()), Some(25.83));
    assert_eq!(raw(r.return_on_equity.as_ref()), Some(1.5741));
    assert_eq!(raw(r.dividend_yield.as_ref()), Some(0.0044));
    assert_eq!(r.quick_ratio, None);
    assert_eq!(
        r.price_to_earnings.as_ref().map(|q| q.fmt.as_str()),
        Some("28.50")
    );
}

#[tokio::test]
async fn key_statistics_lead_with_default_key_statistics() {
    let server = common::setup_server();
    let (_cookie, _crumb) = common::mock_cookie_crumb(&server);
    let api = common::mock_quote_summary(
        &server,
        "AAPL",
        "defaultKeyStatistics,summaryDetail",
        200,
        "quotesummary_financial_AAPL",
    );

    let client = common::client_for(&server);
    let s = Ticker::new(&client, "AAPL").key_statistics().await.unwrap();
    api.assert();

    assert_eq!(s.max_age, Some(1));
    assert_eq!(raw(s.trailing_pe.as_ref()), Some(30.1));
    // gaps are filled from summaryDetail
    assert_eq!(raw(s.beta.as_ref()), Some(1.24));
    assert_eq!(
        s.market_cap.as_ref().and_then(|q| q.long_fmt.as_deref()),
        Some("3,401,000,000,000")
    );
    // `{}` and `null` are both absent
    assert_eq!(s.peg_ratio, None);
    assert_eq!(s.fifty_two_week_low, None);
}

#[tokio::test]
async fn financial_data_bundles_every_record() {
    let server = common::setup_server();
    let (_cookie, _crumb) = common::mock_cookie_crumb(&server);
    let api = common::mock_quote_summary(
        &server,
        "AAPL",
        FINANCIAL_MODULES,
        200,
        "quotesummary_financial_AAPL",
    );

    let client = common::client_for(&server);
    let fd = Ticker::new(&client, "AAPL").financial_data().await.unwrap();
    api.assert();

    assert_eq!(raw(fd.ratios.price_to_earnings.as_ref()), Some(28.5));
    assert_eq!(raw(fd.summary.trailing_pe.as_ref()), Some(30.1));

    let inc = &fd.income_statement;
    assert_eq!(inc.end_date.as_ref().map(|d| d.fmt.as_str()), Some("2024-09-30"));
    assert_eq!(raw(inc.total_revenue.as_ref()), Some(391_035_000_000.0));
    assert_eq!(raw(inc.earnings_per_share.as_ref()), Some(6.08));
    assert_eq!(inc.operating_income, None);

    let bs = &fd.balance_sheet;
    assert_eq!(raw(bs.total_liabilities.as_ref()), Some(308_030_000_000.0));
    assert_eq!(raw(bs.short_term_debt.as_ref()), Some(10_912_000_000.0));
    assert_eq!(raw(bs.long_term_debt.as_ref()), Some(85_750_000_000.0));
    assert_eq!(raw(bs.book_value_per_share.as_ref()), Some(3.767));

    let cf = &fd.cash_flow;
    assert_eq!(raw(cf.operating_cash_flow.as_ref()), Some(118_254_000_000.0));
    assert_eq!(raw(cf.free_cash_flow.as_ref()), Some(108_807_000_000.0));
    assert_eq!(raw(cf.dividends_paid.as_ref()), Some(-15_234_000_000.0));
}

#[tokio::test]
async fn empty_statement_list_is_all_absent_but_empty_result_is_an_error() {
    let server = common::setup_server();
    let (_cookie, _crumb) = common::mock_cookie_crumb(&server);
    let api = common::mock_quote_summary(
        &server,
        "AAPL",
        "balanceSheetHistory",
        200,
        "quotesummary_balance_empty_AAPL",
    );
    let empty = common::mock_quote_summary(
        &server,
        "NOPE",
        "balanceSheetHistory",
        200,
        "quotesummary_empty",
    );

    let client = common::client_for(&server);
    let bs = Ticker::new(&client, "AAPL").balance_sheet().await.unwrap();
    assert_eq!(bs, yfinance_lite::BalanceSheet::default());
    api.assert();

    let err = Ticker::new(&client, "NOPE").balance_sheet().await.unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err:?}");
    assert_eq!(err.to_string(), "no balance sheet found for symbol: NOPE");
    empty.assert();
}

#[tokio::test]
async fn upstream_error_envelope_on_404_is_not_found() {
    let server = common::setup_server();
    let (_cookie, _crumb) = common::mock_cookie_crumb(&server);
    let api = common::mock_quote_summary(
        &server,
        "NOPE",
        "incomeStatementHistory",
        404,
        "quotesummary_not_found",
    );

    let client = common::client_for(&server);
    let err = Ticker::new(&client, "NOPE")
        .income_statement()
        .await
        .unwrap_err();
    api.assert();
    match err {
        YfError::NotFound { what, symbol } => {
            assert_eq!(what, "income statement");
            assert_eq!(symbol, "NOPE");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_error_page_reports_the_status() {
    let server = common::setup_server();
    let (_cookie, _crumb) = common::mock_cookie_crumb(&server);
    let api = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/v10/finance/quoteSummary/AAPL");
        then.status(503).body("<html>Service Unavailable</html>");
    });

    let client = common::client_for(&server);
    let err = Ticker::new(&client, "AAPL").cash_flow().await.unwrap_err();
    api.assert();
    assert!(
        matches!(err, YfError::Status { status: 503, .. }),
        "unexpected error: {err:?}"
    );
}
