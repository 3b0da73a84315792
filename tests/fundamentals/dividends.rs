use crate::common;
use yfinance_lite::{Ticker, YfError};

const DIVIDEND_MODULES: &str =
    "summaryDetail,defaultKeyStatistics,cashflowStatementHistory,calendarEvents";

#[tokio::test]
async fn dividend_info_falls_back_field_by_field() {
    let server = common::setup_server();
    let (_cookie, _crumb) = common::mock_cookie_crumb(&server);
    let api = common::mock_quote_summary(&server, "KO", DIVIDEND_MODULES, 200, "quotesummary_dividend_KO");

    let client = common::client_for(&server);
    let ticker = Ticker::new(&client, "KO");
    let d = ticker.dividend_info().await.unwrap();
    api.assert();

    // summaryDetail yield beats the keyStatistics one
    assert_eq!(d.dividend_yield.as_ref().map(|q| q.raw), Some(0.0301));
    // summaryDetail has no rate, keyStatistics does
    assert_eq!(d.dividend_rate.as_ref().map(|q| q.raw), Some(1.94));
    assert_eq!(d.payout_ratio.as_ref().map(|q| q.fmt.as_str()), Some("77.92%"));
    assert_eq!(d.five_year_avg_dividend_yield.as_ref().map(|q| q.raw), Some(3.06));
    // most recent cash-flow entry only
    assert_eq!(d.dividends_paid.as_ref().map(|q| q.raw), Some(-8_358_000_000.0));
    // summaryDetail reports null, calendarEvents fills in
    assert_eq!(
        d.ex_dividend_date.as_ref().map(|q| q.fmt.as_str()),
        Some("2024-11-29")
    );
    assert_eq!(d.dividend_date.as_ref().map(|q| q.raw), Some(1_734_048_000.0));

    assert!(ticker.is_dividend_paying().await.unwrap());
    assert!((ticker.dividend_rate().await.unwrap() - 1.94).abs() < 1e-12);
    assert!((ticker.current_dividend_yield().await.unwrap() - 0.0301).abs() < 1e-12);
}

#[tokio::test]
async fn zero_dividend_rate_is_a_value() {
    let server = common::setup_server();
    let (_cookie, _crumb) = common::mock_cookie_crumb(&server);
    let _api = common::mock_quote_summary(
        &server,
        "TSLA",
        DIVIDEND_MODULES,
        200,
        "quotesummary_dividend_zero_TSLA",
    );

    let client = common::client_for(&server);
    let ticker = Ticker::new(&client, "TSLA");

    let rate = ticker.dividend_rate().await.unwrap();
    assert!(rate.abs() < f64::EPSILON);
    assert!(!ticker.is_dividend_paying().await.unwrap());

    let err = ticker.current_dividend_yield().await.unwrap_err();
    assert_eq!(err.to_string(), "dividend yield not available for symbol: TSLA");
}

#[tokio::test]
async fn absent_dividend_rate_is_not_available() {
    let server = common::setup_server();
    let (_cookie, _crumb) = common::mock_cookie_crumb(&server);
    let _api = common::mock_quote_summary(
        &server,
        "AMZN",
        DIVIDEND_MODULES,
        200,
        "quotesummary_dividend_absent_AMZN",
    );

    let client = common::client_for(&server);
    let ticker = Ticker::new(&client, "AMZN");

    let err = ticker.dividend_rate().await.unwrap_err();
    assert!(matches!(err, YfError::NotAvailable { what: "dividend rate", .. }));
    assert_eq!(err.to_string(), "dividend rate not available for symbol: AMZN");
    assert!(!err.is_not_found());

    assert!(!ticker.is_dividend_paying().await.unwrap());
}

#[tokio::test]
async fn dividend_info_for_unknown_symbol_is_not_found() {
    let server = common::setup_server();
    let (_cookie, _crumb) = common::mock_cookie_crumb(&server);
    let _api = common::mock_quote_summary(&server, "NOPE", DIVIDEND_MODULES, 404, "quotesummary_not_found");

    let client = common::client_for(&server);
    let err = Ticker::new(&client, "NOPE").dividend_rate().await.unwrap_err();
    assert_eq!(err.to_string(), "no dividend info found for symbol: NOPE");
}
