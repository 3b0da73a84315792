use crate::common;
use httpmock::Method::GET;
use url::Url;
use yfinance_lite::{FixedPicker, RequestSigner, Ticker, YfClient, YfError};

#[tokio::test]
async fn crumb_cookie_and_user_agent_are_attached() {
    let server = common::setup_server();
    let (cookie, crumb) = common::mock_cookie_crumb(&server);
    let body = common::fixture("quotesummary_price_AAPL");
    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/v10/finance/quoteSummary/AAPL")
            .query_param("modules", "price")
            .query_param("crumb", common::CRUMB)
            .header("cookie", "A=B")
            .header("user-agent", "ua-1");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });

    let client = YfClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .cookie_url(Url::parse(&format!("{}/consent", server.base_url())).unwrap())
        .user_agents(["ua-0", "ua-1", "ua-2"])
        .agent_picker(FixedPicker(1))
        .build()
        .unwrap();

    Ticker::new(&client, "AAPL").info().await.unwrap();
    cookie.assert();
    crumb.assert();
    api.assert();
}

#[tokio::test]
async fn signer_reflects_session_state_without_triggering_it() {
    let server = common::setup_server();
    let (cookie, _crumb) = common::mock_cookie_crumb(&server);
    let client = common::client_for(&server);
    let url = Url::parse(&format!("{}/v8/finance/chart/AAPL", server.base_url())).unwrap();

    let before = RequestSigner::new(client.session()).sign(url.clone(), &[("range", "1y")]);
    assert_eq!(before.url.query(), Some("range=1y"));
    assert_eq!(before.cookie, None);
    assert_eq!(before.user_agent, common::UA);
    cookie.assert_calls(0);

    client.session().ensure_authenticated().await;
    let after = RequestSigner::new(client.session()).sign(url, &[("range", "1y")]);
    assert_eq!(
        after.url.query(),
        Some(format!("range=1y&crumb={}", common::CRUMB).as_str())
    );
    assert_eq!(after.cookie.as_deref(), Some("A=B"));
}

#[test]
fn empty_user_agent_pool_is_rejected() {
    let err = YfClient::builder()
        .user_agents(Vec::<String>::new())
        .build()
        .unwrap_err();
    assert!(matches!(err, YfError::Config(_)));
}
