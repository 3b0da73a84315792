use crate::common;
use httpmock::Method::GET;
use std::time::Duration;
use url::Url;
use yfinance_lite::{AuthStatus, Ticker, YfClient};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_first_use_fetches_cookie_and_crumb_once() {
    let server = common::setup_server();
    let cookie = server.mock(|when, then| {
        when.method(GET).path("/consent");
        then.status(404)
            .header("set-cookie", "A=B; Path=/")
            .delay(Duration::from_millis(50));
    });
    let crumb = server.mock(|when, then| {
        when.method(GET).path("/v1/test/getcrumb");
        then.status(200)
            .body(common::CRUMB)
            .delay(Duration::from_millis(50));
    });

    let client = common::client_for(&server);
    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move {
                let status = client.session().ensure_authenticated().await;
                (status, client.session().crumb().map(str::to_owned))
            })
        })
        .collect();

    for res in futures::future::join_all(tasks).await {
        let (status, crumb) = res.unwrap();
        assert_eq!(status, AuthStatus::Authenticated);
        assert_eq!(crumb.as_deref(), Some(common::CRUMB));
    }

    cookie.assert_calls(1);
    crumb.assert_calls(1);
    assert_eq!(client.session().cookies().len(), 1);
    assert_eq!(client.session().cookies()[0].name, "A");
}

#[tokio::test]
async fn rejected_crumb_degrades_to_crumbless_requests_and_is_not_retried() {
    let server = common::setup_server();
    let cookie = server.mock(|when, then| {
        when.method(GET).path("/consent");
        then.status(404).header("set-cookie", "A=B; Path=/");
    });
    let crumb = server.mock(|when, then| {
        when.method(GET).path("/v1/test/getcrumb");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"finance":{"result":null,"error":{"code":"Unauthorized","description":"Invalid Cookie"}}}"#);
    });
    let body = common::fixture("quotesummary_price_AAPL");
    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/v10/finance/quoteSummary/AAPL")
            .query_param("modules", "price")
            .header("cookie", "A=B")
            .is_true(|req| !req.query_params().iter().any(|(k, _)| k == "crumb"));
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });

    let client = common::client_for(&server);
    let ticker = Ticker::new(&client, "AAPL");

    let info = ticker.info().await.unwrap();
    assert_eq!(info.symbol, "AAPL");
    let _ = ticker.info().await.unwrap();

    assert_eq!(
        client.session().ensure_authenticated().await,
        AuthStatus::Unauthenticated
    );
    assert!(client.session().is_bootstrapped());
    assert_eq!(client.session().crumb(), None);
    api.assert_calls(2);
    cookie.assert_calls(1);
    crumb.assert_calls(1);
}

#[tokio::test]
async fn markup_crumb_body_is_not_stored() {
    let server = common::setup_server();
    let _cookie = server.mock(|when, then| {
        when.method(GET).path("/consent");
        then.status(404).header("set-cookie", "A=B; Path=/");
    });
    let _crumb = server.mock(|when, then| {
        when.method(GET).path("/v1/test/getcrumb");
        then.status(200).body("<html><body>Too Many Requests</body></html>");
    });

    let client = common::client_for(&server);
    assert_eq!(
        client.session().ensure_authenticated().await,
        AuthStatus::Unauthenticated
    );
    assert_eq!(client.session().crumb(), None);
    // cookies survive a failed crumb fetch
    assert_eq!(client.session().cookies().len(), 1);
}

#[tokio::test]
async fn unreachable_cookie_endpoint_is_tolerated() {
    let server = common::setup_server();
    let crumb = server.mock(|when, then| {
        when.method(GET).path("/v1/test/getcrumb");
        then.status(200).body(common::CRUMB);
    });

    let client = YfClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .cookie_url(Url::parse("http://127.0.0.1:9/consent").unwrap())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    assert!(client.session().ensure_authenticated().await.is_authenticated());
    assert!(client.session().cookies().is_empty());
    assert_eq!(client.session().crumb(), Some(common::CRUMB));
    crumb.assert();
}

#[tokio::test]
async fn clones_share_a_session_and_new_clients_do_not() {
    let server = common::setup_server();
    let (cookie, crumb) = common::mock_cookie_crumb(&server);

    let a = common::client_for(&server);
    let b = a.clone();
    a.session().ensure_authenticated().await;
    b.session().ensure_authenticated().await;
    cookie.assert_calls(1);
    crumb.assert_calls(1);

    let fresh = common::client_for(&server);
    assert!(!fresh.session().is_bootstrapped());
    fresh.session().ensure_authenticated().await;
    cookie.assert_calls(2);
    crumb.assert_calls(2);
}
