use crate::common;
use httpmock::{Method::GET, Mock, MockServer};
use yfinance_lite::Ticker;

fn mock_search<'a>(server: &'a MockServer, count: &str, start: &str, fixture: &str) -> Mock<'a> {
    let body = common::fixture(fixture);
    server.mock(|when, then| {
        when.method(GET)
            .path("/v1/finance/search")
            .query_param("symbols", "AAPL")
            .query_param("count", count)
            .query_param("start", start)
            .query_param("region", "US")
            .query_param("lang", "en-US")
            .query_param("crumb", common::CRUMB);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

#[tokio::test]
async fn non_positive_paging_uses_defaults() {
    let server = common::setup_server();
    let (_cookie, _crumb) = common::mock_cookie_crumb(&server);
    let search = mock_search(&server, "10", "0", "news_AAPL");

    let client = common::client_for(&server);
    let items = Ticker::new(&client, "AAPL").news(0, -3).await.unwrap();
    search.assert();

    assert_eq!(items.len(), 2);
    let first = &items[0];
    assert_eq!(first.title, "Apple unveils new products");
    assert_eq!(first.publisher.as_deref(), Some("Reuters"));
    assert_eq!(first.provider_publish_time, 1_734_120_000);
    assert_eq!(first.kind.as_deref(), Some("STORY"));
    assert_eq!(first.thumbnails.len(), 2);
    assert_eq!(first.thumbnails[1].tag.as_deref(), Some("140x140"));
    assert_eq!(first.related_tickers, ["AAPL", "MSFT"]);

    let second = &items[1];
    assert!(second.thumbnails.is_empty());
    assert!(second.related_tickers.is_empty());
}

#[tokio::test]
async fn explicit_paging_is_passed_through() {
    let server = common::setup_server();
    let (_cookie, _crumb) = common::mock_cookie_crumb(&server);
    let search = mock_search(&server, "25", "50", "news_AAPL");

    let client = common::client_for(&server);
    Ticker::new(&client, "AAPL").news(25, 50).await.unwrap();
    search.assert();
}

#[tokio::test]
async fn nested_result_shape_is_read() {
    let server = common::setup_server();
    let (_cookie, _crumb) = common::mock_cookie_crumb(&server);
    let _search = mock_search(&server, "10", "0", "news_nested_AAPL");

    let client = common::client_for(&server);
    let items = Ticker::new(&client, "AAPL").news(10, 0).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].uuid, "nested-1");
    assert_eq!(items[0].link, None);
}

#[tokio::test]
async fn response_without_news_is_empty() {
    let server = common::setup_server();
    let (_cookie, _crumb) = common::mock_cookie_crumb(&server);
    let _search = mock_search(&server, "10", "0", "news_none_AAPL");

    let client = common::client_for(&server);
    let items = Ticker::new(&client, "AAPL").news(10, 0).await.unwrap();
    assert!(items.is_empty());
}
