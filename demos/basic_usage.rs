use yfinance_lite::{HistoryQuery, Interval, Range, Ticker, YfClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = YfClient::default();
    let symbol = std::env::args().nth(1).unwrap_or_else(|| "AAPL".to_string());
    let ticker = Ticker::new(&client, &symbol);

    println!("--- Info for {symbol} ---");
    let info = ticker.info().await?;
    println!(
        "{} ({}) on {}: {}",
        info.long_name.as_deref().unwrap_or("n/a"),
        info.symbol,
        info.exchange_name.as_deref().unwrap_or("n/a"),
        info.regular_market_price
            .as_ref()
            .map_or("n/a", |p| p.fmt.as_str())
    );
    println!(
        "session authenticated: {}",
        client.session().crumb().is_some()
    );

    println!("\n--- Last 5 daily bars ---");
    let bars = ticker
        .history(HistoryQuery::new().range(Range::M1).interval(Interval::D1))
        .await?;
    for (day, bar) in bars.iter().rev().take(5) {
        println!(
            "{day}: open={:?} close={:?} volume={:?}",
            bar.open, bar.close, bar.volume
        );
    }

    println!("\n--- Ratios ---");
    let ratios = ticker.financial_ratios().await?;
    let show = |name: &str, v: Option<&yfinance_lite::QuotedValue>| {
        println!("{name:>20}: {}", v.map_or("-", |q| q.fmt.as_str()));
    };
    show("P/E", ratios.price_to_earnings.as_ref());
    show("P/B", ratios.price_to_book.as_ref());
    show("ROE", ratios.return_on_equity.as_ref());
    show("Debt/Equity", ratios.debt_to_equity.as_ref());

    println!("\n--- Dividends ---");
    match ticker.dividend_rate().await {
        Ok(rate) => println!("annual rate: {rate:.2}"),
        Err(e) => println!("{e}"),
    }

    println!("\n--- Headlines ---");
    for item in ticker.news(5, 0).await? {
        println!(
            "[{}] {}",
            item.publisher.as_deref().unwrap_or("?"),
            item.title
        );
    }

    Ok(())
}
