//! Order-intake entry point.
//!
//! Reads `YYYY-MM-DD;Customer Name;DESCRIPTOR` lines from stdin, fills them
//! and prints the shop report as JSON on stdout. Logs go to stderr.

use shop::{Config, SharedShop};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> shop::Result<()> {
    let config = Config::from_env();

    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // 2. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // 3. Seed the shop
    let stock = config.opening_stock()?;
    tracing::info!(opening_stock = %stock, "opening shop");
    let shop = SharedShop::with_stock(&stock);

    // 4. Fill orders from stdin
    let summary = shop.ingest(BufReader::new(tokio::io::stdin())).await?;

    // 5. Report
    let report = shop.report(config.top_n).await;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if config.render_metrics {
        eprintln!("{}", metrics_handle.render());
    }

    if summary.rejected > 0 {
        tracing::warn!(rejected = summary.rejected, "some order lines were rejected");
    }
    Ok(())
}
