use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use storefront_client::config::Settings;
use storefront_client::ui::{Counter, CounterSink, DisplayRegion};
use storefront_client::{init, ApiService, PageHandles};

/// Prints every markup replacement to stdout.
struct StdoutRegion;

impl DisplayRegion for StdoutRegion {
    fn replace_html(&self, html: String) {
        println!("{}", html.trim());
    }
}

struct StdoutCounters;

impl CounterSink for StdoutCounters {
    fn set_counter(&self, counter: Counter, text: String) {
        println!("{}: {}", counter.element_id(), text);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::new()?;
    let path = std::env::args().nth(1).unwrap_or_else(|| "/products".to_string());

    info!(base_url = %settings.api.base_url, path = %path, "Starting storefront client");

    let api = Arc::new(ApiService::from_config(&settings.api)?);
    if let Some(ping) = api.ping().await? {
        info!(message = %ping.message, authenticated = ping.authenticated, "API reachable");
    }

    let handles = PageHandles {
        product_container: Some(Arc::new(StdoutRegion)),
        counters: Some(Arc::new(StdoutCounters)),
    };
    let page = init(&path, handles, api, &settings);

    // Each stdin line is a keystroke-level update of the search box.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        page.search(line);
    }

    if page.is_polling() {
        info!("Input closed, polling until interrupted");
        tokio::signal::ctrl_c().await?;
    } else {
        // Let the last debounced search land before exiting.
        tokio::time::sleep(settings.search.debounce() + Duration::from_secs(2)).await;
    }

    Ok(())
}
