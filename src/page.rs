use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use crate::config::Settings;
use crate::services::{DashboardPoller, ProductSearch, ProductSource, StatsSource};
use crate::ui::{CounterSink, DisplayRegion};

/// Page elements the client may write into. Missing elements are `None`
/// and the matching behavior is skipped.
#[derive(Clone, Default)]
pub struct PageHandles {
    pub product_container: Option<Arc<dyn DisplayRegion>>,
    pub counters: Option<Arc<dyn CounterSink>>,
}

/// Everything wired for one page. Dropping it stops polling and any
/// pending search.
pub struct Page {
    search: Option<ProductSearch>,
    poller: Option<JoinHandle<()>>,
}

/// Wires search and dashboard polling for the page at `path`. Must be called
/// from within a Tokio runtime.
pub fn init<S>(path: &str, handles: PageHandles, source: Arc<S>, settings: &Settings) -> Page
where
    S: ProductSource + StatsSource + 'static,
{
    let search = handles.product_container.map(|region| {
        debug!(path, "Product container found, enabling search");
        ProductSearch::new(source.clone(), region, settings.search.debounce())
    });

    let poller = if settings.dashboard.matches(path) {
        info!(path, "Dashboard page detected");
        Some(
            DashboardPoller::new(source, handles.counters, settings.dashboard.poll_interval())
                .spawn(),
        )
    } else {
        None
    };

    Page { search, poller }
}

impl Page {
    /// Forwards to the debounced search; a no-op on pages without a product
    /// container.
    pub fn search(&self, query: impl Into<String>) {
        match &self.search {
            Some(search) => search.search(query),
            None => debug!("No product container on this page, ignoring search"),
        }
    }

    pub fn has_search(&self) -> bool {
        self.search.is_some()
    }

    pub fn is_polling(&self) -> bool {
        self.poller.is_some()
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.abort();
        }
    }
}
