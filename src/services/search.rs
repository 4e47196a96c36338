use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use crate::services::api::ProductSource;
use crate::ui::{render_products, DisplayRegion};

/// Debounced product search bound to one results container.
///
/// Each call to [`ProductSearch::search`] replaces the pending timer. Once a
/// timer fires the lookup runs to completion even if newer searches follow;
/// its result is only rendered if no newer lookup was dispatched meanwhile.
pub struct ProductSearch {
    shared: Arc<Shared>,
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

struct Shared {
    source: Arc<dyn ProductSource>,
    region: Arc<dyn DisplayRegion>,
    dispatched: AtomicU64,
    applied: Mutex<u64>,
}

impl ProductSearch {
    pub fn new(
        source: Arc<dyn ProductSource>,
        region: Arc<dyn DisplayRegion>,
        delay: Duration,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                source,
                region,
                dispatched: AtomicU64::new(0),
                applied: Mutex::new(0),
            }),
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedules a lookup for `query`. Must be called from within a Tokio
    /// runtime.
    pub fn search(&self, query: impl Into<String>) {
        let query = query.into();
        let shared = Arc::clone(&self.shared);
        let delay = self.delay;

        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Detached so that a later search cannot abort a request that is
            // already on the wire.
            tokio::spawn(shared.dispatch(query));
        });

        let Ok(mut pending) = self.pending.lock() else {
            timer.abort();
            return;
        };
        if let Some(previous) = pending.replace(timer) {
            previous.abort();
        }
    }

    /// Number of lookups that actually left the debounce window.
    pub fn dispatched(&self) -> u64 {
        self.shared.dispatched.load(Ordering::SeqCst)
    }

    pub fn cancel(&self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(timer) = pending.take() {
                timer.abort();
            }
        }
    }
}

impl Drop for ProductSearch {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl Shared {
    async fn dispatch(self: Arc<Self>, query: String) {
        let sequence = self.dispatched.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(sequence, query = %query, "Dispatching product search");

        match self.source.search_products(&query).await {
            Ok(Some(products)) => {
                let Ok(mut applied) = self.applied.lock() else {
                    return;
                };
                if sequence < self.dispatched.load(Ordering::SeqCst) || sequence <= *applied {
                    debug!(sequence, query = %query, "Discarding stale search response");
                    return;
                }
                info!(sequence, results = products.len(), "Rendering search results");
                self.region.replace_html(render_products(&products));
                *applied = sequence;
            }
            Ok(None) => {
                debug!(sequence, query = %query, "Search reported failure, keeping results");
            }
            Err(e) => {
                debug!(error = %e, query = %query, "Product search failed, keeping results");
            }
        }
    }
}
