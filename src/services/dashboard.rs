use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};
use crate::services::api::StatsSource;
use crate::ui::render::counter_values;
use crate::ui::CounterSink;

#[derive(Clone)]
pub struct DashboardPoller {
    source: Arc<dyn StatsSource>,
    counters: Option<Arc<dyn CounterSink>>,
    interval: Duration,
}

impl DashboardPoller {
    pub fn new(
        source: Arc<dyn StatsSource>,
        counters: Option<Arc<dyn CounterSink>>,
        interval: Duration,
    ) -> Self {
        Self { source, counters, interval }
    }

    /// One fetch-and-update cycle. Returns whether the counters were updated.
    pub async fn refresh(&self) -> bool {
        match self.source.dashboard_stats().await {
            Ok(Some(stats)) => {
                debug!(
                    total_users = stats.total_users,
                    total_products = stats.total_products,
                    total_uploads = stats.total_uploads,
                    total_activities = stats.total_activities,
                    "Dashboard stats received"
                );
                if let Some(counters) = &self.counters {
                    for (counter, text) in counter_values(&stats) {
                        counters.set_counter(counter, text);
                    }
                }
                true
            }
            Ok(None) => {
                debug!("Dashboard stats reported failure, keeping counters");
                false
            }
            Err(e) => {
                debug!(error = %e, "Failed to load dashboard stats, keeping counters");
                false
            }
        }
    }

    /// Refreshes immediately, then once per interval until the handle is
    /// aborted.
    pub fn spawn(self) -> JoinHandle<()> {
        info!(interval_ms = self.interval.as_millis() as u64, "Starting dashboard polling");

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                self.refresh().await;
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::models::DashboardStats;
    use crate::ui::{Counter, MemoryCounters};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves scripted replies in order, then repeats the last one.
    struct ScriptedStats {
        calls: AtomicUsize,
        replies: Vec<Option<u64>>,
    }

    impl ScriptedStats {
        fn new(replies: Vec<Option<u64>>) -> Self {
            Self { calls: AtomicUsize::new(0), replies }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    fn stats(users: u64) -> DashboardStats {
        DashboardStats {
            total_users: users,
            total_products: 12,
            total_uploads: 3,
            total_activities: 40,
            recent_activities: Vec::new(),
            products_by_category: HashMap::new(),
        }
    }

    #[async_trait]
    impl StatsSource for ScriptedStats {
        async fn dashboard_stats(&self) -> Result<Option<DashboardStats>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let reply = self.replies[call.min(self.replies.len() - 1)];
            match reply {
                Some(0) => Ok(None),
                Some(users) => Ok(Some(stats(users))),
                None => Err(Error::MissingField("stats".into())),
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn polls_immediately_then_every_interval() {
        let source = Arc::new(ScriptedStats::new(vec![Some(5)]));
        let counters = MemoryCounters::new();
        let handle = DashboardPoller::new(
            source.clone(),
            Some(Arc::new(counters.clone())),
            Duration::from_millis(30_000),
        )
        .spawn();

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(source.calls(), 1);
        assert_eq!(counters.get(Counter::TotalUsers).as_deref(), Some("5"));
        assert_eq!(counters.get(Counter::TotalActivities).as_deref(), Some("40"));

        tokio::time::sleep(Duration::from_millis(29_000)).await;
        assert_eq!(source.calls(), 1);

        tokio::time::sleep(Duration::from_millis(1_000)).await;
        assert_eq!(source.calls(), 2);

        tokio::time::sleep(Duration::from_millis(90_000)).await;
        assert_eq!(source.calls(), 5);

        handle.abort();
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_counters() {
        let source = Arc::new(ScriptedStats::new(vec![Some(7), Some(0), None]));
        let counters = MemoryCounters::new();
        let poller = DashboardPoller::new(
            source.clone(),
            Some(Arc::new(counters.clone())),
            Duration::from_secs(30),
        );

        assert!(poller.refresh().await);
        assert!(!poller.refresh().await);
        assert!(!poller.refresh().await);

        assert_eq!(source.calls(), 3);
        assert_eq!(counters.get(Counter::TotalUsers).as_deref(), Some("7"));
        assert_eq!(counters.get(Counter::TotalProducts).as_deref(), Some("12"));
    }

    #[tokio::test]
    async fn refresh_without_counters_still_fetches() {
        let source = Arc::new(ScriptedStats::new(vec![Some(1)]));
        let poller = DashboardPoller::new(source.clone(), None, Duration::from_secs(30));

        assert!(poller.refresh().await);
        assert_eq!(source.calls(), 1);
    }
}
