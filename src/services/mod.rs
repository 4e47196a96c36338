pub mod api;
pub mod dashboard;
pub mod search;

pub use api::{ApiService, ProductSource, StatsSource};
pub use dashboard::DashboardPoller;
pub use search::ProductSearch;
