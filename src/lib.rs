pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod page;
pub mod services;
pub mod ui;

pub use config::Settings;
pub use error::{Error, Result};
pub use page::{init, Page, PageHandles};
pub use services::{ApiService, DashboardPoller, ProductSearch};
