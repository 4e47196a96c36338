use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use config::{Config, ConfigError};
use tracing::debug;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub api: ApiConfig,
    pub search: SearchConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub emulation: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    pub debounce_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub poll_interval_ms: u64,
    pub path_fragment: String,
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl DashboardConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn matches(&self, path: &str) -> bool {
        path.contains(&self.path_fragment)
    }
}

impl Settings {
    /// Loads `config/default.yaml` (optional) and `APP_*` overrides,
    /// e.g. `APP_API__BASE_URL=http://shop.local`.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(config::File::with_name("config/default").required(false))
                .add_source(
                    config::Environment::with_prefix("APP")
                        .prefix_separator("_")
                        .separator("__"),
                ),
        )
    }

    /// Built-in defaults only. Handy for tests and for embedding the client
    /// without a config directory.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::from_builder(Config::builder())
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let config = builder
            .set_default("api.base_url", "http://127.0.0.1:5000")?
            .set_default("api.emulation", "Chrome133")?
            .set_default("search.debounce_ms", 300_i64)?
            .set_default("dashboard.poll_interval_ms", 30_000_i64)?
            .set_default("dashboard.path_fragment", "dashboard")?
            .build()?;

        let settings: Settings = config.try_deserialize()?;

        debug!(
            base_url = %settings.api.base_url,
            headers = ?settings.api.headers,
            "Loaded client settings"
        );

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_timings() {
        let settings = Settings::defaults().unwrap();
        assert_eq!(settings.search.debounce(), Duration::from_millis(300));
        assert_eq!(settings.dashboard.poll_interval(), Duration::from_secs(30));
        assert_eq!(settings.api.emulation, "Chrome133");
        assert!(settings.api.headers.is_empty());
    }

    #[test]
    fn dashboard_fragment_is_a_substring_match() {
        let settings = Settings::defaults().unwrap();
        assert!(settings.dashboard.matches("/dashboard"));
        assert!(settings.dashboard.matches("/admin/dashboard/overview"));
        assert!(!settings.dashboard.matches("/products"));
    }

    #[test]
    fn env_overrides_take_single_underscore_after_prefix() {
        // SAFETY: no other test in this crate touches APP_* variables.
        unsafe {
            std::env::set_var("APP_API__BASE_URL", "http://shop.example");
            std::env::set_var("APP_DASHBOARD__PATH_FRAGMENT", "admin");
        }
        let settings = Settings::new();
        unsafe {
            std::env::remove_var("APP_API__BASE_URL");
            std::env::remove_var("APP_DASHBOARD__PATH_FRAGMENT");
        }

        let settings = settings.unwrap();
        assert_eq!(settings.api.base_url, "http://shop.example");
        assert!(settings.dashboard.matches("/admin/home"));
        assert_eq!(settings.search.debounce_ms, 300);
    }
}
