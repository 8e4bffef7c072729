//! Application configuration.
//!
//! Use the builder pattern to customize startup behavior.
//!
//! ```ignore
//! use covid_timeline::config::AppConfig;
//!
//! let config = AppConfig::from_env()
//!     .with_data_root("/srv/covid/dataset")
//!     .with_log_filter("debug");
//! ```

use std::path::PathBuf;

/// Environment variable overriding the dataset root.
pub const DATA_ENV: &str = "COVID_TIMELINE_DATA";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "COVID_TIMELINE_LOG";

const DEFAULT_DATA_ROOT: &str = "../dataset";
const DEFAULT_LOG_FILTER: &str = "info";
const LOG_FILE_NAME: &str = "covid-timeline.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Dataset directory containing `imported_data/` and `processed_data/`
    pub data_root: PathBuf,
    /// Log file; the terminal belongs to the TUI so logs go to disk
    pub log_file: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from(DEFAULT_DATA_ROOT),
            log_file: default_log_file(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.data_root = root.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Defaults overridden by `COVID_TIMELINE_DATA` and `COVID_TIMELINE_LOG`.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(root) = get(DATA_ENV).filter(|v| !v.is_empty()) {
            config = config.with_data_root(root);
        }
        if let Some(filter) = get(LOG_ENV).filter(|v| !v.is_empty()) {
            config = config.with_log_filter(filter);
        }
        config
    }
}

/// `<cache dir>/covid-timeline/covid-timeline.log`, or the working
/// directory when the platform has no cache directory.
fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("covid-timeline"))
        .unwrap_or_default()
        .join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.data_root, PathBuf::from("../dataset"));
        assert_eq!(config.log_filter, "info");
        assert!(config.log_file.ends_with("covid-timeline.log"));
    }

    #[test]
    fn test_builder_setters() {
        let config = AppConfig::new()
            .with_data_root("/data")
            .with_log_file("/tmp/t.log")
            .with_log_filter("debug");
        assert_eq!(config.data_root, PathBuf::from("/data"));
        assert_eq!(config.log_file, PathBuf::from("/tmp/t.log"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_from_vars_overrides() {
        let vars: HashMap<&str, &str> =
            [(DATA_ENV, "/srv/dataset"), (LOG_ENV, "covid_timeline=trace")].into();
        let config = AppConfig::from_vars(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.data_root, PathBuf::from("/srv/dataset"));
        assert_eq!(config.log_filter, "covid_timeline=trace");
    }

    #[test]
    fn test_from_vars_ignores_empty_values() {
        let config = AppConfig::from_vars(|_| Some(String::new()));
        assert_eq!(config, AppConfig::default());
    }
}
