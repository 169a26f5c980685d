use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::domain::RaceId;

const DEFAULT_GAMMA_URL: &str = "https://gamma-api.polymarket.com";
const MAX_RETRIES_LIMIT: u8 = 10;
const MAX_RETRY_BACKOFF_MS: u64 = 60_000;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub races: RaceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Gamma REST endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Extra attempts after a retryable failure (0 = single attempt)
    #[serde(default)]
    pub max_retries: u8,
    /// Base delay for exponential backoff between attempts
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_GAMMA_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_retry_backoff_ms() -> u64 {
    500
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: 0,
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}

/// Gamma event slugs for the three races
#[derive(Debug, Clone, Deserialize)]
pub struct RaceConfig {
    #[serde(default = "default_democratic_slug")]
    pub democratic: String,
    #[serde(default = "default_republican_slug")]
    pub republican: String,
    #[serde(default = "default_president_slug")]
    pub president: String,
}

fn default_democratic_slug() -> String {
    RaceId::Democratic.default_slug().to_string()
}

fn default_republican_slug() -> String {
    RaceId::Republican.default_slug().to_string()
}

fn default_president_slug() -> String {
    RaceId::President.default_slug().to_string()
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            democratic: default_democratic_slug(),
            republican: default_republican_slug(),
            president: default_president_slug(),
        }
    }
}

impl RaceConfig {
    /// Slug in effect for a race
    pub fn slug(&self, race: RaceId) -> &str {
        match race {
            RaceId::Democratic => &self.democratic,
            RaceId::Republican => &self.republican,
            RaceId::President => &self.president,
        }
    }

    /// Races paired with their slugs, in processing order
    pub fn in_order(&self) -> Vec<(RaceId, String)> {
        RaceId::ALL
            .into_iter()
            .map(|race| (race, self.slug(race).to_string()))
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
    /// Directory for the dashboard's log file
    #[serde(default = "default_log_dir")]
    pub dir: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            dir: default_log_dir(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            races: RaceConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("api.base_url", DEFAULT_GAMMA_URL)?
            .set_default("api.timeout_secs", 30)?
            .set_default("api.max_retries", 0)?
            .set_default("api.retry_backoff_ms", 500)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .set_default("logging.dir", "logs")?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("POLYODDS_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (POLYODDS_API__TIMEOUT_SECS, etc.)
            .add_source(
                Environment::with_prefix("POLYODDS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.api.base_url.trim().is_empty() {
            errors.push("api.base_url must not be empty".to_string());
        } else if !self.api.base_url.starts_with("http://")
            && !self.api.base_url.starts_with("https://")
        {
            errors.push(format!(
                "api.base_url must be an http(s) URL, got '{}'",
                self.api.base_url
            ));
        }

        if self.api.timeout_secs == 0 {
            errors.push("api.timeout_secs must be positive".to_string());
        }

        if self.api.max_retries > MAX_RETRIES_LIMIT {
            errors.push(format!(
                "api.max_retries must be at most {}, got {}",
                MAX_RETRIES_LIMIT, self.api.max_retries
            ));
        }

        if self.api.retry_backoff_ms > MAX_RETRY_BACKOFF_MS {
            errors.push(format!(
                "api.retry_backoff_ms must be at most {}, got {}",
                MAX_RETRY_BACKOFF_MS, self.api.retry_backoff_ms
            ));
        }

        let slugs = self.races.in_order();
        for (race, slug) in &slugs {
            if slug.trim().is_empty() {
                errors.push(format!("races.{} slug must not be empty", race));
            }
        }
        for (i, (race, slug)) in slugs.iter().enumerate() {
            if let Some((other, _)) = slugs[..i].iter().find(|(_, s)| s == slug) {
                errors.push(format!(
                    "races.{} and races.{} share the slug '{}'",
                    other, race, slug
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.timeout(), Duration::from_secs(30));
        assert_eq!(config.api.max_retries, 0);
        assert_eq!(
            config.races.slug(RaceId::President),
            "presidential-election-winner-2028"
        );
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let config = AppConfig::load_from("does-not-exist").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_GAMMA_URL);
        assert_eq!(config.logging.level, "info");
        assert_eq!(
            config.races.slug(RaceId::Democratic),
            "democratic-presidential-nominee-2028"
        );
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = AppConfig::default();
        config.api.base_url = "gamma".to_string();
        config.api.timeout_secs = 0;
        config.races.president = config.races.democratic.clone();

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("share the slug")));
    }

    #[test]
    fn test_validate_rejects_unbounded_retries() {
        let mut config = AppConfig::default();
        config.api.max_retries = 40;
        config.api.retry_backoff_ms = u64::MAX;

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.contains("api.max_retries")));
        assert!(errors.iter().any(|e| e.contains("api.retry_backoff_ms")));

        config.api.max_retries = 10;
        config.api.retry_backoff_ms = 60_000;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_race_order() {
        let order: Vec<_> = RaceConfig::default()
            .in_order()
            .into_iter()
            .map(|(race, _)| race)
            .collect();
        assert_eq!(order, RaceId::ALL.to_vec());
    }
}
