use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::logging::LogFormat;
use crate::twitter::DEFAULT_API_BASE;

#[derive(Debug, Clone)]
pub struct Config {
    pub bearer_token: Option<String>,
    pub api_base: String,
    pub page_delay: Duration,
    pub log_format: LogFormat,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Try to load .env from multiple locations
        Self::try_load_dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup, `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Missing token is not an error here; the API will answer 401
        let bearer_token = lookup("BEARER_TOKEN").filter(|t| !t.is_empty());

        let api_base = lookup("TWEETER_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let page_delay = match lookup("TWEETER_PAGE_DELAY_MS") {
            Some(ms) => Duration::from_millis(
                ms.trim()
                    .parse()
                    .with_context(|| {
                        format!("TWEETER_PAGE_DELAY_MS must be a number of milliseconds, got '{}'", ms)
                    })?,
            ),
            None => Duration::ZERO,
        };

        let log_format = match lookup("TWEETER_LOG_FORMAT") {
            Some(format) => format.parse().map_err(anyhow::Error::msg)?,
            None => LogFormat::Text,
        };

        let log_level = lookup("TWEETER_LOG_LEVEL").unwrap_or_else(|| "warn".to_string());

        Ok(Self {
            bearer_token,
            api_base,
            page_delay,
            log_format,
            log_level,
        })
    }

    fn try_load_dotenv() {
        // Try locations in order of preference:

        // 1. Current directory (for development)
        if dotenvy::dotenv().is_ok() {
            return;
        }

        // 2. ~/.config/guess-that-tweeter/.env (standard config location)
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("guess-that-tweeter").join(".env");
            if config_path.exists() && dotenvy::from_path(&config_path).is_ok() {
                return;
            }
        }

        // 3. ~/.env (home directory)
        if let Some(home_dir) = dirs::home_dir() {
            let home_path = home_dir.join(".env");
            if home_path.exists() {
                let _ = dotenvy::from_path(&home_path);
            }
        }

        // If none found, that's okay - environment variables might be set system-wide
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bearer_token, None);
        assert_eq!(config.api_base, "https://api.twitter.com");
        assert_eq!(config.page_delay, Duration::ZERO);
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("BEARER_TOKEN", "secret"),
            ("TWEETER_API_BASE", "http://127.0.0.1:9000"),
            ("TWEETER_PAGE_DELAY_MS", "250"),
            ("TWEETER_LOG_FORMAT", "json"),
            ("TWEETER_LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.bearer_token.as_deref(), Some("secret"));
        assert_eq!(config.api_base, "http://127.0.0.1:9000");
        assert_eq!(config.page_delay, Duration::from_millis(250));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_empty_token_counts_as_missing() {
        let config = Config::from_lookup(lookup(&[("BEARER_TOKEN", "")])).unwrap();
        assert_eq!(config.bearer_token, None);
    }

    #[test]
    fn test_bad_values_rejected() {
        let err = Config::from_lookup(lookup(&[("TWEETER_PAGE_DELAY_MS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("TWEETER_PAGE_DELAY_MS"));

        assert!(Config::from_lookup(lookup(&[("TWEETER_LOG_FORMAT", "xml")])).is_err());
    }
}
