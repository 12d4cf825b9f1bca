use std::env;
use std::time::Duration;

use anyhow::{anyhow, Result};

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8086";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_POOL_SIZE: usize = 4;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Process configuration, read from `TSGRAPH_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub backend_url: String,
    pub listen_addr: String,
    pub pool_size: usize,
    /// `None` disables the per-fetch timeout.
    pub fetch_timeout: Option<Duration>,
    pub log_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            pool_size: DEFAULT_POOL_SIZE,
            fetch_timeout: Some(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS)),
            log_dir: DEFAULT_LOG_DIR.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let pool_size = match lookup("TSGRAPH_POOL_SIZE") {
            Some(raw) => {
                let n: usize = raw
                    .trim()
                    .parse()
                    .map_err(|e| anyhow!("invalid TSGRAPH_POOL_SIZE {:?}: {}", raw, e))?;
                if n == 0 {
                    return Err(anyhow!("TSGRAPH_POOL_SIZE must be at least 1"));
                }
                n
            }
            None => defaults.pool_size,
        };

        let fetch_timeout = match lookup("TSGRAPH_FETCH_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|e| anyhow!("invalid TSGRAPH_FETCH_TIMEOUT_SECS {:?}: {}", raw, e))?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => defaults.fetch_timeout,
        };

        Ok(Self {
            backend_url: lookup("TSGRAPH_BACKEND_URL").unwrap_or(defaults.backend_url),
            listen_addr: lookup("TSGRAPH_LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            pool_size,
            fetch_timeout,
            log_dir: lookup("TSGRAPH_LOG_DIR").unwrap_or(defaults.log_dir),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn falls_back_to_defaults() {
        assert_eq!(config_from(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("TSGRAPH_BACKEND_URL", "http://tsdb:9000"),
            ("TSGRAPH_LISTEN_ADDR", "127.0.0.1:3000"),
            ("TSGRAPH_POOL_SIZE", "8"),
            ("TSGRAPH_FETCH_TIMEOUT_SECS", "0"),
            ("TSGRAPH_LOG_DIR", "/var/log/tsgraph"),
        ])
        .unwrap();

        assert_eq!(config.backend_url, "http://tsdb:9000");
        assert_eq!(config.listen_addr, "127.0.0.1:3000");
        assert_eq!(config.pool_size, 8);
        assert_eq!(config.fetch_timeout, None);
        assert_eq!(config.log_dir, "/var/log/tsgraph");
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(config_from(&[("TSGRAPH_POOL_SIZE", "many")]).is_err());
        assert!(config_from(&[("TSGRAPH_POOL_SIZE", "0")]).is_err());
        assert!(config_from(&[("TSGRAPH_FETCH_TIMEOUT_SECS", "-1")]).is_err());
    }
}
