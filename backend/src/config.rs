//! Runtime configuration, read from the environment once at startup.
//!
//! `main` loads an optional `.env` file first, so every variable below can live
//! either in the process environment or in that file.

use std::time::Duration;

pub const DEFAULT_TABLE: &str = "rag_sources";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Connection settings of the managed data store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub service_key: String,
    pub table: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub host: String,
    pub port: u16,
    /// Opens the panel in the local browser once the server is up.
    pub open_browser: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Blank values count
    /// as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let url = get("SUPABASE_URL");
        let service_key = get("SUPABASE_SERVICE_KEY");
        let missing: Vec<&'static str> = [
            ("SUPABASE_URL", url.is_none()),
            ("SUPABASE_SERVICE_KEY", service_key.is_none()),
        ]
            .into_iter()
            .filter_map(|(name, absent)| absent.then_some(name))
            .collect();
        let (Some(url), Some(service_key)) = (url, service_key) else {
            return Err(ConfigError::Missing(missing));
        };

        let port = match get("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match get("STORE_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "STORE_TIMEOUT_SECS",
                        value,
                    })
                }
            },
            None => DEFAULT_STORE_TIMEOUT_SECS,
        };

        let open_browser = match get("OPEN_BROWSER").as_deref().map(str::trim) {
            None | Some("0") | Some("false") | Some("no") => false,
            Some("1") | Some("true") | Some("yes") => true,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "OPEN_BROWSER",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            store: StoreConfig {
                url: url.trim().trim_end_matches('/').to_string(),
                service_key,
                table: get("SOURCES_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            open_browser,
        })
    }

    pub fn public_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn reports_every_missing_variable() {
        let err = AppConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required environment variables: SUPABASE_URL, SUPABASE_SERVICE_KEY"
        );

        let err = AppConfig::from_lookup(lookup(&[("SUPABASE_URL", "https://x.supabase.co")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::Missing(vec!["SUPABASE_SERVICE_KEY"]));
    }

    #[test]
    fn blank_values_count_as_missing() {
        let err = AppConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "  "),
            ("SUPABASE_SERVICE_KEY", "key"),
        ]))
            .unwrap_err();
        assert_eq!(err, ConfigError::Missing(vec!["SUPABASE_URL"]));
    }

    #[test]
    fn applies_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://x.supabase.co/"),
            ("SUPABASE_SERVICE_KEY", "key"),
        ]))
            .unwrap();

        assert_eq!(config.store.url, "https://x.supabase.co");
        assert_eq!(config.store.table, DEFAULT_TABLE);
        assert_eq!(config.store.timeout, Duration::from_secs(30));
        assert_eq!(config.public_url(), "http://127.0.0.1:8080");
        assert!(!config.open_browser);
    }

    #[test]
    fn reads_overrides_and_rejects_bad_numbers() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://x.supabase.co"),
            ("SUPABASE_SERVICE_KEY", "key"),
            ("SOURCES_TABLE", "sources_staging"),
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("STORE_TIMEOUT_SECS", "5"),
            ("OPEN_BROWSER", "true"),
        ]))
            .unwrap();
        assert_eq!(config.store.table, "sources_staging");
        assert_eq!(config.port, 9000);
        assert_eq!(config.store.timeout, Duration::from_secs(5));
        assert!(config.open_browser);

        let err = AppConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://x.supabase.co"),
            ("SUPABASE_SERVICE_KEY", "key"),
            ("PORT", "eighty"),
        ]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "PORT",
                value: "eighty".to_string()
            }
        );
    }
}
