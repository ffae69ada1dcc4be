use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{anyhow, bail, Context};
use axum::http::HeaderValue;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_PATH: &str = "./db/lumeo.db";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Where entity collections live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Sqlite,
    Memory,
}

impl FromStr for StorageKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageKind::Sqlite),
            "memory" => Ok(StorageKind::Memory),
            other => Err(anyhow!(
                "Invalid LUMEO_STORAGE '{}': expected 'sqlite' or 'memory'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow!(
                "Invalid LUMEO_LOG_FORMAT '{}': expected 'text' or 'json'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub storage: StorageKind,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
}

impl Config {
    /// Reads `LUMEO_*` variables, honouring a `.env` file if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = var("LUMEO_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("Invalid LUMEO_LISTEN_ADDR")?;

        let storage = match var("LUMEO_STORAGE") {
            Some(value) => value.parse()?,
            None => StorageKind::Sqlite,
        };

        let db_path = var("LUMEO_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.into());
        if db_path.trim().is_empty() {
            bail!("LUMEO_DB_PATH must not be empty");
        }

        let cors_allow: Vec<String> = var("LUMEO_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        for origin in cors_allow.iter().filter(|o| o.as_str() != "*") {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid origin '{}' in LUMEO_CORS_ALLOW_ORIGINS", origin))?;
        }

        let timeout_ms: u64 = match var("LUMEO_REQUEST_TIMEOUT_MS") {
            Some(value) => value
                .trim()
                .parse()
                .with_context(|| format!("Invalid LUMEO_REQUEST_TIMEOUT_MS '{}'", value))?,
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };
        if timeout_ms == 0 {
            bail!("LUMEO_REQUEST_TIMEOUT_MS must be greater than zero");
        }

        let log_format = match var("LUMEO_LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => LogFormat::Text,
        };

        Ok(Self {
            listen_addr,
            storage,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.storage, StorageKind::Sqlite);
        assert_eq!(config.db_path, "./db/lumeo.db");
        assert_eq!(config.cors_allow, vec!["*".to_string()]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn values_are_parsed() {
        let config = config_from(&[
            ("LUMEO_LISTEN_ADDR", "127.0.0.1:9000"),
            ("LUMEO_STORAGE", "memory"),
            ("LUMEO_CORS_ALLOW_ORIGINS", "http://localhost:5173, https://lumeo.app"),
            ("LUMEO_REQUEST_TIMEOUT_MS", "1500"),
            ("LUMEO_LOG_FORMAT", "JSON"),
        ])
        .unwrap();

        assert_eq!(config.storage, StorageKind::Memory);
        assert_eq!(
            config.cors_allow,
            vec!["http://localhost:5173".to_string(), "https://lumeo.app".to_string()]
        );
        assert_eq!(config.request_timeout, Duration::from_millis(1500));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn invalid_values_fail_with_the_variable_name() {
        let err = config_from(&[("LUMEO_REQUEST_TIMEOUT_MS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("LUMEO_REQUEST_TIMEOUT_MS"));

        let err = config_from(&[("LUMEO_STORAGE", "postgres")]).unwrap_err();
        assert!(err.to_string().contains("LUMEO_STORAGE"));

        let err = config_from(&[("LUMEO_LISTEN_ADDR", "nowhere")]).unwrap_err();
        assert!(err.to_string().contains("LUMEO_LISTEN_ADDR"));
    }
}
