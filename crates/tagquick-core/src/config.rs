use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

pub const URL_ENV: &str = "TAGQUICK_URL";
pub const TIMEOUT_ENV: &str = "TAGQUICK_TIMEOUT";

/// Tag server client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Root of the gallery server, API paths are resolved against it
    pub base_url: String,
    /// Connection timeout in seconds
    pub connect_timeout_seconds: u32,
    /// Whole-request timeout in seconds
    pub request_timeout_seconds: u32,
    /// User agent to send (reqwest's default when unset)
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8887/".to_string(),
            connect_timeout_seconds: 10,
            request_timeout_seconds: 30,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Defaults, overlaid with the user config file, overlaid with the environment
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Override fields from environment-style lookups
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(URL_ENV) {
            self.base_url = url;
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            self.request_timeout_seconds = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base()?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }
        if self.connect_timeout_seconds == 0 || self.request_timeout_seconds == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Base URL with a trailing slash so relative joins keep its path
    pub fn base(&self) -> Result<Url, ConfigError> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl {
            url: self.base_url.clone(),
            source,
        })
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.request_timeout_seconds))
    }
}

/// `<config dir>/tagquick/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tagquick").join("config.json"))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid base URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
    #[error("Timeouts must be at least one second")]
    ZeroTimeout,
    #[error("Invalid timeout value: {0}")]
    InvalidTimeout(String),
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_points_at_local_server() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8887/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_base_gets_trailing_slash() {
        let config = ClientConfig::with_base_url("http://example.com/gallery");
        assert_eq!(config.base().unwrap().as_str(), "http://example.com/gallery/");
    }

    #[test]
    fn test_validate_rejects_non_http() {
        let config = ClientConfig::with_base_url("ftp://example.com/");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnsupportedScheme(s)) if s == "ftp"
        ));
    }

    #[test]
    fn test_validate_rejects_garbage_url() {
        let config = ClientConfig::with_base_url("not a url");
        assert!(matches!(config.validate(), Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = ClientConfig {
            request_timeout_seconds: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTimeout)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ClientConfig::default();
        config
            .apply_env(env(&[(URL_ENV, "http://10.0.0.2:9000"), (TIMEOUT_ENV, " 5 ")]))
            .unwrap();

        assert_eq!(config.base_url, "http://10.0.0.2:9000");
        assert_eq!(config.request_timeout_seconds, 5);
        assert_eq!(config.connect_timeout_seconds, 10);
    }

    #[test]
    fn test_env_bad_timeout() {
        let mut config = ClientConfig::default();
        let result = config.apply_env(env(&[(TIMEOUT_ENV, "soon")]));
        assert!(matches!(result, Err(ConfigError::InvalidTimeout(v)) if v == "soon"));
    }

    #[test]
    fn test_from_file_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"base_url": "http://gallery.local/"}"#).unwrap();

        let config = ClientConfig::from_file(&path).unwrap();
        assert_eq!(config.base_url, "http://gallery.local/");
        assert_eq!(config.request_timeout_seconds, 30);
        assert_eq!(config.user_agent, None);
    }

    #[test]
    fn test_from_file_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ nope").unwrap();

        assert!(matches!(
            ClientConfig::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_config_serialization() {
        let config = ClientConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ClientConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
