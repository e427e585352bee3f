use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// `~/.config/loan-intake/config.toml` on Linux, the platform equivalent
    /// elsewhere via `dirs::config_dir()`, or the current directory when there
    /// is none.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("loan-intake").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - A missing file yields `Config::default()`.
    /// - Bank-link credentials from the environment win over the file.
    /// - The result is validated before it is returned.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Config::default()
        };

        config.apply_env(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply `PLAID_CLIENT_ID` / `PLAID_SECRET` overrides.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(id) = lookup("PLAID_CLIENT_ID").filter(|v| !v.is_empty()) {
            self.bank_link.client_id = Some(id);
        }
        if let Some(secret) = lookup("PLAID_SECRET").filter(|v| !v.is_empty()) {
            self.bank_link.secret = Some(secret);
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Both bind addresses parse as socket addresses
    /// - The lender URL is http(s)
    /// - Timeouts are non-zero
    /// - The maximum amount is a positive finite number
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, addr) in [
            ("lender.bind_addr", &self.lender.bind_addr),
            ("portal.bind_addr", &self.portal.bind_addr),
        ] {
            addr.parse::<SocketAddr>()
                .map_err(|e| ConfigError::ValidationError {
                    message: format!("{} '{}' is not a socket address: {}", name, addr, e),
                })?;
        }

        let url = &self.client.lender_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("client.lender_url '{}' must be an http(s) URL", url),
            });
        }

        if self.client.timeout_seconds == 0
            || self.client.connect_timeout_seconds == 0
            || self.bank_link.timeout_seconds == 0
        {
            return Err(ConfigError::ValidationError {
                message: "Timeouts must be greater than zero".to_string(),
            });
        }

        let max = self.form.max_amount;
        if !max.is_finite() || max <= 0.0 {
            return Err(ConfigError::ValidationError {
                message: format!("form.max_amount must be a positive number, got {}", max),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn env_overrides_bank_link_credentials() {
        let mut config = Config::default();
        config.apply_env(|name| match name {
            "PLAID_CLIENT_ID" => Some("client".to_string()),
            "PLAID_SECRET" => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.bank_link.client_id.as_deref(), Some("client"));
        assert_eq!(config.bank_link.secret, None);
    }

    #[test]
    fn rejects_negative_max_amount() {
        let mut config = Config::default();
        config.form.max_amount = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
