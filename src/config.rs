//! Application-level configuration loading, including the token signing settings.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "LEMONMAZE_BACK_CONFIG_PATH";
/// Signing secret used when no configuration file provides one.
const DEFAULT_TOKEN_SECRET: &str = "lemonmaze-dev-secret";
/// Lifetime of issued login tokens, in seconds.
const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    token_secret: String,
    token_ttl_secs: i64,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to baked-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let config: Self = raw.into();
                    info!(path = %path.display(), "loaded configuration file");
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Secret used to sign login tokens.
    pub fn token_secret(&self) -> &str {
        &self.token_secret
    }

    /// Lifetime of issued login tokens, in seconds.
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl_secs
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            token_secret: DEFAULT_TOKEN_SECRET.to_owned(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    token_secret: Option<String>,
    token_ttl_secs: Option<i64>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = AppConfig::default();
        Self {
            token_secret: value.token_secret.unwrap_or(defaults.token_secret),
            token_ttl_secs: value.token_ttl_secs.unwrap_or(defaults.token_ttl_secs),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let raw = RawConfig {
            token_secret: Some("s3cret".into()),
            token_ttl_secs: None,
        };
        let config: AppConfig = raw.into();
        assert_eq!(config.token_secret(), "s3cret");
        assert_eq!(config.token_ttl_secs(), DEFAULT_TOKEN_TTL_SECS);
    }
}
