//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use reqwest::Url;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("invalid {key}={value:?}: {reason}")]
    Invalid { key: &'static str, value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Backend base URL. Always ends with `/` so relative joins stay under it.
    pub api_url: Url,
    pub api_timeout: Duration,
}

impl Config {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `FOODSHARE_API_URL`: backend base URL (`http` or `https`)
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `FOODSHARE_API_TIMEOUT_SECS`: default 15
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a missing or unparseable variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let timeout_secs = parse_or("FOODSHARE_API_TIMEOUT_SECS", lookup("FOODSHARE_API_TIMEOUT_SECS"), DEFAULT_API_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "FOODSHARE_API_TIMEOUT_SECS",
                value: "0".to_owned(),
                reason: "must be positive".to_owned(),
            });
        }

        let raw_url = lookup("FOODSHARE_API_URL")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("FOODSHARE_API_URL"))?;
        let api_url = parse_api_url(&raw_url)?;

        Ok(Self { port, api_url, api_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_or<T: std::str::FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            value: value.to_owned(),
            reason: e.to_string(),
        }),
    }
}

fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid { key: "FOODSHARE_API_URL", value: raw.to_owned(), reason };
    let mut url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https".to_owned()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
