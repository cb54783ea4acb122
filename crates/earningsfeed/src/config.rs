//! Client configuration.

use crate::{Result, error::Error};
use std::env;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://earningsfeed.com";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "EARNINGSFEED_API_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "EARNINGSFEED_BASE_URL";

/// Settings used to build a [`Client`](crate::Client).
#[derive(Clone)]
pub struct Config {
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
}

impl Config {
    /// Create a configuration with the default base URL and user agent.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: default_user_agent(),
        }
    }

    /// Load the configuration from the environment.
    ///
    /// Reads `EARNINGSFEED_API_KEY` and, if set, `EARNINGSFEED_BASE_URL`.
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set or a `.env` file exists but
    /// cannot be parsed.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e.into()),
        }

        let api_key = env::var(API_KEY_ENV).map_err(|_| Error::MissingApiKey)?;
        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        Ok(config)
    }

    /// Override the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured user agent.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Check the configuration and normalize the base URL.
    pub(crate) fn validate(mut self) -> Result<Self> {
        if self.api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }

        let trimmed = self.base_url.trim().trim_end_matches('/');
        let parsed = reqwest::Url::parse(trimmed)
            .map_err(|e| Error::Config(format!("invalid base URL {trimmed:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "base URL must be http or https, got {:?}",
                parsed.scheme()
            )));
        }
        self.base_url = trimmed.to_string();

        Ok(self)
    }
}

// Keeps the API key out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn default_user_agent() -> String {
    format!("earningsfeed-rust/{}", crate::VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("key");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert!(config.user_agent().starts_with("earningsfeed-rust/"));
    }

    #[test]
    fn test_validate_trims_trailing_slash() {
        let config = Config::new("key")
            .with_base_url("https://api.test.com/")
            .validate()
            .unwrap();
        assert_eq!(config.base_url(), "https://api.test.com");
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        assert!(matches!(
            Config::new("  ").validate(),
            Err(Error::MissingApiKey)
        ));
        assert!(matches!(
            Config::new("key").with_base_url("not a url").validate(),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::new("key").with_base_url("ftp://api.test.com").validate(),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let rendered = format!("{:?}", Config::new("secret-key"));
        assert!(!rendered.contains("secret-key"));
    }
}
