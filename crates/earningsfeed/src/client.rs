//! Earnings Feed API client.

use crate::{
    Result,
    config::Config,
    http::Http,
    resources::{Companies, Filings, Insider, Institutional},
};

/// Earnings Feed API client.
///
/// Cloning is cheap; clones and the resource handles they hand out share one
/// connection pool. After [`close`](Self::close) every call through any of
/// them fails with [`Error::Closed`](crate::Error::Closed).
#[derive(Debug, Clone)]
pub struct Client {
    http: Http,
}

impl Client {
    /// Create a new client with the given API key and default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or not a valid header value.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(Config::new(api_key))
    }

    /// Create a new client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn with_config(config: Config) -> Result<Self> {
        let config = config.validate()?;
        let http = Http::new(&config)?;
        tracing::debug!(base_url = config.base_url(), "client created");
        Ok(Self { http })
    }

    /// Create a new client from `EARNINGSFEED_API_KEY` (and optionally
    /// `EARNINGSFEED_BASE_URL`).
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self> {
        Self::with_config(Config::from_env()?)
    }

    /// The base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// SEC filings.
    #[must_use]
    pub fn filings(&self) -> Filings {
        Filings::new(self.http.clone())
    }

    /// Insider transactions.
    #[must_use]
    pub fn insider(&self) -> Insider {
        Insider::new(self.http.clone())
    }

    /// Institutional holdings.
    #[must_use]
    pub fn institutional(&self) -> Institutional {
        Institutional::new(self.http.clone())
    }

    /// Company profiles and search.
    #[must_use]
    pub fn companies(&self) -> Companies {
        Companies::new(self.http.clone())
    }

    /// Release the client. Later calls fail with
    /// [`Error::Closed`](crate::Error::Closed).
    pub fn close(&self) {
        self.http.close();
    }

    /// Whether [`close`](Self::close) has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.http.is_closed()
    }
}
