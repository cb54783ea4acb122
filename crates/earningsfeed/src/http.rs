//! Authenticated HTTP transport shared by all resource clients.

use crate::{Result, config::Config, error::Error};
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tracing::{debug, warn};

/// Header carrying the epoch second at which a rate limit window resets.
const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

/// Query for endpoints that take no parameters.
pub(crate) const NO_QUERY: &[(&str, &str)] = &[];

/// Cheap, cloneable handle to the underlying connection pool.
#[derive(Debug, Clone)]
pub(crate) struct Http {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    client: Client,
    base_url: String,
    closed: AtomicBool,
}

impl Http {
    pub(crate) fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| Error::Config("API key contains invalid header characters".into()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|_| Error::Config("user agent contains invalid header characters".into()))?,
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            inner: Arc::new(Inner {
                client,
                base_url: config.base_url.clone(),
                closed: AtomicBool::new(false),
            }),
        })
    }

    /// Mark the handle closed for every clone sharing it.
    pub(crate) fn close(&self) {
        if !self.inner.closed.swap(true, Ordering::SeqCst) {
            debug!("client closed");
        }
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Build an absolute URL for an API path.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Make a GET request and parse the JSON response.
    pub(crate) async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        if self.is_closed() {
            return Err(Error::Closed);
        }

        let url = self.url(path);
        debug!(%url, "GET");
        let response = self.inner.client.get(&url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let reset = response
                .headers()
                .get(RATE_LIMIT_RESET)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);
            let body = response.bytes().await.unwrap_or_default();
            let err = Error::from_response(status, reset.as_deref(), &body);
            warn!(%url, status = status.as_u16(), error = %err, "request failed");
            return Err(err);
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Percent-encode a value for use as a single path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
