//! Error types for the Earnings Feed API client.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when using the Earnings Feed API.
#[derive(Debug, Error)]
pub enum Error {
    /// The API key was rejected (HTTP 401).
    #[error("authentication failed: {message}")]
    Authentication {
        /// Message reported by the API.
        message: String,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("not found: {message}")]
    NotFound {
        /// Message reported by the API.
        message: String,
    },

    /// The request parameters were rejected (HTTP 400).
    #[error("invalid request: {message}")]
    Validation {
        /// Message reported by the API.
        message: String,
    },

    /// Too many requests (HTTP 429).
    #[error("rate limit exceeded: {message}")]
    RateLimit {
        /// Message reported by the API.
        message: String,
        /// Epoch seconds at which the quota resets, from `X-RateLimit-Reset`.
        reset_at: Option<i64>,
    },

    /// Any other non-success status.
    #[error("API error (HTTP {status_code}): {message}")]
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Message reported by the API.
        message: String,
        /// Machine-readable error code from the body, if any.
        code: Option<String>,
    },

    /// The request never produced an HTTP response.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A successful response did not contain the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Missing API key.
    #[error("EARNINGSFEED_API_KEY environment variable not set")]
    MissingApiKey,

    /// Environment variable error.
    #[error("environment error: {0}")]
    Env(#[from] dotenvy::Error),

    /// Invalid client configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The client was closed before the call.
    #[error("client is closed")]
    Closed,
}

impl Error {
    /// Map a non-success HTTP response to an error.
    ///
    /// `rate_limit_reset` is the raw `X-RateLimit-Reset` header value. The body
    /// may be anything; fields that cannot be read are treated as absent.
    pub(crate) fn from_response(
        status: StatusCode,
        rate_limit_reset: Option<&str>,
        body: &[u8],
    ) -> Self {
        let body = ErrorBody::parse(body);
        let message = body
            .message
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

        match status {
            StatusCode::UNAUTHORIZED => Self::Authentication { message },
            StatusCode::NOT_FOUND => Self::NotFound { message },
            StatusCode::BAD_REQUEST => Self::Validation { message },
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimit {
                message,
                reset_at: rate_limit_reset.and_then(|v| v.trim().parse().ok()),
            },
            _ => Self::Api {
                status_code: status.as_u16(),
                message,
                code: body.code,
            },
        }
    }

    /// HTTP status code behind this error, if it came from a response.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Authentication { .. } => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::Validation { .. } => Some(400),
            Self::RateLimit { .. } => Some(429),
            Self::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Machine-readable error code reported by the API.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

/// The fields we read out of an error body.
#[derive(Debug, Default)]
struct ErrorBody {
    message: Option<String>,
    code: Option<String>,
}

impl ErrorBody {
    fn parse(body: &[u8]) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) else {
            return Self::default();
        };
        let text = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_owned);

        Self {
            message: text("error").or_else(|| text("message")),
            code: text("code"),
        }
    }
}
