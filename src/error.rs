use http::{Method, StatusCode};
use thiserror::Error;
use url::{ParseError, Url};

pub type Result<T> = std::result::Result<T, Error>;

/// All errors returned by the SDK.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Non-2xx HTTP response from the panel, carrying the raw body text.
    #[error("HTTP {status} ({method} {url}): {body}")]
    Http {
        status: StatusCode,
        method: Method,
        url: Url,
        body: String,
    },

    /// Transport failure (`reqwest`): DNS, connect, timeout.
    #[error("Transport error during {method} {url}: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
        method: Method,
        url: Url,
    },

    /// URL construction failure.
    #[error(transparent)]
    Url(#[from] ParseError),

    /// JSON (de)serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Invalid client configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: Box<str>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// HTTP status of the failed request, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}
