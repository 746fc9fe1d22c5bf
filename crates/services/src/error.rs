//! Shared error types for the services crate.

use reqwest::StatusCode;
use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by the backend API client.
///
/// `Unauthorized` and `NotFound` are split out because callers react to them
/// differently from every other failure.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("the server rejected the session token")]
    Unauthorized,
    #[error("the requested resource does not exist")]
    NotFound,
    #[error("request failed with status {0}")]
    Status(StatusCode),
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("malformed response: {0}")]
    InvalidPayload(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// Classify a non-success status.
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::NOT_FOUND => Self::NotFound,
            other => Self::Status(other),
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            Self::NotFound => Some(StatusCode::NOT_FOUND),
            Self::Status(status) => Some(*status),
            Self::Http(err) => err.status(),
            _ => None,
        }
    }
}

/// Errors emitted while reading client configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid api url `{raw}`: {source}")]
    InvalidApiUrl {
        raw: String,
        source: url::ParseError,
    },
    #[error("api url `{0}` must use http or https")]
    UnsupportedScheme(String),
}

/// Errors emitted by `SessionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
