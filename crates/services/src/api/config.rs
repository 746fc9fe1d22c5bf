use tracing::{debug, info};
use url::Url;

use crate::error::ConfigError;

pub const API_URL_ENV: &str = "BIBLIA_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Where the backend lives. Every endpoint path is resolved against `base_url`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` if `raw` is not an absolute http(s) URL.
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        let mut base_url = Url::parse(trimmed).map_err(|source| ConfigError::InvalidApiUrl {
            raw: trimmed.to_owned(),
            source,
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(trimmed.to_owned()));
        }

        // `Url::join` drops the last segment unless the base ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { base_url })
    }

    /// Read `BIBLIA_API_URL` through `lookup`, falling back to `DEFAULT_API_URL`
    /// when unset or blank. Pass `|key| std::env::var(key).ok()` for the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configured value is not a valid http(s) URL.
    pub fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match lookup(API_URL_ENV) {
            Some(value) if !value.trim().is_empty() => {
                info!("{API_URL_ENV} set, using {value}");
                Self::new(&value)
            }
            _ => {
                debug!("{API_URL_ENV} not set, using default: {DEFAULT_API_URL}");
                Self::new(DEFAULT_API_URL)
            }
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path such as `readings/today` against the base URL.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the joined URL is invalid.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path.trim_start_matches('/'))
    }
}
