use std::sync::Arc;

use biblia_core::model::AuthToken;
use storage::repository::SessionRepository;
use tracing::{debug, info};

use crate::error::SessionServiceError;

/// Persists the session token between launches.
#[derive(Clone)]
pub struct SessionService {
    repo: Arc<dyn SessionRepository>,
}

impl SessionService {
    #[must_use]
    pub fn new(repo: Arc<dyn SessionRepository>) -> Self {
        Self { repo }
    }

    /// Load the token saved by a previous run, if any.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError` on storage failures.
    pub async fn restore(&self) -> Result<Option<AuthToken>, SessionServiceError> {
        let token = self.repo.load_token().await?;
        debug!(restored = token.is_some(), "session restore finished");
        Ok(token)
    }

    /// Persist `token` so the next launch starts signed in.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError` on storage failures.
    pub async fn remember(&self, token: &AuthToken) -> Result<(), SessionServiceError> {
        self.repo.save_token(token).await?;
        info!("session token stored");
        Ok(())
    }

    /// Drop the persisted token.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError` on storage failures.
    pub async fn forget(&self) -> Result<(), SessionServiceError> {
        self.repo.clear_token().await?;
        info!("session token cleared");
        Ok(())
    }
}
