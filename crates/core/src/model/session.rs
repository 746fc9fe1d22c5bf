use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("auth token is empty")]
    Empty,
}

/// Bearer token issued by the backend. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// # Errors
    ///
    /// Returns `TokenError::Empty` if the token is blank.
    pub fn new(raw: impl Into<String>) -> Result<Self, TokenError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TokenError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(..)")
    }
}

/// Client-side session: the active token and whether it is still being restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    token: Option<AuthToken>,
    loading: bool,
}

impl SessionState {
    /// State at launch, before the persisted token has been read.
    #[must_use]
    pub fn restoring() -> Self {
        Self {
            token: None,
            loading: true,
        }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self {
            token: None,
            loading: false,
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && !self.loading
    }

    pub fn finish_restore(&mut self, token: Option<AuthToken>) {
        // A login that raced the restore wins.
        if self.token.is_none() {
            self.token = token;
        }
        self.loading = false;
    }

    pub fn sign_in(&mut self, token: AuthToken) {
        self.token = Some(token);
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.token = None;
        self.loading = false;
    }
}
