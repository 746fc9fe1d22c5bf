//! Typed access to the reading-plan backend.

use std::fmt;

use async_trait::async_trait;
use biblia_core::model::{
    AuthToken, CatechismState, DayProgress, HalfDay, ProgressRecord, ReadingDay,
};
use serde::Serialize;

use crate::error::ApiError;

mod client;
mod config;
mod wire;

pub use client::ApiClient;
pub use config::{API_URL_ENV, ApiConfig, DEFAULT_API_URL};

/// Authenticated reading-plan endpoints.
///
/// Every call carries the session token; a rejected token surfaces as
/// `ApiError::Unauthorized`.
#[async_trait]
pub trait PlanApi: Send + Sync {
    /// `GET /readings/today`
    async fn today(&self, token: &AuthToken) -> Result<ReadingDay, ApiError>;

    /// `POST /readings/mark-completed`, returning the day's updated progress.
    async fn mark_reading(
        &self,
        token: &AuthToken,
        half: HalfDay,
    ) -> Result<DayProgress, ApiError>;

    /// `GET /catechism/current`. `ApiError::NotFound` means no catechism is provisioned.
    async fn catechism_current(&self, token: &AuthToken) -> Result<CatechismState, ApiError>;

    /// `POST /catechism/mark-completed` for today.
    async fn mark_catechism(&self, token: &AuthToken) -> Result<(), ApiError>;

    /// `GET /progress`, in server order.
    async fn progress(&self, token: &AuthToken) -> Result<Vec<ProgressRecord>, ApiError>;
}

/// Unauthenticated account endpoints.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /auth/login`
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, ApiError>;

    /// `POST /auth/register`
    async fn register(&self, credentials: &Credentials) -> Result<AuthToken, ApiError>;
}

/// Email and password as sent to the auth endpoints.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
