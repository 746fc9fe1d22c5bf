use async_trait::async_trait;
use biblia_core::model::{
    AuthToken, CatechismState, DayProgress, HalfDay, ProgressRecord, ReadingDay,
};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::config::ApiConfig;
use super::wire::{
    AuthResponse, CatechismResponse, MarkCatechismRequest, MarkReadingRequest,
    ProgressListResponse, ProgressWire, TodayResponse,
};
use super::{AuthApi, Credentials, PlanApi};
use crate::error::ApiError;

/// HTTP client for the reading-plan backend.
///
/// No retries and no timeouts beyond reqwest's defaults: a failed call is
/// reported once and the caller decides what to do.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    #[must_use]
    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &AuthToken,
    ) -> Result<T, ApiError> {
        let url = self.config.endpoint(path)?;
        let request = self.client.get(url).bearer_auth(token.as_str());
        let response = send(path, request).await?;
        read_json(response).await
    }

    async fn post(
        &self,
        path: &str,
        token: Option<&AuthToken>,
        body: &(impl serde::Serialize + Sync),
    ) -> Result<Response, ApiError> {
        let url = self.config.endpoint(path)?;
        let mut request = self.client.post(url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token.as_str());
        }
        send(path, request).await
    }
}

async fn send(path: &str, request: RequestBuilder) -> Result<Response, ApiError> {
    debug!(path, "api request");
    let response = request.send().await.map_err(|err| {
        warn!(path, error = %err, "api request failed");
        ApiError::Http(err)
    })?;

    let status = response.status();
    if status.is_success() {
        debug!(path, %status, "api response");
        return Ok(response);
    }

    warn!(path, %status, "api request rejected");
    Err(ApiError::from_status(status))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|err| {
        warn!(error = %err, "api response did not match the expected shape");
        ApiError::Decode(err)
    })
}

#[async_trait]
impl PlanApi for ApiClient {
    async fn today(&self, token: &AuthToken) -> Result<ReadingDay, ApiError> {
        let wire: TodayResponse = self.get_json("readings/today", token).await?;
        Ok(wire.into())
    }

    async fn mark_reading(
        &self,
        token: &AuthToken,
        half: HalfDay,
    ) -> Result<DayProgress, ApiError> {
        let body = MarkReadingRequest { period: half };
        let response = self
            .post("readings/mark-completed", Some(token), &body)
            .await?;
        let wire: ProgressWire = read_json(response).await?;
        Ok(wire.into())
    }

    async fn catechism_current(&self, token: &AuthToken) -> Result<CatechismState, ApiError> {
        let wire: CatechismResponse = self.get_json("catechism/current", token).await?;
        Ok(wire.into())
    }

    async fn mark_catechism(&self, token: &AuthToken) -> Result<(), ApiError> {
        // The response body is not needed: callers re-fetch the current question.
        self.post("catechism/mark-completed", Some(token), &MarkCatechismRequest {})
            .await?;
        Ok(())
    }

    async fn progress(&self, token: &AuthToken) -> Result<Vec<ProgressRecord>, ApiError> {
        let wire: ProgressListResponse = self.get_json("progress", token).await?;
        Ok(wire.into())
    }
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, ApiError> {
        let response = self.post("auth/login", None, credentials).await?;
        let wire: AuthResponse = read_json(response).await?;
        AuthToken::try_from(wire)
    }

    async fn register(&self, credentials: &Credentials) -> Result<AuthToken, ApiError> {
        let response = self.post("auth/register", None, credentials).await?;
        let wire: AuthResponse = read_json(response).await?;
        AuthToken::try_from(wire)
    }
}
