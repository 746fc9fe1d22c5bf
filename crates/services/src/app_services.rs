use std::sync::Arc;

use storage::repository::Storage;

use crate::api::{ApiClient, ApiConfig, AuthApi, PlanApi};
use crate::error::AppServicesError;
use crate::session_service::SessionService;

/// Assembles app-facing services from configuration.
#[derive(Clone)]
pub struct AppServices {
    api: Arc<ApiClient>,
    sessions: Arc<SessionService>,
}

impl AppServices {
    /// Build services whose session token is persisted in `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, api: ApiConfig) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, api))
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, api: ApiConfig) -> Self {
        Self {
            api: Arc::new(ApiClient::new(api)),
            sessions: Arc::new(SessionService::new(Arc::clone(&storage.sessions))),
        }
    }

    #[must_use]
    pub fn plan_api(&self) -> Arc<dyn PlanApi> {
        self.api.clone()
    }

    #[must_use]
    pub fn auth_api(&self) -> Arc<dyn AuthApi> {
        self.api.clone()
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<SessionService> {
        Arc::clone(&self.sessions)
    }
}
