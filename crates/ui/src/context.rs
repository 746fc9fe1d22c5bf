use std::sync::Arc;

use services::{AuthApi, Clock, PlanApi, SessionService};

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn plan_api(&self) -> Arc<dyn PlanApi>;
    fn auth_api(&self) -> Arc<dyn AuthApi>;
    fn sessions(&self) -> Arc<SessionService>;

    fn clock(&self) -> Clock;
    fn catechism_enabled(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    plan_api: Arc<dyn PlanApi>,
    auth_api: Arc<dyn AuthApi>,
    sessions: Arc<SessionService>,
    clock: Clock,
    catechism_enabled: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            plan_api: app.plan_api(),
            auth_api: app.auth_api(),
            sessions: app.sessions(),
            clock: app.clock(),
            catechism_enabled: app.catechism_enabled(),
        }
    }

    #[must_use]
    pub fn plan_api(&self) -> Arc<dyn PlanApi> {
        Arc::clone(&self.plan_api)
    }

    #[must_use]
    pub fn auth_api(&self) -> Arc<dyn AuthApi> {
        Arc::clone(&self.auth_api)
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<SessionService> {
        Arc::clone(&self.sessions)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Whether the dashboard composes the catechism panel.
    #[must_use]
    pub fn catechism_enabled(&self) -> bool {
        self.catechism_enabled
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
