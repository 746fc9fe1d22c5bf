use std::sync::Arc;

use biblia_core::model::{AuthToken, SessionState};
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use dioxus_router::Navigator;
use services::SessionService;
use tracing::{info, warn};

use crate::guard::{GuardDecision, guard_decision};
use crate::routes::Route;

/// The signed-in session, shared through context.
///
/// View-models only read the token; signing in and out goes through this store.
#[derive(Clone)]
pub struct SessionStore {
    state: Signal<SessionState>,
    service: Arc<SessionService>,
}

impl SessionStore {
    /// Must be called inside the Dioxus runtime (e.g. from `use_context_provider`).
    #[must_use]
    pub fn new(service: Arc<SessionService>) -> Self {
        Self {
            state: Signal::new(SessionState::restoring()),
            service,
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<AuthToken> {
        self.state.read().token().cloned()
    }

    #[must_use]
    pub fn decision(&self) -> GuardDecision {
        let state = self.state.read();
        guard_decision(state.token(), state.is_loading())
    }

    /// Read the persisted token once at launch. A storage failure starts signed out.
    pub async fn restore(&self) {
        let restored = match self.service.restore().await {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "could not restore session");
                None
            }
        };
        let mut state = self.state;
        if let Ok(mut state) = state.try_write() {
            state.finish_restore(restored);
        }
    }

    /// Activate `token` and persist it for the next launch.
    ///
    /// Persistence runs first: activating the session unmounts the login view
    /// and would drop a pending write.
    pub async fn login(&self, token: AuthToken) {
        if let Err(err) = self.service.remember(&token).await {
            warn!(error = %err, "could not persist session");
        }
        let mut state = self.state;
        if let Ok(mut state) = state.try_write() {
            state.sign_in(token);
        }
    }

    /// Clear the session in memory and in storage.
    pub async fn logout(&self) {
        let mut state = self.state;
        if let Ok(mut state) = state.try_write() {
            state.sign_out();
        }
        if let Err(err) = self.service.forget().await {
            warn!(error = %err, "could not clear persisted session");
        }
    }

    /// User-requested sign out: clear everything and go to the login page.
    pub fn sign_out(&self, nav: Navigator) {
        info!("signing out");
        self.leave(nav);
    }

    /// The server rejected the token.
    pub fn expire(&self, nav: Navigator) {
        warn!("session token rejected, signing out");
        self.leave(nav);
    }

    fn leave(&self, nav: Navigator) {
        let store = self.clone();
        let mut state = self.state;
        if let Ok(mut state) = state.try_write() {
            state.sign_out();
        }
        let _ = nav.replace(Route::Login {});
        // The calling view is about to unmount; keep the cleanup alive past it.
        spawn_forever(async move {
            store.logout().await;
        });
    }
}
