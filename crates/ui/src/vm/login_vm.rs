use biblia_core::model::AuthToken;
use services::{ApiError, AuthApi, Credentials, StatusCode};
use tracing::warn;

use crate::views::ViewError;
use crate::vm::request::RequestState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginMode {
    #[default]
    SignIn,
    Register,
}

impl LoginMode {
    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            LoginMode::SignIn => "Entrar",
            LoginMode::Register => "Criar conta",
        }
    }

    #[must_use]
    pub fn switch_label(self) -> &'static str {
        match self {
            LoginMode::SignIn => "Não tem conta? Cadastre-se",
            LoginMode::Register => "Já tem conta? Entrar",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            LoginMode::SignIn => LoginMode::Register,
            LoginMode::Register => LoginMode::SignIn,
        }
    }
}

/// Sign-in and registration form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginVm {
    pub email: String,
    pub password: String,
    mode: LoginMode,
    submit: RequestState,
}

impl LoginVm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> LoginMode {
        self.mode
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.submit = RequestState::Idle;
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submit.is_pending()
    }

    #[must_use]
    pub fn error(&self) -> Option<ViewError> {
        self.submit.error()
    }

    /// Validate the form. `None` means nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.is_submitting() {
            return None;
        }
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            self.submit = RequestState::Failed(ViewError::MissingCredentials);
            return None;
        }
        self.submit = RequestState::Pending;
        Some(Credentials::new(email, self.password.clone()))
    }

    /// Returns the token to activate on success.
    pub fn finish_submit(&mut self, result: Result<AuthToken, ApiError>) -> Option<AuthToken> {
        match result {
            Ok(token) => {
                self.submit = RequestState::Succeeded;
                self.password.clear();
                Some(token)
            }
            Err(err) => {
                let view_error = match (self.mode, err.status()) {
                    (_, Some(StatusCode::UNAUTHORIZED)) => ViewError::InvalidCredentials,
                    (LoginMode::Register, Some(StatusCode::CONFLICT)) => ViewError::UserExists,
                    _ => {
                        warn!(error = %err, "sign in failed");
                        ViewError::SignIn
                    }
                };
                self.submit = RequestState::Failed(view_error);
                None
            }
        }
    }

    pub async fn submit(&mut self, api: &dyn AuthApi) -> Option<AuthToken> {
        let credentials = self.begin_submit()?;
        let result = match self.mode {
            LoginMode::SignIn => api.login(&credentials).await,
            LoginMode::Register => api.register(&credentials).await,
        };
        self.finish_submit(result)
    }
}
