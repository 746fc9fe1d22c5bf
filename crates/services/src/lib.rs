#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod error;
pub mod session_service;

pub use biblia_core::Clock;
pub use reqwest::StatusCode;

pub use api::{ApiClient, ApiConfig, AuthApi, Credentials, PlanApi};
pub use app_services::AppServices;
pub use error::{ApiError, AppServicesError, ConfigError, SessionServiceError};
pub use session_service::SessionService;
