//! HTTP front end for contact-list: form pages rendered with tera.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

pub mod api_error;
mod form_types;
mod handlers;
mod views;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use contact_list_core::{DEFAULT_DEVELOPER_NAME, DEVELOPER_NAME_ENV, env_string_or};
use contact_list_service::ContactService;
use tower_http::trace::TraceLayer;

pub use views::{FormAction, FormStatus, Views};

/// Runtime settings for the web front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Name shown in the page footer.
    pub developer_name: String,
}

impl Settings {
    #[must_use]
    pub fn from_env() -> Self {
        Self { developer_name: env_string_or(DEVELOPER_NAME_ENV, DEFAULT_DEVELOPER_NAME) }
    }
}

/// Shared application state for all HTTP handlers.
pub struct AppState {
    pub contact_service: Arc<ContactService>,
    pub views: Views,
}

impl AppState {
    /// Compiles the templates; fails only if a template does not parse.
    pub fn new(
        contact_service: Arc<ContactService>,
        settings: &Settings,
    ) -> Result<Self, tera::Error> {
        Ok(Self { contact_service, views: Views::new(settings.developer_name.clone())? })
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::search::search_page).post(handlers::search::search))
        .route("/add", get(handlers::contacts::add_page).post(handlers::contacts::add))
        .route("/update", get(handlers::contacts::update_page).post(handlers::contacts::update))
        .route("/delete", get(handlers::contacts::delete_page).post(handlers::contacts::delete))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
