//! Add, update and delete forms.
//!
//! Validation failures and outcomes both render the form page with HTTP 200;
//! only storage or template failures turn into an [`ApiError`].

use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::response::Html;
use contact_list_core::Outcome;
use contact_list_service::ServiceError;

use crate::AppState;
use crate::api_error::ApiError;
use crate::form_types::{ContactForm, DeleteForm};
use crate::views::{FormAction, FormStatus};

pub async fn add_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    render(&state, FormAction::Save, &FormStatus::Empty)
}

pub async fn update_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    render(&state, FormAction::Update, &FormStatus::Empty)
}

pub async fn delete_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    render(&state, FormAction::Delete, &FormStatus::Empty)
}

pub async fn add(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ContactForm>,
) -> Result<Html<String>, ApiError> {
    let result = state.contact_service.add(&form.username, &form.phonenumber).await;
    render(&state, FormAction::Save, &status_of(result)?)
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ContactForm>,
) -> Result<Html<String>, ApiError> {
    let result = state.contact_service.update(&form.username, &form.phonenumber).await;
    render(&state, FormAction::Update, &status_of(result)?)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Form(form): Form<DeleteForm>,
) -> Result<Html<String>, ApiError> {
    let result = state.contact_service.delete(&form.username).await;
    render(&state, FormAction::Delete, &status_of(result)?)
}

fn status_of(result: Result<Outcome, ServiceError>) -> Result<FormStatus, ApiError> {
    match result {
        Ok(outcome) => {
            tracing::info!(outcome = ?outcome, applied = outcome.is_applied(), "form submitted");
            Ok(FormStatus::Done(outcome.message()))
        },
        Err(ServiceError::InvalidInput(e)) => {
            tracing::debug!(error = %e, "form input rejected");
            Ok(FormStatus::Invalid(e.to_string()))
        },
        Err(e) => Err(e.into()),
    }
}

fn render(
    state: &AppState,
    action: FormAction,
    status: &FormStatus,
) -> Result<Html<String>, ApiError> {
    Ok(Html(state.views.form(action, status)?))
}
