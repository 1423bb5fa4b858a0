use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::response::Html;
use contact_list_core::{Contact, ContactView};

use crate::AppState;
use crate::api_error::ApiError;
use crate::form_types::SearchForm;

pub async fn search_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.views.search("", None)?))
}

/// Any keyword is accepted; an empty one lists every contact.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, ApiError> {
    let contacts = state.contact_service.search(&form.username).await?;
    tracing::debug!(keyword = %form.username, matches = contacts.len(), "search");
    let views: Vec<ContactView> = contacts.iter().map(Contact::view).collect();
    Ok(Html(state.views.search(&form.username, Some(views.as_slice()))?))
}
