//! List endpoints
//!
//! Writes answer with `302 Found` pointing at the list's detail page.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};

use crate::db::{ItemRepo, ListRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidListId;
use crate::http::server::AppState;
use crate::http::templates::ListTemplate;
use crate::models::NewItemForm;

/// Redirect with status 302 to `location`.
fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// POST /lists/new - create a list holding its first item
async fn new_list(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NewItemForm>,
) -> Result<Response, ApiError> {
    let text = form.validate()?;

    let (list, item) = ListRepo::new(&state.pool).create_with_item(text).await?;
    tracing::debug!(list_id = list.id, item_id = item.id, "created list");

    Ok(found(list.url()))
}

/// GET /lists/{id}/ - show one list's items
async fn view_list(
    State(state): State<Arc<AppState>>,
    ValidListId(id): ValidListId,
) -> Result<ListTemplate, ApiError> {
    let list = ListRepo::new(&state.pool).get(id).await?;
    let items = ItemRepo::new(&state.pool).list_for_list(list.id).await?;

    Ok(ListTemplate { list, items })
}

/// GET /lists/{id} - canonical detail path has a trailing slash
async fn append_slash(ValidListId(id): ValidListId) -> Response {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, format!("/lists/{}/", id))],
    )
        .into_response()
}

/// POST /lists/{id}/add_item - append an item to an existing list
async fn add_item(
    State(state): State<Arc<AppState>>,
    ValidListId(id): ValidListId,
    Form(form): Form<NewItemForm>,
) -> Result<Response, ApiError> {
    let text = form.validate()?;

    let item = ItemRepo::new(&state.pool).create(id, text).await?;
    tracing::debug!(list_id = id, item_id = item.id, "added item");

    Ok(found(format!("/lists/{}/", id)))
}

/// List routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/lists/new", post(new_list))
        .route("/lists/{id}", get(append_slash))
        .route("/lists/{id}/", get(view_list))
        .route("/lists/{id}/add_item", post(add_item))
}
