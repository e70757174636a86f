//! Home page

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::http::server::AppState;
use crate::http::templates::HomeTemplate;

/// GET / - static page with the new-list form
pub async fn home_page() -> HomeTemplate {
    HomeTemplate
}

/// Home routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(home_page))
}
