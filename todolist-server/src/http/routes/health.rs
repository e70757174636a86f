//! Health check endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// GET /health
///
/// 200 when the database answers, 503 with `status: "degraded"` otherwise.
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, database) = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (StatusCode::OK, "ok", "ok"),
        Err(e) => {
            tracing::warn!("health check could not reach database: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
        }
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        database,
    };
    (code, Json(body))
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_in_memory_pool;

    #[tokio::test]
    async fn health_reports_database() {
        let pool = create_in_memory_pool().await.unwrap();
        let state = Arc::new(AppState { pool });

        let (code, Json(body)) = health(State(state)).await;
        assert_eq!(code, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.database, "ok");
    }

    #[tokio::test]
    async fn closed_pool_is_503_degraded() {
        let pool = create_in_memory_pool().await.unwrap();
        pool.close().await;
        let state = Arc::new(AppState { pool });

        let (code, Json(body)) = health(State(state)).await;
        assert_eq!(code, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "degraded");
        assert_eq!(body.database, "unavailable");
    }
}
