//! HTTP server layer
//!
//! Axum server with:
//! - HTML pages rendered from askama templates
//! - Redirect-after-post for every write
//! - Request tracing and timeouts
//! - Graceful shutdown
//! - JSON error responses

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod templates;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::ApiError;
