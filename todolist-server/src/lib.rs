//! todolist-server: HTTP server for to-do lists
//!
//! Users create lists, append items, and view each list rendered as HTML.
//! Lists and items live in SQLite; every write answers with a redirect.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_in_memory_pool, create_pool, DbError, Item, List};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
