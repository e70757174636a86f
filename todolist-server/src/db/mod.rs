//! Database layer - connection pool, migrations, and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Foreign keys enforced by SQLite; items always belong to a list
//! - Transactions for multi-step operations

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_in_memory_pool, create_pool};
pub use repos::*;
