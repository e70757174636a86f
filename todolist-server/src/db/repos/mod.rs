//! Repository implementations for database access
//!
//! Each repository borrows the pool and follows these patterns:
//! - Insertion order is id order (AUTOINCREMENT)
//! - Transactions for multi-step operations

pub mod lists;
pub mod items;

pub use lists::{ListRepo, List, DbError};
pub use items::{ItemRepo, Item};
