//! Command implementations

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

use anyhow::{Context, Result};

/// Resolve the database URL from the flag/env value or the default location.
///
/// The default is `~/.todolist/todolist.db`; its directory is created if needed.
pub fn resolve_database_url(explicit: Option<String>) -> Result<String> {
    if let Some(url) = explicit {
        return Ok(url);
    }

    let dir = dirs::home_dir()
        .context("Could not determine home directory; pass --database-url")?
        .join(".todolist");

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    Ok(format!("sqlite://{}", dir.join("todolist.db").display()))
}
