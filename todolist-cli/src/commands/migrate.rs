//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use todolist_server::create_pool;
use todolist_server::db::migrations;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (default: sqlite://~/.todolist/todolist.db)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create or update the schema, then exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = super::resolve_database_url(args.database_url)?;

    let pool = create_pool(&database_url)
        .await
        .with_context(|| format!("Failed to open database {}", database_url))?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    pool.close().await;
    println!("Database ready: {}", database_url);
    Ok(())
}
