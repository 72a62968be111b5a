//! Command implementations for the shoplist CLI

pub mod items;
pub mod report;

use anyhow::{Context, Result};
use sqlx::PgPool;

/// Apply embedded migrations
pub async fn run_migrate(pool: &PgPool) -> Result<()> {
    shoplist_core::run_migrations(pool)
        .await
        .context("failed to run migrations")?;
    println!("shopping_list schema is up to date");
    Ok(())
}
