//! shoplist-core: data access for the `shopping_list` table
//!
//! Every query takes a connection handle (any [`sqlx::PgExecutor`]) as its
//! first argument, sends exactly one parameterized statement, and returns a
//! typed result. Absent rows are values (`None`, [`Affected::Zero`]), not
//! errors.

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use config::ShoplistConfig;
pub use db::{create_pool, create_pool_with_options};
pub use error::{DbError, Result};
pub use models::{
    Affected, CategoryTotal, ItemPatch, ItemSummary, NewItem, Pagination, ShoppingListItem,
    ValidationError,
};

/// Embedded schema migrations for the `shopping_list` table.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../migrations");

/// Apply pending migrations.
pub async fn run_migrations(pool: &sqlx::PgPool) -> Result<()> {
    tracing::info!("Running shopping_list migrations...");
    MIGRATOR.run(pool).await?;
    tracing::info!("Migrations complete");
    Ok(())
}
