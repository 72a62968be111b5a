//! shoplist CLI - shopping list records and reports over PostgreSQL
//!
//! Each invocation acquires a connection pool, runs exactly one operation,
//! prints the result, and closes the pool before exiting (also on error).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shoplist_core::{create_pool_with_options, ShoplistConfig};
use sqlx::PgPool;

mod commands;
mod output;
mod tracing_setup;

use output::Printer;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "shoplist",
    author,
    version,
    about = "Shopping list records and reports over PostgreSQL",
    long_about = "Manage rows in the shopping_list table and run canned reports \
                  (search, pagination, recent additions, cost per category)."
)]
struct Cli {
    /// PostgreSQL connection string (falls back to .env and ~/.shoplist/config.toml)
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every item on the shopping list
    List,
    /// Show a single item by id
    Get(commands::items::IdArgs),
    /// Add an item and print it with its new id
    Add(commands::items::AddArgs),
    /// Overwrite some or all fields of an item
    Update(commands::items::UpdateArgs),
    /// Delete an item by id
    Delete(commands::items::IdArgs),
    /// Case-insensitive search on item names
    Search(commands::report::SearchArgs),
    /// Show one page (6 items) of the shopping list
    Page(commands::report::PageArgs),
    /// Names of items added within the last N days
    Recent(commands::report::RecentArgs),
    /// Total price per category
    Cost,
    /// Create or upgrade the shopping_list table
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = tracing_setup::init(&TracingConfig { debug: cli.debug }) {
        eprintln!("warning: failed to initialize logging: {err:#}");
    }

    run(cli).await
}

async fn run(cli: Cli) -> Result<()> {
    let config =
        ShoplistConfig::load(cli.database_url).context("failed to load configuration")?;

    let pool = create_pool_with_options(&config.database_url, config.max_connections)
        .await
        .context("failed to connect to database")?;

    let printer = Printer::new(cli.json);
    let result = dispatch(&pool, cli.command, &printer).await;

    // Released on both success and failure
    pool.close().await;
    tracing::debug!("connection pool closed");

    result
}

async fn dispatch(pool: &PgPool, command: Commands, printer: &Printer) -> Result<()> {
    use commands::{items, report};

    match command {
        Commands::List => items::run_list(pool, printer).await,
        Commands::Get(args) => items::run_get(pool, args, printer).await,
        Commands::Add(args) => items::run_add(pool, args, printer).await,
        Commands::Update(args) => items::run_update(pool, args, printer).await,
        Commands::Delete(args) => items::run_delete(pool, args, printer).await,
        Commands::Search(args) => report::run_search(pool, args, printer).await,
        Commands::Page(args) => report::run_page(pool, args, printer).await,
        Commands::Recent(args) => report::run_recent(pool, args, printer).await,
        Commands::Cost => report::run_cost(pool, printer).await,
        Commands::Migrate => commands::run_migrate(pool).await,
    }
}
