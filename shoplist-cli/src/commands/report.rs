//! Report commands: search, page, recent, cost

use anyhow::{Context, Result};
use clap::Parser;
use shoplist_core::db;
use shoplist_core::models::Pagination;
use sqlx::PgPool;

use crate::output::{summary_line, Printer};

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Substring to look for in item names (case-insensitive)
    pub term: String,
}

#[derive(Parser, Debug)]
pub struct PageArgs {
    /// Page number, starting at 1
    #[arg(value_parser = clap::value_parser!(i64).range(1..))]
    pub page: i64,
}

#[derive(Parser, Debug)]
pub struct RecentArgs {
    /// Look back this many days
    pub days: u32,
}

pub async fn run_search(pool: &PgPool, args: SearchArgs, printer: &Printer) -> Result<()> {
    let names = db::search_shopping_list(pool, &args.term)
        .await
        .context("failed to search shopping list")?;

    printer.emit(&names, |names| {
        if names.is_empty() {
            println!("No items matching '{}'", args.term);
        }
        for name in names {
            println!("{}", name);
        }
    })
}

pub async fn run_page(pool: &PgPool, args: PageArgs, printer: &Printer) -> Result<()> {
    let page = Pagination::new(args.page)?;
    let items = db::paginate_shopping_list(pool, page)
        .await
        .context("failed to fetch page")?;

    printer.emit(&items, |items| {
        if items.is_empty() {
            println!("Page {} is empty", page.page);
        }
        for item in items {
            println!("{}", summary_line(item));
        }
    })
}

pub async fn run_recent(pool: &PgPool, args: RecentArgs, printer: &Printer) -> Result<()> {
    let names = db::items_added_days_ago(pool, args.days)
        .await
        .context("failed to fetch recent items")?;

    printer.emit(&names, |names| {
        println!("Products added in the last {} day(s)", args.days);
        for name in names {
            println!("  {}", name);
        }
    })
}

pub async fn run_cost(pool: &PgPool, printer: &Printer) -> Result<()> {
    let totals = db::get_cost_per_category(pool)
        .await
        .context("failed to compute cost per category")?;

    printer.emit(&totals, |totals| {
        let width = totals.iter().map(|t| t.category.len()).max().unwrap_or(0);
        for t in totals {
            println!("{:<width$}  {:>10}", t.category, t.total, width = width);
        }
    })
}
