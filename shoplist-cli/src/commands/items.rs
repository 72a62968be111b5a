//! Record commands: list, get, add, update, delete

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{ArgGroup, Parser};
use serde::Serialize;
use shoplist_core::db;
use shoplist_core::models::{Affected, Category, ItemName, ItemPatch, NewItem, Price};
use sqlx::PgPool;

use crate::output::{item_line, Printer};

#[derive(Parser, Debug)]
pub struct IdArgs {
    /// Item id
    pub id: i32,
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Item name
    #[arg(long, value_parser = ItemName::new)]
    pub name: ItemName,

    /// Price as a decimal, e.g. 5.50
    #[arg(long, value_parser = Price::new, allow_negative_numbers = true)]
    pub price: Price,

    /// Category label, e.g. Main, Snack, Lunch, Breakfast
    #[arg(long, value_parser = Category::new)]
    pub category: Category,

    /// Mark the item as checked off
    #[arg(long)]
    pub checked: bool,

    /// When the item was added (RFC 3339); defaults to now
    #[arg(long, value_name = "TIMESTAMP")]
    pub date_added: Option<DateTime<Utc>>,
}

#[derive(Parser, Debug)]
#[command(group(
    ArgGroup::new("fields")
        .required(true)
        .multiple(true)
        .args(["name", "price", "category", "checked", "date_added"])
))]
pub struct UpdateArgs {
    /// Item id
    pub id: i32,

    /// New name
    #[arg(long, value_parser = ItemName::new)]
    pub name: Option<ItemName>,

    /// New price as a decimal
    #[arg(long, value_parser = Price::new, allow_negative_numbers = true)]
    pub price: Option<Price>,

    /// New category label
    #[arg(long, value_parser = Category::new)]
    pub category: Option<Category>,

    /// New checked state (true or false)
    #[arg(long, value_name = "BOOL")]
    pub checked: Option<bool>,

    /// New date added (RFC 3339)
    #[arg(long, value_name = "TIMESTAMP")]
    pub date_added: Option<DateTime<Utc>>,
}

impl From<AddArgs> for NewItem {
    fn from(args: AddArgs) -> Self {
        Self {
            name: args.name,
            price: args.price,
            category: args.category,
            checked: args.checked,
            date_added: args.date_added,
        }
    }
}

impl UpdateArgs {
    fn patch(&self) -> ItemPatch {
        ItemPatch {
            name: self.name.clone(),
            price: self.price.clone(),
            category: self.category.clone(),
            checked: self.checked,
            date_added: self.date_added,
        }
    }
}

/// Outcome of update/delete for JSON output
#[derive(Debug, Serialize)]
struct WriteReport {
    id: i32,
    affected: Affected,
}

pub async fn run_list(pool: &PgPool, printer: &Printer) -> Result<()> {
    let items = db::get_shopping_list(pool)
        .await
        .context("failed to list shopping list")?;

    printer.emit(&items, |items| {
        if items.is_empty() {
            println!("Shopping list is empty");
        }
        for item in items {
            println!("{}", item_line(item));
        }
    })
}

pub async fn run_get(pool: &PgPool, args: IdArgs, printer: &Printer) -> Result<()> {
    let Some(item) = db::get_by_id(pool, args.id)
        .await
        .context("failed to fetch item")?
    else {
        bail!("no item with id {}", args.id);
    };

    printer.emit(&item, |item| println!("{}", item_line(item)))
}

pub async fn run_add(pool: &PgPool, args: AddArgs, printer: &Printer) -> Result<()> {
    let new_item = NewItem::from(args);
    let item = db::insert_item(pool, &new_item)
        .await
        .context("failed to insert item")?;

    tracing::info!(id = item.id, "item added");
    printer.emit(&item, |item| println!("Added {}", item_line(item)))
}

pub async fn run_update(pool: &PgPool, args: UpdateArgs, printer: &Printer) -> Result<()> {
    let affected = db::update_item(pool, args.id, &args.patch())
        .await
        .context("failed to update item")?;

    report_write(printer, "updated", args.id, affected)
}

pub async fn run_delete(pool: &PgPool, args: IdArgs, printer: &Printer) -> Result<()> {
    let affected = db::delete_item(pool, args.id)
        .await
        .context("failed to delete item")?;

    report_write(printer, "deleted", args.id, affected)
}

fn report_write(printer: &Printer, verb: &str, id: i32, affected: Affected) -> Result<()> {
    if affected.is_zero() {
        tracing::warn!(id, "no item with this id; nothing {}", verb);
    }

    printer.emit(&WriteReport { id, affected }, |report| match report.affected {
        Affected::One => println!("Item {} {}", report.id, verb),
        Affected::Zero => println!("No item with id {} (0 rows {})", report.id, verb),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        cmd: TestCommand,
    }

    #[derive(clap::Subcommand)]
    enum TestCommand {
        Add(AddArgs),
        Update(UpdateArgs),
    }

    fn parse(args: &[&str]) -> Result<TestCommand, clap::Error> {
        TestCli::try_parse_from(std::iter::once("test").chain(args.iter().copied()))
            .map(|cli| cli.cmd)
    }

    #[test]
    fn add_args_build_new_item() {
        let TestCommand::Add(args) = parse(&[
            "add", "--name", "Fish tricks", "--price", "13.1", "--category", "Main",
        ])
        .unwrap() else {
            panic!("expected add");
        };

        let item = NewItem::from(args);
        assert_eq!(item.name.as_str(), "Fish tricks");
        assert_eq!(item.price.as_str(), "13.10");
        assert!(!item.checked);
        assert!(item.date_added.is_none());
    }

    #[test]
    fn negative_price_parses_as_value() {
        let TestCommand::Add(args) =
            parse(&["add", "--name", "Refund", "--price", "-2.5", "--category", "Main"])
                .unwrap()
        else {
            panic!("expected add");
        };
        assert_eq!(args.price.as_str(), "-2.50");

        let TestCommand::Update(args) = parse(&["update", "3", "--price", "-1"]).unwrap() else {
            panic!("expected update");
        };
        assert_eq!(args.price.unwrap().as_str(), "-1.00");
    }

    #[test]
    fn add_rejects_invalid_price() {
        let err = parse(&["add", "--name", "x", "--price", "1.234", "--category", "Main"])
            .err()
            .expect("invalid price accepted");
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn update_builds_partial_patch() {
        let TestCommand::Update(args) = parse(&["update", "3", "--checked", "true"]).unwrap()
        else {
            panic!("expected update");
        };

        let patch = args.patch();
        assert_eq!(args.id, 3);
        assert_eq!(patch.checked, Some(true));
        assert!(patch.name.is_none());
        assert!(patch.price.is_none());
    }

    #[test]
    fn update_requires_a_field() {
        assert!(parse(&["update", "3"]).is_err());
    }

    #[test]
    fn update_parses_timestamp() {
        let TestCommand::Update(args) =
            parse(&["update", "1", "--date-added", "2029-01-22T16:28:32Z"]).unwrap()
        else {
            panic!("expected update");
        };
        assert_eq!(
            args.date_added.map(|d| d.to_rfc3339()),
            Some("2029-01-22T16:28:32+00:00".to_string())
        );
    }
}
