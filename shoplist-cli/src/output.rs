//! Printing helpers: human-readable lines or pretty JSON

use anyhow::Result;
use serde::Serialize;
use shoplist_core::models::{ItemSummary, ShoppingListItem};

/// Chooses between JSON and human output for a command result.
pub struct Printer {
    json: bool,
}

impl Printer {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print `value` as JSON, or hand it to `human` for plain output.
    pub fn emit<T, F>(&self, value: &T, human: F) -> Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T),
    {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            human(value);
        }
        Ok(())
    }
}

fn check_mark(checked: bool) -> char {
    if checked {
        'x'
    } else {
        ' '
    }
}

pub fn item_line(item: &ShoppingListItem) -> String {
    format!(
        "{:>4} [{}] {} - {} ({}) added {}",
        item.id,
        check_mark(item.checked),
        item.name,
        item.price,
        item.category,
        item.date_added.format("%Y-%m-%d %H:%M UTC"),
    )
}

pub fn summary_line(item: &ItemSummary) -> String {
    format!(
        "{:>4} [{}] {} - {} ({})",
        item.id,
        check_mark(item.checked),
        item.name,
        item.price,
        item.category,
    )
}
