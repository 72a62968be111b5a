//! Shopping list records and write payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Category, ItemName, Price};

/// One row of `shopping_list`.
///
/// `price` is kept as decimal text exactly as the database renders it.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub category: String,
    pub checked: bool,
    pub date_added: DateTime<Utc>,
}

/// Insert payload. `id` is assigned by storage, never supplied here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: ItemName,
    pub price: Price,
    pub category: Category,
    pub checked: bool,
    /// Storage default (`now()`) applies when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<DateTime<Utc>>,
}

impl NewItem {
    /// Validate raw input into an insert payload.
    pub fn new(
        name: &str,
        price: &str,
        category: &str,
        checked: bool,
    ) -> Result<Self, super::ValidationError> {
        Ok(Self {
            name: ItemName::new(name)?,
            price: Price::new(price)?,
            category: Category::new(category)?,
            checked,
            date_added: None,
        })
    }

    pub fn with_date_added(mut self, date_added: DateTime<Utc>) -> Self {
        self.date_added = Some(date_added);
        self
    }
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(default)]
    pub name: Option<ItemName>,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub checked: Option<bool>,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.checked.is_none()
            && self.date_added.is_none()
    }
}

impl From<NewItem> for ItemPatch {
    /// Full replacement of every caller-owned field.
    fn from(item: NewItem) -> Self {
        Self {
            name: Some(item.name),
            price: Some(item.price),
            category: Some(item.category),
            checked: Some(item.checked),
            date_added: item.date_added,
        }
    }
}

/// Row shape returned by the pagination report.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct ItemSummary {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub checked: bool,
    pub category: String,
}

/// Summed price for one category.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: String,
}
