//! Domain models with validation at construction
//!
//! All caller input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod fields;
pub mod item;
pub mod outcome;
pub mod pagination;
pub mod validation;

pub use fields::{Category, ItemName, Price};
pub use item::{CategoryTotal, ItemPatch, ItemSummary, NewItem, ShoppingListItem};
pub use outcome::Affected;
pub use pagination::{Pagination, SHOPPING_LIST_PAGE_SIZE};
pub use validation::ValidationError;
