//! Query functions for the `shopping_list` table
//!
//! - `shopping_list`: record access (get, insert, update, delete)
//! - `reports`: read-only reporting queries (search, pages, recency, totals)

pub mod reports;
pub mod shopping_list;

pub use reports::{
    get_cost_per_category, items_added_days_ago, paginate_shopping_list, search_shopping_list,
};
pub use shopping_list::{delete_item, get_by_id, get_shopping_list, insert_item, update_item};
