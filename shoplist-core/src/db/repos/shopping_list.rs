//! Shopping list record access
//!
//! - get/list: plain SELECT, `price` rendered as text
//! - insert: INSERT ... RETURNING the full row
//! - update: COALESCE per column so one statement covers partial and full patches
//! - delete: reports zero or one row affected

use sqlx::PgExecutor;
use tracing::debug;

use crate::error::Result;
use crate::models::{Affected, ItemPatch, NewItem, ShoppingListItem};

/// All rows, in insertion (id) order. An empty table yields an empty vec.
pub async fn get_shopping_list<'e, E>(conn: E) -> Result<Vec<ShoppingListItem>>
where
    E: PgExecutor<'e>,
{
    let items = sqlx::query_as::<_, ShoppingListItem>(
        r#"
        SELECT id, name, price::text AS price, category, checked, date_added
        FROM shopping_list
        ORDER BY id
        "#,
    )
    .fetch_all(conn)
    .await?;

    debug!(count = items.len(), "fetched shopping list");
    Ok(items)
}

/// Single row by id; `None` when no such row exists.
pub async fn get_by_id<'e, E>(conn: E, id: i32) -> Result<Option<ShoppingListItem>>
where
    E: PgExecutor<'e>,
{
    let item = sqlx::query_as::<_, ShoppingListItem>(
        r#"
        SELECT id, name, price::text AS price, category, checked, date_added
        FROM shopping_list
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;

    debug!(id, found = item.is_some(), "fetched item by id");
    Ok(item)
}

/// Insert a row and return it with its generated id.
///
/// `date_added` falls back to `now()` when the payload leaves it out.
pub async fn insert_item<'e, E>(conn: E, item: &NewItem) -> Result<ShoppingListItem>
where
    E: PgExecutor<'e>,
{
    let inserted = sqlx::query_as::<_, ShoppingListItem>(
        r#"
        INSERT INTO shopping_list (name, price, category, checked, date_added)
        VALUES ($1, $2::numeric, $3, $4, COALESCE($5, now()))
        RETURNING id, name, price::text AS price, category, checked, date_added
        "#,
    )
    .bind(item.name.as_str())
    .bind(item.price.as_str())
    .bind(item.category.as_str())
    .bind(item.checked)
    .bind(item.date_added)
    .fetch_one(conn)
    .await?;

    debug!(id = inserted.id, "inserted item");
    Ok(inserted)
}

/// Overwrite the fields set in `patch` on the row with `id`.
///
/// Unknown ids are not an error: the result is [`Affected::Zero`].
pub async fn update_item<'e, E>(conn: E, id: i32, patch: &ItemPatch) -> Result<Affected>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(
        r#"
        UPDATE shopping_list
        SET name = COALESCE($2, name),
            price = COALESCE($3::numeric, price),
            category = COALESCE($4, category),
            checked = COALESCE($5, checked),
            date_added = COALESCE($6, date_added)
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(patch.name.as_ref().map(|n| n.as_str()))
    .bind(patch.price.as_ref().map(|p| p.as_str()))
    .bind(patch.category.as_ref().map(|c| c.as_str()))
    .bind(patch.checked)
    .bind(patch.date_added)
    .execute(conn)
    .await?;

    let affected = Affected::from_rows(result.rows_affected());
    debug!(id, ?affected, "updated item");
    Ok(affected)
}

/// Remove the row with `id`. Unknown ids yield [`Affected::Zero`].
pub async fn delete_item<'e, E>(conn: E, id: i32) -> Result<Affected>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM shopping_list WHERE id = $1")
        .bind(id)
        .execute(conn)
        .await?;

    let affected = Affected::from_rows(result.rows_affected());
    debug!(id, ?affected, "deleted item");
    Ok(affected)
}
