//! Reporting queries over `shopping_list`
//!
//! Read-only, one statement each. The CLI prints what these return.

use sqlx::PgExecutor;
use tracing::debug;

use crate::error::Result;
use crate::models::{CategoryTotal, ItemSummary, Pagination, ValidationError};

/// Names containing `term`, case-insensitively.
///
/// The whole `%term%` pattern is bound as one parameter. LIKE wildcards
/// inside `term` are escaped so they match literally.
pub async fn search_shopping_list<'e, E>(conn: E, term: &str) -> Result<Vec<String>>
where
    E: PgExecutor<'e>,
{
    let pattern = contains_pattern(term);
    let names = sqlx::query_scalar::<_, String>(
        r#"
        SELECT name
        FROM shopping_list
        WHERE name ILIKE $1
        ORDER BY id
        "#,
    )
    .bind(&pattern)
    .fetch_all(conn)
    .await?;

    debug!(term, matches = names.len(), "searched shopping list");
    Ok(names)
}

/// One page of item summaries, ordered by id.
pub async fn paginate_shopping_list<'e, E>(conn: E, page: Pagination) -> Result<Vec<ItemSummary>>
where
    E: PgExecutor<'e>,
{
    let items = sqlx::query_as::<_, ItemSummary>(
        r#"
        SELECT id, name, price::text AS price, checked, category
        FROM shopping_list
        ORDER BY id
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(conn)
    .await?;

    debug!(page = page.page, count = items.len(), "fetched page");
    Ok(items)
}

/// Names of items added within the last `days_ago` days.
pub async fn items_added_days_ago<'e, E>(conn: E, days_ago: u32) -> Result<Vec<String>>
where
    E: PgExecutor<'e>,
{
    let days = i32::try_from(days_ago).map_err(|_| ValidationError::OutOfRange {
        field: "days_ago",
        value: i64::from(days_ago),
    })?;

    let names = sqlx::query_scalar::<_, String>(
        r#"
        SELECT name
        FROM shopping_list
        WHERE date_added > now() - make_interval(days => $1)
        ORDER BY id
        "#,
    )
    .bind(days)
    .fetch_all(conn)
    .await?;

    debug!(days_ago, count = names.len(), "fetched recent items");
    Ok(names)
}

/// Summed price per category. Categories with no rows do not appear.
pub async fn get_cost_per_category<'e, E>(conn: E) -> Result<Vec<CategoryTotal>>
where
    E: PgExecutor<'e>,
{
    let totals = sqlx::query_as::<_, CategoryTotal>(
        r#"
        SELECT category, SUM(price)::text AS total
        FROM shopping_list
        GROUP BY category
        ORDER BY category
        "#,
    )
    .fetch_all(conn)
    .await?;

    debug!(categories = totals.len(), "computed cost per category");
    Ok(totals)
}

/// `%term%` with `\`, `%` and `_` escaped (Postgres' default LIKE escape is `\`).
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
