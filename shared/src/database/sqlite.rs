/// SQLite-specific utilities and helpers
use sqlx::{Executor, Sqlite};

use super::{DatabaseError, DatabaseResult};

/// Check if a table exists in the database
pub async fn table_exists<'e, E>(executor: E, table_name: &str) -> DatabaseResult<bool>
where
    E: Executor<'e, Database = Sqlite>,
{
    let exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM sqlite_master
            WHERE type = 'table'
            AND name = ?1
        )
        "#,
    )
    .bind(table_name)
    .fetch_one(executor)
    .await
    .map_err(DatabaseError::Connection)?;

    Ok(exists)
}

/// Count the rows of a table.
///
/// `table_name` is interpolated into the statement and must be a trusted
/// identifier, never request input.
pub async fn count_rows<'e, E>(executor: E, table_name: &str) -> DatabaseResult<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let query = format!("SELECT COUNT(*) FROM {}", table_name);

    let count: i64 = sqlx::query_scalar(&query)
        .fetch_one(executor)
        .await
        .map_err(DatabaseError::Connection)?;

    Ok(count)
}
