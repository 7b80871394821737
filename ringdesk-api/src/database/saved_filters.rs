use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::{params, Row};
use shared_types::{ContactFilter, SavedFilter};

fn map_row_to_saved_filter(row: &Row) -> rusqlite::Result<SavedFilter> {
    let filter_json: String = row.get(2)?;
    let filter: ContactFilter = serde_json::from_str(&filter_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(SavedFilter {
        id: row.get(0)?,
        name: row.get(1)?,
        filter,
        created_at: row.get(3)?,
    })
}

pub async fn insert_saved_filter(
    conn: AsyncDbConnection,
    name: &str,
    filter: &ContactFilter,
) -> Result<SavedFilter> {
    let conn = conn.lock().await?;
    let now = chrono::Utc::now().timestamp();
    let filter_json = serde_json::to_string(filter)?;

    let id: i64 = conn.query_row(
        "INSERT INTO saved_filters (name, filter, created_at)
         VALUES (?1, ?2, ?3)
         RETURNING id",
        params![name, filter_json, now],
        |row| row.get(0),
    )?;

    Ok(SavedFilter {
        id,
        name: name.to_string(),
        filter: filter.clone(),
        created_at: now,
    })
}

pub async fn list_saved_filters(conn: AsyncDbConnection) -> Result<Vec<SavedFilter>> {
    let conn = conn.lock().await?;

    let mut stmt = conn.prepare(
        "SELECT id, name, filter, created_at FROM saved_filters ORDER BY name, id",
    )?;

    let filters = stmt
        .query_map([], map_row_to_saved_filter)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(filters)
}

pub async fn delete_saved_filter(conn: AsyncDbConnection, id: i64) -> Result<bool> {
    let conn = conn.lock().await?;

    let deleted = conn.execute("DELETE FROM saved_filters WHERE id = ?1", params![id])?;

    Ok(deleted > 0)
}
