use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};
use shared_types::{ImportBatch, NewImportBatch};

const BATCH_COLUMNS: &str = "id, name, file_name, count, created_at";

fn map_row_to_batch(row: &Row) -> rusqlite::Result<ImportBatch> {
    Ok(ImportBatch {
        id: row.get(0)?,
        name: row.get(1)?,
        file_name: row.get(2)?,
        count: row.get(3)?,
        created_at: row.get(4)?,
    })
}

pub async fn insert_batch(conn: AsyncDbConnection, batch: &NewImportBatch) -> Result<ImportBatch> {
    let conn = conn.lock().await?;

    let id: i64 = conn.query_row(
        "INSERT INTO import_batches (name, file_name, count, created_at)
         VALUES (?1, ?2, ?3, ?4)
         RETURNING id",
        params![&batch.name, &batch.file_name, batch.count, batch.created_at],
        |row| row.get(0),
    )?;

    Ok(ImportBatch {
        id,
        name: batch.name.clone(),
        file_name: batch.file_name.clone(),
        count: batch.count,
        created_at: batch.created_at,
    })
}

pub async fn get_batch(conn: AsyncDbConnection, id: i64) -> Result<Option<ImportBatch>> {
    let conn = conn.lock().await?;

    let batch = conn
        .query_row(
            &format!("SELECT {} FROM import_batches WHERE id = ?1", BATCH_COLUMNS),
            params![id],
            map_row_to_batch,
        )
        .optional()?;

    Ok(batch)
}

/// All batches, newest first
pub async fn list_batches(conn: AsyncDbConnection) -> Result<Vec<ImportBatch>> {
    let conn = conn.lock().await?;

    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM import_batches ORDER BY created_at DESC, id DESC",
        BATCH_COLUMNS
    ))?;

    let batches = stmt
        .query_map([], map_row_to_batch)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(batches)
}

/// Deletes a batch together with its contacts. Returns false when no such batch exists.
pub async fn delete_batch(conn: AsyncDbConnection, id: i64) -> Result<bool> {
    let conn = conn.lock().await?;

    let deleted = conn.execute("DELETE FROM import_batches WHERE id = ?1", params![id])?;

    Ok(deleted > 0)
}
