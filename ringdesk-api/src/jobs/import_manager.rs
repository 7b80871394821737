use crate::database::batches as batches_db;
use crate::database::contacts as contacts_db;
use crate::database::AsyncDbConnection;
use anyhow::{Context, Result};
use extractors::{parse_csv, ContactRecordExtractor};
use shared_types::{ExtractionError, ImportCsvRequest, ImportResponse, NewImportBatch};
use tracing::{info, warn};

/// Runs a CSV file through the extractor and stores the result as one batch.
pub struct ImportManager {
    db_conn: AsyncDbConnection,
    extractor: ContactRecordExtractor,
    chunk_size: usize,
}

impl ImportManager {
    pub fn new(db_conn: AsyncDbConnection, chunk_size: usize) -> Self {
        Self {
            db_conn,
            extractor: ContactRecordExtractor::new(),
            chunk_size: chunk_size.max(1),
        }
    }

    /// Imports one file. The batch row is written first, then contacts in
    /// chunks; if any chunk fails the batch is deleted again, taking the
    /// chunks already written with it.
    pub async fn import_csv(&self, request: &ImportCsvRequest) -> Result<ImportResponse> {
        request.validate()?;

        let rows = parse_csv(&request.content);
        if rows.is_empty() {
            return Err(ExtractionError::InvalidInput(format!(
                "{} contains no rows",
                request.file_name
            ))
            .into());
        }

        let batch = batches_db::insert_batch(
            self.db_conn.clone(),
            &NewImportBatch {
                name: request.batch_name(),
                file_name: request.file_name.trim().to_string(),
                count: (rows.len() - 1) as i64,
                created_at: chrono::Utc::now().timestamp(),
            },
        )
        .await
        .context("Failed to create import batch")?;

        let extracted = self.extractor.transform_rows(&rows, batch.id);

        for chunk in extracted.contacts.chunks(self.chunk_size) {
            if let Err(e) = contacts_db::insert_contacts(self.db_conn.clone(), chunk).await {
                warn!(
                    "Import of {} failed, rolling back batch {}: {}",
                    request.file_name, batch.id, e
                );
                if let Err(cleanup) = batches_db::delete_batch(self.db_conn.clone(), batch.id).await
                {
                    warn!("Failed to remove batch {}: {}", batch.id, cleanup);
                }
                return Err(e.context(format!("Failed to import {}", request.file_name)));
            }
        }

        info!(
            "Imported {} of {} rows from {} into batch {} ({} skipped)",
            extracted.contacts.len(),
            batch.count,
            request.file_name,
            batch.id,
            extracted.skipped.len()
        );

        Ok(ImportResponse {
            imported: extracted.contacts.len(),
            skipped: extracted.skipped,
            batch,
        })
    }
}
