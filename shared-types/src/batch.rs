use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ExtractionError;

/// Provenance group for contacts created from one imported file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImportBatch {
    pub id: i64,
    pub name: String,
    pub file_name: String,
    /// Parsed rows excluding the header, whether or not they became contacts
    pub count: i64,
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewImportBatch {
    pub name: String,
    pub file_name: String,
    pub count: i64,
    pub created_at: i64,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BatchesResponse {
    pub batches: Vec<ImportBatch>,
}

/// Raw CSV text posted by the front-end
#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct ImportCsvRequest {
    pub file_name: String,
    /// Batch display name; defaults to the file name
    pub name: Option<String>,
    pub content: String,
}

impl ImportCsvRequest {
    pub fn validate(&self) -> Result<(), ExtractionError> {
        if self.file_name.trim().is_empty() {
            return Err(ExtractionError::InvalidInput(
                "file_name must not be empty".to_string(),
            ));
        }
        if self.content.trim().is_empty() {
            return Err(ExtractionError::InvalidInput(
                "CSV content is empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn batch_name(&self) -> String {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(self.file_name.trim())
            .to_string()
    }
}

/// Why a data row did not become a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    TooFewCells,
    MissingName,
    MissingPhone,
}

impl SkipReason {
    pub fn describe(&self) -> &'static str {
        match self {
            SkipReason::TooFewCells => "fewer than 3 cells",
            SkipReason::MissingName => "missing name",
            SkipReason::MissingPhone => "missing phone number",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SkippedRow {
    /// 1-based index into the parsed rows, header included
    pub row_number: usize,
    pub name: String,
    pub reason: SkipReason,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImportResponse {
    pub batch: ImportBatch,
    pub imported: usize,
    pub skipped: Vec<SkippedRow>,
}
