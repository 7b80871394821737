use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{ExtractionError, ImportCsvRequest};
use std::sync::Arc;
use tracing::info;

use crate::jobs::import_manager::ImportManager;

pub async fn create_import(
    manager: web::Data<Arc<ImportManager>>,
    request: web::Json<ImportCsvRequest>,
) -> ActixResult<HttpResponse> {
    info!(
        "Importing {} ({} bytes)",
        request.file_name,
        request.content.len()
    );

    let response = manager.import_csv(&request).await.map_err(|e| {
        if e.downcast_ref::<ExtractionError>().is_some() {
            actix_web::error::ErrorBadRequest(e.to_string())
        } else {
            actix_web::error::ErrorInternalServerError(format!("{:#}", e))
        }
    })?;

    Ok(HttpResponse::Ok().json(response))
}
