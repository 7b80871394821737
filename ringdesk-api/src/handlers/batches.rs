use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::BatchesResponse;
use std::sync::Arc;

use crate::database::batches as batches_db;
use crate::database::Database;

pub async fn list_batches(db: web::Data<Arc<Database>>) -> ActixResult<HttpResponse> {
    let batches = batches_db::list_batches(db.async_connection.clone())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(BatchesResponse { batches }))
}

/// Deletes the batch and, through the foreign key, all of its contacts
pub async fn delete_batch(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let batch_id = path.into_inner();

    let deleted = batches_db::delete_batch(db.async_connection.clone(), batch_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    if !deleted {
        return Err(actix_web::error::ErrorNotFound(format!(
            "Batch {} not found",
            batch_id
        )));
    }

    tracing::info!("Deleted batch {}", batch_id);
    Ok(HttpResponse::NoContent().finish())
}
