use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{CreateSavedFilterRequest, SavedFiltersResponse};
use std::sync::Arc;

use crate::database::saved_filters as filters_db;
use crate::database::Database;

pub async fn list_saved_filters(db: web::Data<Arc<Database>>) -> ActixResult<HttpResponse> {
    let filters = filters_db::list_saved_filters(db.async_connection.clone())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(SavedFiltersResponse { filters }))
}

pub async fn create_saved_filter(
    db: web::Data<Arc<Database>>,
    request: web::Json<CreateSavedFilterRequest>,
) -> ActixResult<HttpResponse> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(actix_web::error::ErrorBadRequest(
            "Filter name must not be empty",
        ));
    }

    let saved = filters_db::insert_saved_filter(db.async_connection.clone(), name, &request.filter)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Created().json(saved))
}

pub async fn delete_saved_filter(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let filter_id = path.into_inner();

    let deleted = filters_db::delete_saved_filter(db.async_connection.clone(), filter_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    if !deleted {
        return Err(actix_web::error::ErrorNotFound(format!(
            "Saved filter {} not found",
            filter_id
        )));
    }

    Ok(HttpResponse::NoContent().finish())
}
