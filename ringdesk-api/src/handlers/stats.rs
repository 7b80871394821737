use actix_web::{web, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::database::contacts as contacts_db;
use crate::database::Database;
use crate::helpers::contact_filter;

pub async fn get_stats(db: web::Data<Arc<Database>>) -> ActixResult<HttpResponse> {
    let contacts = contacts_db::list_contacts(db.async_connection.clone())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(contact_filter::compute_stats(&contacts)))
}
