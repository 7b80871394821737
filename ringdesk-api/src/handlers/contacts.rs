use actix_web::http::header;
use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{ContactFilter, ContactsResponse, LogCallRequest, UpdateContactRequest};
use std::sync::Arc;

use crate::database::contacts as contacts_db;
use crate::database::Database;
use crate::helpers::contact_filter;

pub async fn list_contacts(
    db: web::Data<Arc<Database>>,
    query: web::Query<ContactFilter>,
) -> ActixResult<HttpResponse> {
    let contacts = contacts_db::list_contacts(db.async_connection.clone())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    let contacts = contact_filter::apply_filter(contacts, &query);
    let total = contacts.len();

    Ok(HttpResponse::Ok().json(ContactsResponse { contacts, total }))
}

/// The filtered list as a CSV download
pub async fn export_contacts(
    db: web::Data<Arc<Database>>,
    query: web::Query<ContactFilter>,
) -> ActixResult<HttpResponse> {
    let contacts = contacts_db::list_contacts(db.async_connection.clone())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;
    let contacts = contact_filter::apply_filter(contacts, &query);

    let csv = extractors::export_contacts_csv(&contacts)
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    let file_name = format!(
        "ringdesk-export-{}.csv",
        chrono::Local::now().format("%Y-%m-%d")
    );

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file_name),
        ))
        .body(csv))
}

pub async fn get_contact(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let contact_id = path.into_inner();

    let contact = contacts_db::get_contact(db.async_connection.clone(), contact_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| contact_not_found(contact_id))?;

    Ok(HttpResponse::Ok().json(contact))
}

pub async fn update_contact(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
    request: web::Json<UpdateContactRequest>,
) -> ActixResult<HttpResponse> {
    let contact_id = path.into_inner();

    let contact = contacts_db::update_contact(db.async_connection.clone(), contact_id, &request)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| contact_not_found(contact_id))?;

    Ok(HttpResponse::Ok().json(contact))
}

pub async fn delete_contact(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let contact_id = path.into_inner();

    let deleted = contacts_db::delete_contact(db.async_connection.clone(), contact_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    if !deleted {
        return Err(contact_not_found(contact_id));
    }

    Ok(HttpResponse::NoContent().finish())
}

pub async fn log_call(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
    request: web::Json<LogCallRequest>,
) -> ActixResult<HttpResponse> {
    let contact_id = path.into_inner();

    if request.note.trim().is_empty() {
        return Err(actix_web::error::ErrorBadRequest("Call note must not be empty"));
    }

    let contact = contacts_db::log_call(db.async_connection.clone(), contact_id, &request.note)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| contact_not_found(contact_id))?;

    tracing::info!("Logged call for contact {}", contact_id);
    Ok(HttpResponse::Ok().json(contact))
}

fn contact_not_found(contact_id: i64) -> actix_web::Error {
    actix_web::error::ErrorNotFound(format!("Contact {} not found", contact_id))
}
