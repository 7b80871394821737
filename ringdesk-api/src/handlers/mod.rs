pub mod batches;
pub mod contacts;
pub mod health;
pub mod imports;
pub mod saved_filters;
pub mod stats;

use actix_web::web;

/// Registers every API route. `/api/contacts/export` must stay ahead of
/// `/api/contacts/{id}`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health))
        .route("/api/imports", web::post().to(imports::create_import))
        .route("/api/contacts", web::get().to(contacts::list_contacts))
        .route("/api/contacts/export", web::get().to(contacts::export_contacts))
        .route("/api/contacts/{id}", web::get().to(contacts::get_contact))
        .route("/api/contacts/{id}", web::put().to(contacts::update_contact))
        .route("/api/contacts/{id}", web::delete().to(contacts::delete_contact))
        .route("/api/contacts/{id}/call-notes", web::post().to(contacts::log_call))
        .route("/api/batches", web::get().to(batches::list_batches))
        .route("/api/batches/{id}", web::delete().to(batches::delete_batch))
        .route("/api/stats", web::get().to(stats::get_stats))
        .route("/api/saved-filters", web::get().to(saved_filters::list_saved_filters))
        .route("/api/saved-filters", web::post().to(saved_filters::create_saved_filter))
        .route("/api/saved-filters/{id}", web::delete().to(saved_filters::delete_saved_filter));
}
