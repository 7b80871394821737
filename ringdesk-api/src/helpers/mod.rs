pub mod call_notes;
pub mod contact_filter;
pub mod database;
pub mod logging;
