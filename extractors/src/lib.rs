//! Extractors Crate
//!
//! Turns Swedish business-registry phone/ownership exports into contact
//! records, and writes contacts back out as CSV.
//!
//! # Architecture
//!
//! - **Types**: Contact and import types are defined in the `shared-types` crate
//! - **Implementations**: Parsing and extraction live in this crate; everything
//!   here is synchronous and works on in-memory text
//!
//! # Available Extractors
//!
//! - `CsvReader`: Reads the quoted, multi-line CSV dialect of the registry export
//! - `ContactRecordExtractor`: Pulls phones, device users, carriers and one
//!   company officer out of each row
//! - `export_contacts_csv`: Writes contacts in the spreadsheet export format
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::{parse_csv, ContactRecordExtractor};
//!
//! let rows = parse_csv(&text);
//! let import = ContactRecordExtractor::new().transform_rows(&rows, batch_id);
//! ```

pub mod business_registry;
pub mod contact_export;

// Re-export commonly used types
pub use business_registry::{
    parse_csv, ContactRecordExtractor, CsvReader, ExtractedPhoneData, RegistryImport, Row,
};
pub use contact_export::{export_contacts_csv, EXPORT_HEADERS};
