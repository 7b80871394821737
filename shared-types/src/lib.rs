pub mod batch;
pub mod contact;
pub mod extraction;
pub mod filter;
pub mod stats;

pub use batch::{
    BatchesResponse, ImportBatch, ImportCsvRequest, ImportResponse, NewImportBatch, SkipReason,
    SkippedRow,
};
pub use contact::{
    dialable_number, listing_entries, listing_entry, Contact, ContactPriority, ContactStatus,
    ContactsResponse, LogCallRequest, NewContact, UpdateContactRequest,
};
pub use extraction::ExtractionError;
pub use filter::{
    CarrierGroup, ContactFilter, CreateSavedFilterRequest, SavedFilter, SavedFiltersResponse,
    SortOrder,
};
pub use stats::{CarrierCounts, ContactStats, StatusCounts};

