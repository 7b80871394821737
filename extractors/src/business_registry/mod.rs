//! Contact extraction from Swedish business-registry phone/ownership exports.
//!
//! Column layout of a data row:
//!
//! | index | content |
//! |---|---|
//! | 0 | name |
//! | 1 | organization number |
//! | 2 | address |
//! | 3 | city |
//! | 4 | simple phone |
//! | 5 | detailed phone listing (phone, device user, carrier per line) |
//! | 6 | board listing (role labels followed by names) |
//!
//! A row becomes a contact when at least one phone number can be extracted.
//! The officer name is optional.

mod board_listing;
mod csv_reader;
mod phone_listing;

pub use board_listing::{BoardListingParser, Officer, RolePattern};
pub use csv_reader::{parse_csv, CsvReader, Row};
pub use phone_listing::{ExtractedPhoneData, PhoneListingParser, KNOWN_CARRIERS};

use shared_types::{ContactPriority, ContactStatus, NewContact, SkipReason, SkippedRow};
use tracing::{debug, info};

const NAME: usize = 0;
const ORG: usize = 1;
const ADDRESS: usize = 2;
const CITY: usize = 3;
const SIMPLE_PHONE: usize = 4;
const PHONE_LISTING: usize = 5;
const BOARD_LISTING: usize = 6;

const MIN_CELLS: usize = 3;

/// Contacts and rejected rows from one pass over a parsed file
#[derive(Debug, Default)]
pub struct RegistryImport {
    pub contacts: Vec<NewContact>,
    pub skipped: Vec<SkippedRow>,
}

pub struct ContactRecordExtractor {
    phone_parser: PhoneListingParser,
    board_parser: BoardListingParser,
}

impl ContactRecordExtractor {
    pub fn new() -> Self {
        Self {
            phone_parser: PhoneListingParser::new(),
            board_parser: BoardListingParser::new(),
        }
    }

    /// Applies the phone and board heuristics to the three free-text cells
    pub fn extract_fields(
        &self,
        simple_phone: &str,
        phone_listing: &str,
        board_listing: &str,
    ) -> ExtractedPhoneData {
        let mut data = self.phone_parser.parse(simple_phone, phone_listing);

        if let Some(officer) = self.board_parser.parse(board_listing) {
            data.contact = officer.name;
            data.role = officer.role;
        }

        data
    }

    pub fn extract_row(&self, row: &[String], batch_id: i64) -> Option<NewContact> {
        self.extract_row_at(row, batch_id, chrono::Utc::now().timestamp())
    }

    pub fn extract_row_at(
        &self,
        row: &[String],
        batch_id: i64,
        imported_at: i64,
    ) -> Option<NewContact> {
        self.evaluate_row(row, batch_id, imported_at).ok()
    }

    /// Builds the contact for one data row, or says why the row was dropped
    pub fn evaluate_row(
        &self,
        row: &[String],
        batch_id: i64,
        imported_at: i64,
    ) -> Result<NewContact, SkipReason> {
        if row.len() < MIN_CELLS {
            return Err(SkipReason::TooFewCells);
        }

        let name = cell(row, NAME);
        if name.is_empty() {
            return Err(SkipReason::MissingName);
        }

        let extracted = self.extract_fields(
            cell(row, SIMPLE_PHONE),
            raw_cell(row, PHONE_LISTING),
            raw_cell(row, BOARD_LISTING),
        );

        if !extracted.has_phone() {
            return Err(SkipReason::MissingPhone);
        }

        Ok(NewContact {
            batch_id,
            name: name.to_string(),
            org: cell(row, ORG).to_string(),
            address: cell(row, ADDRESS).to_string(),
            city: cell(row, CITY).to_string(),
            phones: extracted.phones.join("\n"),
            users: extracted.users.join("\n"),
            operators: extracted.operators.join("\n"),
            contact: extracted.contact,
            role: extracted.role,
            notes: String::new(),
            priority: ContactPriority::Medium,
            status: ContactStatus::New,
            last_called_at: None,
            created_at: imported_at,
            updated_at: imported_at,
        })
    }

    /// Converts every data row (index 0 is the header) into contacts,
    /// stamping them all with the same import time.
    pub fn transform_rows(&self, rows: &[Row], batch_id: i64) -> RegistryImport {
        let imported_at = chrono::Utc::now().timestamp();
        let mut result = RegistryImport::default();

        for (index, row) in rows.iter().enumerate().skip(1) {
            let row_number = index + 1;

            match self.evaluate_row(row, batch_id, imported_at) {
                Ok(contact) => result.contacts.push(contact),
                Err(reason) => {
                    let name = cell(row, NAME).to_string();
                    match reason {
                        SkipReason::MissingPhone => {
                            info!("Skipping row {}: {} ({})", row_number, name, reason.describe())
                        }
                        _ => debug!("Skipping row {}: {}", row_number, reason.describe()),
                    }
                    result.skipped.push(SkippedRow {
                        row_number,
                        name,
                        reason,
                    });
                }
            }
        }

        result
    }
}

impl Default for ContactRecordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn raw_cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

fn cell(row: &[String], index: usize) -> &str {
    raw_cell(row, index).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMPORTED_AT: i64 = 1_760_000_000;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn registry_row() -> Row {
        row(&[
            " Anna Svensson ",
            "556677-8899",
            "Storgatan 1",
            "Stockholm ",
            "",
            "Telefonnummer\tAnvändare\tOperatör\n\
             08-123 456\tAnna Svensson\tTelia Sverige AB\n\
             070-111 22 33\tKontakta oss\tTele2 Sverige AB\n\
             031-44 55 66",
            "Verkställande direktör\tAnna Svensson\nStyrelseledamot\tBo Berg",
        ])
    }

    #[test]
    fn test_full_row_becomes_contact() {
        let extractor = ContactRecordExtractor::new();
        let contact = extractor
            .extract_row_at(&registry_row(), 7, IMPORTED_AT)
            .unwrap();

        assert_eq!(contact.batch_id, 7);
        assert_eq!(contact.name, "Anna Svensson");
        assert_eq!(contact.org, "556677-8899");
        assert_eq!(contact.city, "Stockholm");
        assert_eq!(contact.phones, "08-123 456\n070-111 22 33\n031-44 55 66");
        assert_eq!(contact.users, "Anna Svensson");
        assert_eq!(contact.operators, "Telia Sverige AB\nTele2 Sverige AB");
        assert_eq!(contact.contact, "Anna Svensson");
        assert_eq!(contact.role, "Verkställande direktör");
        assert_eq!(contact.notes, "");
        assert_eq!(contact.priority, ContactPriority::Medium);
        assert_eq!(contact.status, ContactStatus::New);
        assert_eq!(contact.created_at, IMPORTED_AT);
        assert_eq!(contact.updated_at, IMPORTED_AT);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let extractor = ContactRecordExtractor::new();
        let first = extractor.extract_row_at(&registry_row(), 1, IMPORTED_AT);
        let second = extractor.extract_row_at(&registry_row(), 1, IMPORTED_AT);
        assert_eq!(first, second);
    }

    #[test]
    fn test_row_without_phone_is_skipped_even_with_officer() {
        let extractor = ContactRecordExtractor::new();
        let no_phone = row(&[
            "Bo Berg",
            "",
            "",
            "",
            "saknas",
            "Info om numret",
            "Ordförande: Bo Berg",
        ]);

        assert_eq!(
            extractor.evaluate_row(&no_phone, 1, IMPORTED_AT),
            Err(SkipReason::MissingPhone)
        );
    }

    #[test]
    fn test_phone_without_officer_is_kept() {
        let extractor = ContactRecordExtractor::new();
        let contact = extractor
            .extract_row_at(&row(&["Cafe Ek", "", "", "", "08-765 43 21"]), 1, IMPORTED_AT)
            .unwrap();

        assert_eq!(contact.phones, "08-765 43 21");
        assert_eq!(contact.users, "");
        assert_eq!(contact.operators, "");
        assert_eq!(contact.contact, "");
        assert_eq!(contact.role, "");
    }

    #[test]
    fn test_short_or_nameless_rows_are_rejected() {
        let extractor = ContactRecordExtractor::new();

        assert_eq!(
            extractor.evaluate_row(&row(&["Anna", "x"]), 1, IMPORTED_AT),
            Err(SkipReason::TooFewCells)
        );
        assert_eq!(
            extractor.evaluate_row(&row(&["  ", "x", "y", "z", "08-765 43 21"]), 1, IMPORTED_AT),
            Err(SkipReason::MissingName)
        );
    }

    #[test]
    fn test_transform_rows_skips_header_and_reports_row_numbers() {
        let extractor = ContactRecordExtractor::new();
        let rows = vec![
            row(&["Namn", "Org", "Adress", "Ort", "Telefon", "Nummer", "Styrelse"]),
            registry_row(),
            row(&["Utan Nummer", "", "", "", "", "", ""]),
            row(&["Kort"]),
        ];

        let result = extractor.transform_rows(&rows, 3);

        assert_eq!(result.contacts.len(), 1);
        assert_eq!(result.contacts[0].name, "Anna Svensson");
        assert_eq!(
            result.skipped,
            vec![
                SkippedRow {
                    row_number: 3,
                    name: "Utan Nummer".to_string(),
                    reason: SkipReason::MissingPhone,
                },
                SkippedRow {
                    row_number: 4,
                    name: "Kort".to_string(),
                    reason: SkipReason::TooFewCells,
                },
            ]
        );
    }

    #[test]
    fn test_parsed_csv_feeds_extractor() {
        let text = "Namn,Org,Adress,Ort,Telefon,Nummer,Styrelse\n\
                    Bygg AB,556000-1111,Hamnv 2,Göteborg,,\"031-44 55 66  Per Olsson  Telenor Sverige AB\n\
                    Andra format\",\"Ordförande: Per Olsson\"\n";
        let rows = parse_csv(text);
        let result = ContactRecordExtractor::new().transform_rows(&rows, 1);

        assert_eq!(result.contacts.len(), 1);
        let contact = &result.contacts[0];
        assert_eq!(contact.phones, "031-44 55 66");
        assert_eq!(contact.users, "Per Olsson");
        assert_eq!(contact.operators, "Telenor Sverige AB");
        assert_eq!(contact.contact, "Per Olsson");
        assert_eq!(contact.role, "Ordförande");
    }
}
