use csv::{QuoteStyle, Terminator, WriterBuilder};
use shared_types::{Contact, ExtractionError};
use tracing::debug;

pub const EXPORT_HEADERS: [&str; 12] = [
    "NAMN",
    "ORG",
    "ADRESS",
    "ORT",
    "NUMMER",
    "ANVÄNDARE",
    "OPERATÖR",
    "KONTAKT",
    "ROLL",
    "STATUS",
    "PRIORITET",
    "ANTECKNINGAR",
];

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Serializes contacts into the spreadsheet-friendly export format.
///
/// Cells holding a delimiter, quote or line break are quoted with inner
/// quotes doubled; the output starts with a byte-order mark so spreadsheet
/// tools pick up UTF-8.
pub fn export_contacts_csv(contacts: &[Contact]) -> Result<String, ExtractionError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(EXPORT_HEADERS)
        .map_err(|e| ExtractionError::ExportError(format!("Failed to write header: {}", e)))?;

    for contact in contacts {
        writer.write_record(export_record(contact)).map_err(|e| {
            ExtractionError::ExportError(format!(
                "Failed to write contact {}: {}",
                contact.id, e
            ))
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExtractionError::ExportError(format!("Failed to flush export: {}", e)))?;
    let body = String::from_utf8(bytes)
        .map_err(|e| ExtractionError::ExportError(format!("Export is not UTF-8: {}", e)))?;

    debug!("Exported {} contacts ({} bytes)", contacts.len(), body.len());

    let mut output = String::with_capacity(body.len() + BYTE_ORDER_MARK.len_utf8());
    output.push(BYTE_ORDER_MARK);
    output.push_str(&body);
    Ok(output)
}

fn export_record(contact: &Contact) -> [&str; 12] {
    [
        contact.name.as_str(),
        contact.org.as_str(),
        contact.address.as_str(),
        contact.city.as_str(),
        contact.phones.as_str(),
        contact.users.as_str(),
        contact.operators.as_str(),
        contact.contact.as_str(),
        contact.role.as_str(),
        contact.status.as_str(),
        contact.priority.as_str(),
        contact.notes.as_str(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business_registry::parse_csv;
    use shared_types::{ContactPriority, ContactStatus};

    fn sample_contact() -> Contact {
        Contact {
            id: 42,
            batch_id: 1,
            name: "Bygg \"Nord\" AB".to_string(),
            org: "556677-8899".to_string(),
            address: "Storgatan 1, 2 tr".to_string(),
            city: "Umeå".to_string(),
            phones: "090-12 34 56\n070-111 22 33".to_string(),
            users: "Anna Svensson".to_string(),
            operators: "Telia Sverige AB\nTele2 Sverige AB".to_string(),
            contact: "Anna Svensson".to_string(),
            role: "Ordförande".to_string(),
            notes: "[2025-01-10 09:30]\nRing tillbaka\n\n[2025-01-12 14:00]\nBokat möte".to_string(),
            priority: ContactPriority::High,
            status: ContactStatus::Interested,
            last_called_at: Some(1_736_690_400),
            created_at: 1_736_000_000,
            updated_at: 1_736_690_400,
        }
    }

    #[test]
    fn test_header_and_byte_order_mark() {
        let csv = export_contacts_csv(&[]).unwrap();

        assert!(csv.starts_with('\u{feff}'));
        assert_eq!(
            csv.trim_start_matches('\u{feff}'),
            "NAMN,ORG,ADRESS,ORT,NUMMER,ANVÄNDARE,OPERATÖR,KONTAKT,ROLL,STATUS,PRIORITET,ANTECKNINGAR\n"
        );
    }

    #[test]
    fn test_plain_cells_are_not_quoted() {
        let contact = Contact {
            name: "Cafe Ek".to_string(),
            address: "Hamnv 2".to_string(),
            city: "Luleå".to_string(),
            phones: "0920-123 45".to_string(),
            users: String::new(),
            operators: String::new(),
            notes: String::new(),
            ..sample_contact()
        };
        let csv = export_contacts_csv(&[contact]).unwrap();
        let data_line = csv.lines().nth(1).unwrap();

        assert_eq!(
            data_line,
            "Cafe Ek,556677-8899,Hamnv 2,Luleå,0920-123 45,,,Anna Svensson,Ordförande,interested,high,"
        );
    }

    #[test]
    fn test_special_cells_are_quoted_with_doubled_quotes() {
        let csv = export_contacts_csv(&[sample_contact()]).unwrap();

        assert!(csv.contains("\"Bygg \"\"Nord\"\" AB\""));
        assert!(csv.contains("\"Storgatan 1, 2 tr\""));
        assert!(csv.contains("\"090-12 34 56\n070-111 22 33\""));
    }

    #[test]
    fn test_export_parses_back_to_same_cells() {
        let contact = Contact {
            notes: "[2025-01-10 09:30:00]\r\nRing tillbaka\r\n\r\nBokat \"möte\"".to_string(),
            ..sample_contact()
        };
        let rows = parse_csv(&export_contacts_csv(&[contact.clone()]).unwrap());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], EXPORT_HEADERS.map(String::from).to_vec());
        assert_eq!(
            rows[1],
            export_record(&contact).map(String::from).to_vec()
        );
    }
}
