use chrono::NaiveDateTime;

const ENTRY_SEPARATOR: &str = "\n\n";

/// One call-log entry: `[YYYY-MM-DD HH:MM:SS]` on its own line, then the note as typed
pub fn format_call_note(note: &str, logged_at: NaiveDateTime) -> String {
    format!("[{}]\n{}", logged_at.format("%Y-%m-%d %H:%M:%S"), note)
}

/// Appends a new entry after the existing log, separated by a blank line.
pub fn append_call_note(existing: &str, note: &str, logged_at: NaiveDateTime) -> String {
    let entry = format_call_note(note, logged_at);

    if existing.is_empty() {
        entry
    } else {
        format!("{}{}{}", existing, ENTRY_SEPARATOR, entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(hour, minute, 59)
            .unwrap()
    }

    #[test]
    fn test_first_note_has_no_separator() {
        assert_eq!(
            append_call_note("", "Inget svar", at(9, 5)),
            "[2025-03-14 09:05:59]\nInget svar"
        );
    }

    #[test]
    fn test_note_text_is_kept_as_typed() {
        assert_eq!(
            format_call_note("  Ring tillbaka\nefter lunch ", at(9, 5)),
            "[2025-03-14 09:05:59]\n  Ring tillbaka\nefter lunch "
        );
    }

    #[test]
    fn test_later_notes_are_separated_by_blank_line() {
        let first = append_call_note("", "Inget svar", at(9, 5));
        let second = append_call_note(&first, "Bokat möte", at(14, 30));

        assert_eq!(
            second,
            "[2025-03-14 09:05:59]\nInget svar\n\n[2025-03-14 14:30:59]\nBokat möte"
        );
        assert_eq!(second.split("\n\n").count(), 2);
    }
}
