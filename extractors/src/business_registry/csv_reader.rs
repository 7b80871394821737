use tracing::warn;

/// One logical CSV record, cells in column order and untrimmed.
pub type Row = Vec<String>;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reader for the registry export dialect: comma separated, double-quoted
/// cells that may span several physical lines.
///
/// A doubled quote inside a quoted cell is read as one literal quote.
pub struct CsvReader {
    delimiter: char,
    quote: char,
}

impl CsvReader {
    pub fn new() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
        }
    }

    /// Parses the whole text into rows, dropping rows where every cell is blank.
    pub fn parse(&self, text: &str) -> Vec<Row> {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

        let mut rows = Vec::new();
        let mut logical_line = String::new();
        let mut quote_count = 0usize;
        let mut continuing = false;

        for physical_line in text.split('\n') {
            if continuing {
                logical_line.push('\n');
            }
            logical_line.push_str(physical_line);
            quote_count += physical_line.matches(self.quote).count();

            // A carriage return before a break inside quotes belongs to the cell
            if quote_count % 2 != 0 {
                continuing = true;
                continue;
            }

            if logical_line.ends_with('\r') {
                logical_line.pop();
            }
            self.push_row(&mut rows, &logical_line);
            logical_line.clear();
            quote_count = 0;
            continuing = false;
        }

        if continuing {
            warn!(
                "CSV input ended inside a quoted field; keeping {} trailing characters as a final row",
                logical_line.len()
            );
            self.push_row(&mut rows, &logical_line);
        }

        rows
    }

    fn push_row(&self, rows: &mut Vec<Row>, logical_line: &str) {
        let row = self.split_cells(logical_line);
        if row.iter().any(|cell| !cell.trim().is_empty()) {
            rows.push(row);
        }
    }

    fn split_cells(&self, logical_line: &str) -> Row {
        let mut cells = Vec::new();
        let mut cell = String::new();
        let mut inside_quotes = false;
        let mut chars = logical_line.chars().peekable();

        while let Some(c) = chars.next() {
            if c == self.quote {
                if inside_quotes && chars.peek() == Some(&self.quote) {
                    cell.push(self.quote);
                    chars.next();
                } else {
                    inside_quotes = !inside_quotes;
                }
            } else if c == self.delimiter && !inside_quotes {
                cells.push(std::mem::take(&mut cell));
            } else {
                cell.push(c);
            }
        }
        cells.push(cell);

        cells
    }
}

impl Default for CsvReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses CSV text with the default reader.
pub fn parse_csv(text: &str) -> Vec<Row> {
    CsvReader::new().parse(text)
}
