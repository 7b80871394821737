use rusqlite::Connection;

/// Run all database migrations
pub fn run_migrations(conn: &Connection) -> anyhow::Result<()> {
    // Create import_batches table
    conn.execute(
        "CREATE TABLE IF NOT EXISTS import_batches (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR NOT NULL,
            file_name VARCHAR NOT NULL,
            count BIGINT NOT NULL DEFAULT 0,
            created_at BIGINT NOT NULL
        )",
        [],
    )?;

    // Create contacts table
    conn.execute(
        "CREATE TABLE IF NOT EXISTS contacts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            batch_id INTEGER NOT NULL,
            name VARCHAR NOT NULL,
            org VARCHAR NOT NULL DEFAULT '',
            address VARCHAR NOT NULL DEFAULT '',
            city VARCHAR NOT NULL DEFAULT '',
            phones VARCHAR NOT NULL DEFAULT '',
            users VARCHAR NOT NULL DEFAULT '',
            operators VARCHAR NOT NULL DEFAULT '',
            contact VARCHAR NOT NULL DEFAULT '',
            role VARCHAR NOT NULL DEFAULT '',
            notes VARCHAR NOT NULL DEFAULT '',
            priority VARCHAR NOT NULL DEFAULT 'medium' CHECK (priority IN ('high', 'medium', 'low')),
            status VARCHAR NOT NULL DEFAULT 'new' CHECK (status IN ('new', 'contacted', 'interested', 'not_interested', 'converted')),
            last_called_at BIGINT,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL,
            FOREIGN KEY (batch_id) REFERENCES import_batches (id) ON DELETE CASCADE
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_contacts_batch
            ON contacts(batch_id)",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_contacts_status
            ON contacts(status)",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_contacts_created
            ON contacts(created_at)",
        [],
    )?;

    // Create saved_filters table; the filter itself is stored as JSON
    conn.execute(
        "CREATE TABLE IF NOT EXISTS saved_filters (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR NOT NULL,
            filter VARCHAR NOT NULL,
            created_at BIGINT NOT NULL
        )",
        [],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master
                 WHERE type = 'table' AND name IN ('import_batches', 'contacts', 'saved_filters')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 3);
    }

    #[test]
    fn test_contact_status_is_checked() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn.execute(
            "INSERT INTO import_batches (name, file_name, count, created_at) VALUES ('b', 'b.csv', 0, 0)",
            [],
        )
        .unwrap();

        let result = conn.execute(
            "INSERT INTO contacts (batch_id, name, status, created_at, updated_at)
             VALUES (1, 'Anna', 'callback', 0, 0)",
            [],
        );
        assert!(result.is_err());
    }
}
