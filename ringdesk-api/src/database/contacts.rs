use crate::database::{parse_text_column, AsyncDbConnection};
use crate::helpers::call_notes;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};
use shared_types::{Contact, ContactStatus, NewContact, UpdateContactRequest};

const CONTACT_COLUMNS: &str = "id, batch_id, name, org, address, city, phones, users, operators,
    contact, role, notes, priority, status, last_called_at, created_at, updated_at";

fn map_row_to_contact(row: &Row) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        batch_id: row.get(1)?,
        name: row.get(2)?,
        org: row.get(3)?,
        address: row.get(4)?,
        city: row.get(5)?,
        phones: row.get(6)?,
        users: row.get(7)?,
        operators: row.get(8)?,
        contact: row.get(9)?,
        role: row.get(10)?,
        notes: row.get(11)?,
        priority: parse_text_column(row, 12)?,
        status: parse_text_column(row, 13)?,
        last_called_at: row.get(14)?,
        created_at: row.get(15)?,
        updated_at: row.get(16)?,
    })
}

fn fetch_contact(conn: &Connection, id: i64) -> rusqlite::Result<Option<Contact>> {
    conn.query_row(
        &format!("SELECT {} FROM contacts WHERE id = ?1", CONTACT_COLUMNS),
        params![id],
        map_row_to_contact,
    )
    .optional()
}

fn write_contact(conn: &Connection, contact: &Contact) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE contacts
         SET name = ?1, org = ?2, address = ?3, city = ?4, phones = ?5, users = ?6,
             operators = ?7, contact = ?8, role = ?9, notes = ?10, priority = ?11,
             status = ?12, last_called_at = ?13, updated_at = ?14
         WHERE id = ?15",
        params![
            &contact.name,
            &contact.org,
            &contact.address,
            &contact.city,
            &contact.phones,
            &contact.users,
            &contact.operators,
            &contact.contact,
            &contact.role,
            &contact.notes,
            contact.priority.as_str(),
            contact.status.as_str(),
            contact.last_called_at,
            contact.updated_at,
            contact.id,
        ],
    )?;

    Ok(())
}

/// Inserts contacts in a single transaction and returns their ids in input order
pub async fn insert_contacts(conn: AsyncDbConnection, contacts: &[NewContact]) -> Result<Vec<i64>> {
    let mut conn = conn.lock().await?;
    let tx = conn.transaction()?;
    let mut ids = Vec::with_capacity(contacts.len());

    {
        let mut stmt = tx.prepare(
            "INSERT INTO contacts
             (batch_id, name, org, address, city, phones, users, operators, contact, role,
              notes, priority, status, last_called_at, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)
             RETURNING id",
        )?;

        for contact in contacts {
            let id: i64 = stmt.query_row(
                params![
                    contact.batch_id,
                    &contact.name,
                    &contact.org,
                    &contact.address,
                    &contact.city,
                    &contact.phones,
                    &contact.users,
                    &contact.operators,
                    &contact.contact,
                    &contact.role,
                    &contact.notes,
                    contact.priority.as_str(),
                    contact.status.as_str(),
                    contact.last_called_at,
                    contact.created_at,
                    contact.updated_at,
                ],
                |row| row.get(0),
            )?;
            ids.push(id);
        }
    }

    tx.commit()?;

    Ok(ids)
}

pub async fn get_contact(conn: AsyncDbConnection, id: i64) -> Result<Option<Contact>> {
    let conn = conn.lock().await?;
    Ok(fetch_contact(&conn, id)?)
}

/// All contacts in storage order, newest first
pub async fn list_contacts(conn: AsyncDbConnection) -> Result<Vec<Contact>> {
    let conn = conn.lock().await?;

    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM contacts ORDER BY created_at DESC, id DESC",
        CONTACT_COLUMNS
    ))?;

    let contacts = stmt
        .query_map([], map_row_to_contact)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(contacts)
}

pub async fn count_batch_contacts(conn: AsyncDbConnection, batch_id: i64) -> Result<i64> {
    let conn = conn.lock().await?;

    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM contacts WHERE batch_id = ?1",
        params![batch_id],
        |row| row.get(0),
    )?;

    Ok(count)
}

/// Applies the fields present in `request`; returns `None` for an unknown id
pub async fn update_contact(
    conn: AsyncDbConnection,
    id: i64,
    request: &UpdateContactRequest,
) -> Result<Option<Contact>> {
    let conn = conn.lock().await?;

    let Some(mut contact) = fetch_contact(&conn, id)? else {
        return Ok(None);
    };

    apply_update(&mut contact, request);
    contact.updated_at = chrono::Utc::now().timestamp();
    write_contact(&conn, &contact)?;

    Ok(Some(contact))
}

fn apply_update(contact: &mut Contact, request: &UpdateContactRequest) {
    let text_fields = [
        (&mut contact.name, &request.name),
        (&mut contact.org, &request.org),
        (&mut contact.address, &request.address),
        (&mut contact.city, &request.city),
        (&mut contact.phones, &request.phones),
        (&mut contact.users, &request.users),
        (&mut contact.operators, &request.operators),
        (&mut contact.contact, &request.contact),
        (&mut contact.role, &request.role),
        (&mut contact.notes, &request.notes),
    ];
    for (field, value) in text_fields {
        if let Some(value) = value {
            *field = value.clone();
        }
    }

    if let Some(priority) = request.priority {
        contact.priority = priority;
    }
    if let Some(status) = request.status {
        contact.status = status;
    }
}

/// Appends a timestamped call note, marks the contact as contacted and
/// records the call time.
pub async fn log_call(conn: AsyncDbConnection, id: i64, note: &str) -> Result<Option<Contact>> {
    let conn = conn.lock().await?;

    let Some(mut contact) = fetch_contact(&conn, id)? else {
        return Ok(None);
    };

    let now = chrono::Local::now();
    contact.notes = call_notes::append_call_note(&contact.notes, note, now.naive_local());
    contact.status = ContactStatus::Contacted;
    contact.last_called_at = Some(now.timestamp());
    contact.updated_at = now.timestamp();
    write_contact(&conn, &contact)?;

    Ok(Some(contact))
}

pub async fn delete_contact(conn: AsyncDbConnection, id: i64) -> Result<bool> {
    let conn = conn.lock().await?;

    let deleted = conn.execute("DELETE FROM contacts WHERE id = ?1", params![id])?;

    Ok(deleted > 0)
}
