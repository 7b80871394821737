use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Where a contact is in the calling workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    #[default]
    New,
    Contacted,
    Interested,
    NotInterested,
    Converted,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 5] = [
        ContactStatus::New,
        ContactStatus::Contacted,
        ContactStatus::Interested,
        ContactStatus::NotInterested,
        ContactStatus::Converted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Contacted => "contacted",
            ContactStatus::Interested => "interested",
            ContactStatus::NotInterested => "not_interested",
            ContactStatus::Converted => "converted",
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(ContactStatus::New),
            "contacted" => Ok(ContactStatus::Contacted),
            "interested" => Ok(ContactStatus::Interested),
            "not_interested" => Ok(ContactStatus::NotInterested),
            "converted" => Ok(ContactStatus::Converted),
            _ => Err(format!("Invalid contact status: {}", s)),
        }
    }
}

/// Contact priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ContactPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl ContactPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactPriority::High => "high",
            ContactPriority::Medium => "medium",
            ContactPriority::Low => "low",
        }
    }
}

impl fmt::Display for ContactPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(ContactPriority::High),
            "medium" => Ok(ContactPriority::Medium),
            "low" => Ok(ContactPriority::Low),
            _ => Err(format!("Invalid contact priority: {}", s)),
        }
    }
}

/// A contact record as produced by an import, before the store assigns an id.
///
/// `phones`, `users` and `operators` are newline-joined listings. They are
/// best-effort aligned by position only: `users` and `operators` may be
/// shorter than `phones`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewContact {
    pub batch_id: i64,
    pub name: String,
    pub org: String,
    pub address: String,
    pub city: String,
    pub phones: String,
    pub users: String,
    pub operators: String,
    pub contact: String,
    pub role: String,
    pub notes: String,
    pub priority: ContactPriority,
    pub status: ContactStatus,
    pub last_called_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Contact {
    pub id: i64,
    pub batch_id: i64,
    pub name: String,
    pub org: String,
    pub address: String,
    pub city: String,
    pub phones: String,
    pub users: String,
    pub operators: String,
    pub contact: String,
    pub role: String,
    pub notes: String,
    pub priority: ContactPriority,
    pub status: ContactStatus,
    pub last_called_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Contact {
    pub fn from_new(id: i64, new: NewContact) -> Self {
        Self {
            id,
            batch_id: new.batch_id,
            name: new.name,
            org: new.org,
            address: new.address,
            city: new.city,
            phones: new.phones,
            users: new.users,
            operators: new.operators,
            contact: new.contact,
            role: new.role,
            notes: new.notes,
            priority: new.priority,
            status: new.status,
            last_called_at: new.last_called_at,
            created_at: new.created_at,
            updated_at: new.updated_at,
        }
    }

    pub fn phone_list(&self) -> Vec<&str> {
        listing_entries(&self.phones)
    }

    /// Device user registered for the phone at `index`, if the listing reaches that far
    pub fn user_at(&self, index: usize) -> Option<&str> {
        listing_entry(&self.users, index)
    }

    /// Carrier registered for the phone at `index`, if the listing reaches that far
    pub fn operator_at(&self, index: usize) -> Option<&str> {
        listing_entry(&self.operators, index)
    }

    pub fn phone_count(&self) -> usize {
        self.phone_list().len()
    }
}

/// Splits a newline-joined listing into its non-blank entries
pub fn listing_entries(listing: &str) -> Vec<&str> {
    listing
        .split('\n')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Bounds-checked lookup into a newline-joined listing
pub fn listing_entry(listing: &str, index: usize) -> Option<&str> {
    listing_entries(listing).get(index).copied()
}

/// Phone number as dialled: spaces and hyphens removed.
pub fn dialable_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export)]
pub struct UpdateContactRequest {
    pub name: Option<String>,
    pub org: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phones: Option<String>,
    pub users: Option<String>,
    pub operators: Option<String>,
    pub contact: Option<String>,
    pub role: Option<String>,
    pub notes: Option<String>,
    pub priority: Option<ContactPriority>,
    pub status: Option<ContactStatus>,
}

/// Log the outcome of a call: the note is appended to the contact's call history
#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct LogCallRequest {
    pub note: String,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactsResponse {
    pub contacts: Vec<Contact>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_with_listings(phones: &str, users: &str, operators: &str) -> Contact {
        Contact {
            id: 1,
            batch_id: 1,
            name: "Anna Svensson".to_string(),
            org: String::new(),
            address: String::new(),
            city: String::new(),
            phones: phones.to_string(),
            users: users.to_string(),
            operators: operators.to_string(),
            contact: String::new(),
            role: String::new(),
            notes: String::new(),
            priority: ContactPriority::Medium,
            status: ContactStatus::New,
            last_called_at: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_listing_lookup_past_end_is_none() {
        let contact = contact_with_listings(
            "08-123 456\n070-111 22 33\n031-44 55 66",
            "Anna Svensson",
            "Telia Sverige AB\nTele2 Sverige AB",
        );

        assert_eq!(contact.phone_count(), 3);
        assert_eq!(contact.user_at(0), Some("Anna Svensson"));
        assert_eq!(contact.user_at(1), None);
        assert_eq!(contact.operator_at(1), Some("Tele2 Sverige AB"));
        assert_eq!(contact.operator_at(2), None);
    }

    #[test]
    fn test_empty_listing_has_no_entries() {
        let contact = contact_with_listings("", "", "");
        assert!(contact.phone_list().is_empty());
        assert_eq!(contact.user_at(0), None);
    }

    #[test]
    fn test_dialable_number() {
        assert_eq!(dialable_number("08-123 456"), "08123456");
        assert_eq!(dialable_number("070 - 111 22 33"), "0701112233");
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in ContactStatus::ALL {
            assert_eq!(status.as_str().parse::<ContactStatus>(), Ok(status));
        }
        assert!("unknown".parse::<ContactStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&ContactStatus::NotInterested).unwrap();
        assert_eq!(json, "\"not_interested\"");
        let priority: ContactPriority = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(priority, ContactPriority::High);
    }
}
