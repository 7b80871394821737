use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::{ContactPriority, ContactStatus};

/// Carrier families used for filtering and statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CarrierGroup {
    Telia,
    Tele2,
    Tre,
    Telenor,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    NameAsc,
    NameDesc,
    PhonesDesc,
    PhonesAsc,
    Recent,
}

/// Contact list filter; every unset field matches everything.
/// An empty string counts as unset for the enum fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactFilter {
    pub search: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub operator: Option<CarrierGroup>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<ContactStatus>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub priority: Option<ContactPriority>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub sort: Option<SortOrder>,
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => {
            T::deserialize(IntoDeserializer::<'_, D::Error>::into_deserializer(value)).map(Some)
        }
    }
}

impl ContactFilter {
    pub fn is_active(&self) -> bool {
        self.search
            .as_deref()
            .map(|s| !s.trim().is_empty())
            .unwrap_or(false)
            || self.operator.is_some()
            || self.status.is_some()
            || self.priority.is_some()
            || self.sort.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SavedFilter {
    pub id: i64,
    pub name: String,
    pub filter: ContactFilter,
    pub created_at: i64,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct CreateSavedFilterRequest {
    pub name: String,
    pub filter: ContactFilter,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct SavedFiltersResponse {
    pub filters: Vec<SavedFilter>,
}
