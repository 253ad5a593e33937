//! Nested plain-data form of an entry tree.
//!
//! This is the shape written to disk: `{ "title": ..., "entries": [...] }`.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Serialisable record of one node and its descendants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRecord {
    pub title: String,
    pub entries: Vec<EntryRecord>,
}

impl EntryRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }
}

/// Raw record for intermediate parsing (fields are Option to detect "not specified").
///
/// - missing `title` → [`DomainError::MissingField`]
/// - missing or `null` `entries` → no children
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawEntryRecord {
    pub title: Option<String>,
    pub entries: Option<Vec<RawEntryRecord>>,
}

impl RawEntryRecord {
    fn into_record(self, location: &str) -> Result<EntryRecord, DomainError> {
        let title = self.title.ok_or_else(|| DomainError::MissingField {
            field: "title",
            location: location.to_string(),
        })?;
        let entries = self
            .entries
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, raw)| raw.into_record(&format!("{location}.entries[{i}]")))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(EntryRecord { title, entries })
    }
}

impl TryFrom<RawEntryRecord> for EntryRecord {
    type Error = DomainError;

    fn try_from(raw: RawEntryRecord) -> Result<Self, Self::Error> {
        raw.into_record("$")
    }
}
