//! Phonebook entry records.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::id::EntryId;

/// A single phonebook contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Store-assigned identifier.
    pub id: EntryId,
    /// Contact name, unique across the phonebook (case-sensitive).
    pub name: String,
    /// Phone number, free-form.
    pub number: String,
}

impl Entry {
    /// Create an entry with an explicit id.
    #[must_use]
    pub fn new(id: impl Into<EntryId>, name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            number: number.into(),
        }
    }
}

/// Candidate entry submitted for creation.
///
/// Both fields are optional on the wire: an absent field and an explicit
/// `null` both deserialize to `None`. Validation happens in
/// [`PhonebookStore::create`](crate::PhonebookStore::create).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

impl NewEntry {
    /// Candidate with both fields present.
    #[must_use]
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            number: Some(number.into()),
        }
    }
}

/// Snapshot of the phonebook for the info view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of entries at the time of the snapshot.
    pub count: usize,
    /// When the snapshot was taken.
    pub generated_at: DateTime<Local>,
}
