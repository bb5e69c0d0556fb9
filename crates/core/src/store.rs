//! In-memory phonebook store.
//!
//! [`PhonebookStore`] is the single owner of the entry sequence. It performs no
//! locking of its own; callers that share it across threads wrap it in one
//! mutex and hold the lock for exactly one store operation.

use chrono::Local;
use thiserror::Error;

use crate::types::{Entry, EntryId, NewEntry, Summary};

/// Errors returned by [`PhonebookStore::create`].
///
/// The display strings are the client-facing error messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The candidate has no name or no number (absent or empty).
    #[error("name or number missing")]
    MissingField,
    /// An entry with the same name already exists.
    #[error("name must be unique, this already exists")]
    DuplicateName {
        /// The rejected name.
        name: String,
    },
}

/// Entries present when the service starts.
const SEED_ENTRIES: [(&str, &str, &str); 4] = [
    ("1", "Arto Hellas", "040-123456"),
    ("2", "Ada Lovelace", "39-44-5323523"),
    ("3", "Dan Abramov", "12-43-234345"),
    ("4", "Mary Poppendieck", "39-23-6423122"),
];

/// Ordered, in-memory collection of phonebook entries.
///
/// Invariants: ids are unique, names are unique (case-sensitive), and entries
/// iterate in insertion order.
#[derive(Debug, Clone, Default)]
pub struct PhonebookStore {
    entries: Vec<Entry>,
}

impl PhonebookStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a store holding the four seed entries (ids `"1"` to `"4"`).
    #[must_use]
    pub fn seeded() -> Self {
        let entries = SEED_ENTRIES
            .iter()
            .map(|&(id, name, number)| Entry::new(id, name, number))
            .collect();
        Self { entries }
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn list_all(&self) -> &[Entry] {
        &self.entries
    }

    /// Find the entry whose id is exactly `id`.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == *id)
    }

    /// Validate `candidate`, assign it the next id and append it.
    ///
    /// # Errors
    ///
    /// - [`StoreError::MissingField`] if `name` or `number` is absent or empty.
    /// - [`StoreError::DuplicateName`] if an entry with the same name exists.
    ///
    /// The store is untouched on error.
    pub fn create(&mut self, candidate: NewEntry) -> Result<Entry, StoreError> {
        let (Some(name), Some(number)) = (
            candidate.name.filter(|name| !name.is_empty()),
            candidate.number.filter(|number| !number.is_empty()),
        ) else {
            return Err(StoreError::MissingField);
        };

        if self.entries.iter().any(|entry| entry.name == name) {
            return Err(StoreError::DuplicateName { name });
        }

        let entry = Entry {
            id: self.next_id(),
            name,
            number,
        };
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Remove the entry whose id is exactly `id` and return it.
    pub fn delete_by_id(&mut self, id: &str) -> Option<Entry> {
        let index = self.entries.iter().position(|entry| entry.id == *id)?;
        Some(self.entries.remove(index))
    }

    /// Entry count and the current local time.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            count: self.entries.len(),
            generated_at: Local::now(),
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One past the largest numeric id, or `1` for an empty store.
    ///
    /// Ids that are not plain numbers are ignored; the store only ever
    /// assigns numeric ids.
    fn next_id(&self) -> EntryId {
        let max = self
            .entries
            .iter()
            .filter_map(|entry| entry.id.numeric_value())
            .max()
            .unwrap_or(0);
        EntryId::from_number(max + 1)
    }
}
