//! Phonebook entry identifier.
//!
//! Entry ids travel over the wire as JSON strings (`"1"`, `"2"`, ...) and are
//! looked up by exact string comparison, so the newtype wraps a `String`
//! rather than an integer. The store derives new ids from the numeric value of
//! the existing ones.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a phonebook [`Entry`](crate::Entry).
///
/// ## Examples
///
/// ```
/// use phonebook_core::EntryId;
///
/// let id = EntryId::from_number(5);
/// assert_eq!(id.as_str(), "5");
/// assert_eq!(id.numeric_value(), Some(5));
///
/// // Lookup is by exact string, so a padded id is a different id.
/// assert_ne!(EntryId::from("05"), id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Create an id from its numeric value.
    #[must_use]
    pub fn from_number(value: u64) -> Self {
        Self(value.to_string())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, if it is a plain decimal number.
    #[must_use]
    pub fn numeric_value(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// Consumes the `EntryId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for EntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for EntryId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
