//! Core types for the phonebook.

pub mod entry;
pub mod id;

pub use entry::{Entry, NewEntry, Summary};
pub use id::EntryId;
