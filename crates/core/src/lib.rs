//! Phonebook Core - Domain types and the in-memory entry store.
//!
//! # Architecture
//!
//! The core crate contains only types and the store - no I/O, no HTTP, no
//! locking. The `server` crate owns the store behind a mutex and maps store
//! outcomes onto HTTP responses.
//!
//! # Modules
//!
//! - [`types`] - `Entry`, `EntryId`, the `NewEntry` create candidate and `Summary`
//! - [`store`] - `PhonebookStore` and its `StoreError`

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod store;
pub mod types;

pub use store::{PhonebookStore, StoreError};
pub use types::*;
