//! # Storage Layer
//!
//! The [`Storage`] trait is the boundary between the command engine and whatever keeps the
//! address book between runs. The engine never decides a file format: it hands an
//! [`AddressBook`] over and gets one back.
//!
//! ## Implementations
//!
//! - [`json::JsonFileStore`]: one pretty-printed JSON file (persons + groups)
//! - [`memory::InMemoryStore`]: no persistence; records every save and export, for tests
//!
//! Loading goes through `AddressBook`'s `Deserialize`, which re-runs the value-object
//! validation and the uniqueness checks, so a hand-edited file cannot smuggle in a
//! malformed entry.

use crate::error::Result;
use crate::model::AddressBook;
use std::path::Path;

pub mod json;
pub mod memory;

pub trait Storage {
    /// Load the saved address book. A store with nothing saved yet returns an empty book.
    fn load(&self) -> Result<AddressBook>;

    /// Persist the current address book.
    fn save(&mut self, book: &AddressBook) -> Result<()>;

    /// Write a copy of the address book to `path`, independent of the store's own location.
    fn export(&mut self, book: &AddressBook, path: &Path) -> Result<()>;
}
