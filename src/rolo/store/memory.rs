use super::Storage;
use crate::error::Result;
use crate::model::AddressBook;
use std::path::{Path, PathBuf};

/// Keeps everything in memory. Saves overwrite the held book; exports are only recorded.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    book: AddressBook,
    saves: usize,
    exports: Vec<(PathBuf, AddressBook)>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that loads `book`.
    pub fn with_book(book: AddressBook) -> Self {
        Self {
            book,
            ..Self::default()
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn exports(&self) -> &[(PathBuf, AddressBook)] {
        &self.exports
    }
}

impl Storage for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        Ok(self.book.clone())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.book = book.clone();
        self.saves += 1;
        Ok(())
    }

    fn export(&mut self, book: &AddressBook, path: &Path) -> Result<()> {
        self.exports.push((path.to_path_buf(), book.clone()));
        Ok(())
    }
}
