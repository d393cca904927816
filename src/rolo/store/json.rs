use super::Storage;
use crate::error::{Result, RoloError};
use crate::model::AddressBook;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RoloError::Io)?;
            }
        }
        Ok(())
    }

    fn write_book(book: &AddressBook, path: &Path) -> Result<()> {
        Self::ensure_parent(path)?;
        let content = serde_json::to_string_pretty(book).map_err(RoloError::Serialization)?;
        fs::write(path, content).map_err(RoloError::Io)?;
        Ok(())
    }
}

impl Storage for JsonFileStore {
    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no data file yet, starting empty");
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&self.path).map_err(RoloError::Io)?;
        let book: AddressBook =
            serde_json::from_str(&content).map_err(RoloError::Serialization)?;
        debug!(
            path = %self.path.display(),
            persons = book.persons().len(),
            groups = book.groups().len(),
            "loaded address book"
        );
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        Self::write_book(book, &self.path)
    }

    fn export(&mut self, book: &AddressBook, path: &Path) -> Result<()> {
        if path.is_dir() {
            return Err(RoloError::Store(format!(
                "Cannot export to {}: it is a directory",
                path.display()
            )));
        }
        Self::write_book(book, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Group, GroupName};
    use crate::test_utils::{book_with, pinned};
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("book.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_keeps_ids_and_groups() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested").join("book.json"));

        let mut book = book_with(&["Alice", "Bob"]);
        book.add_person(pinned("Carol")).unwrap();
        let ids = vec![book.persons()[0].id(), book.persons()[2].id()];
        book.add_group(Group::new(GroupName::new("Team").unwrap(), ids))
            .unwrap();
        store.save(&book).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, book);
        assert!(loaded.persons()[2].is_pinned());
        let members: Vec<_> = loaded
            .group_members(&loaded.groups()[0])
            .iter()
            .map(|p| p.name().as_str())
            .collect();
        assert_eq!(members, ["Alice", "Carol"]);
    }

    #[test]
    fn invalid_entry_fails_to_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(
            &path,
            r#"{"persons":[{"name":"Al!ce","phone":"123","email":"a@b","address":"x","tags":[]}]}"#,
        )
        .unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(RoloError::Serialization(_))));
    }

    #[test]
    fn export_writes_to_given_path() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("book.json"));
        let out = dir.path().join("export.json");

        store.export(&book_with(&["Alice"]), &out).unwrap();

        let exported: AddressBook =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(exported, book_with(&["Alice"]));
        assert!(!store.path().exists());
    }

    #[test]
    fn export_to_directory_fails() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("book.json"));
        let err = store.export(&book_with(&[]), dir.path()).unwrap_err();
        assert!(matches!(err, RoloError::Store(_)));
    }
}
