//! # Configuration
//!
//! Settings are loaded with [`confique`] from, in priority order:
//!
//! 1. **Environment variables**: `ROLO_DATA_FILE`, `ROLO_AUTOSAVE`, `ROLO_LOG_LEVEL`
//! 2. **Explicit file**: the TOML file given with `--config`
//! 3. **User file**: `rolo.toml` in the OS config directory (via `directories`)
//! 4. **Compiled defaults**
//!
//! Missing files are skipped.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | none | JSON address book loaded at start (in-memory only when unset) |
//! | `autosave` | `true` | Save after every change to the address book |
//! | `log_level` | `warn` | Filter used when `RUST_LOG` is not set |
//! | `event_capacity` | `64` | Buffer size of the model event channel |

use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "rolo.toml";

#[derive(Config, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RoloConfig {
    /// Address book file.
    #[config(env = "ROLO_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    #[config(env = "ROLO_AUTOSAVE", default = true)]
    pub autosave: bool,

    #[config(env = "ROLO_LOG_LEVEL", default = "warn")]
    pub log_level: String,

    #[config(default = 64)]
    pub event_capacity: usize,
}

impl Default for RoloConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            autosave: true,
            log_level: "warn".to_string(),
            event_capacity: crate::events::DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl RoloConfig {
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = RoloConfig::builder().env();
        if let Some(path) = explicit {
            builder = builder.file(path);
        }
        if let Some(path) = user_config_path() {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }
}

/// `rolo.toml` in the per-user config directory, when the OS has one.
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "rolo", "rolo").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = RoloConfig::default();
        assert_eq!(config.data_file, None);
        assert!(config.autosave);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.event_capacity, 64);
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rolo.toml");
        fs::write(
            &path,
            "data_file = \"/tmp/book.json\"\nautosave = false\nevent_capacity = 8\n",
        )
        .unwrap();

        let config = RoloConfig::builder().file(&path).load().unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/book.json")));
        assert!(!config.autosave);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.event_capacity, 8);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let config = RoloConfig::builder()
            .file(dir.path().join("absent.toml"))
            .load()
            .unwrap();
        assert!(config.autosave);
        assert_eq!(config.event_capacity, 64);
    }
}
