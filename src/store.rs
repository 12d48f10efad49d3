//! File-backed record store.
//!
//! Each record kind lives in its own JSON array file inside the data directory.
//! Reads never fail outward: a missing or unparsable file is an empty list.
//! Writes overwrite the whole file and report success as a boolean. There is no
//! locking, so concurrent writers can clobber each other.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Guides,
    Tours,
    Destinations,
}

impl RecordKind {
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            RecordKind::Guides => "tour_guides.json",
            RecordKind::Tours => "tours.json",
            RecordKind::Destinations => "destinations.json",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordStore {
    data_dir: PathBuf,
}

impl RecordStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn path_for(&self, kind: RecordKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }

    #[must_use]
    pub fn exists(&self, kind: RecordKind) -> bool {
        self.path_for(kind).exists()
    }

    /// Load all records of a kind, in file order
    pub fn load<T: DeserializeOwned>(&self, kind: RecordKind) -> Vec<T> {
        let path = self.path_for(kind);
        if !path.exists() {
            debug!("No data file at {}", path.display());
            return Vec::new();
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Error loading {}: {}", kind.file_name(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<T>>(&contents) {
            Ok(records) => {
                debug!("Loaded {} records from {}", records.len(), kind.file_name());
                records
            }
            Err(e) => {
                warn!("Error parsing {}: {}", kind.file_name(), e);
                Vec::new()
            }
        }
    }

    /// Overwrite the backing file with `records`. Returns `false` on failure.
    pub fn save<T: Serialize>(&self, kind: RecordKind, records: &[T]) -> bool {
        match self.try_save(kind, records) {
            Ok(()) => {
                debug!("Saved {} records to {}", records.len(), kind.file_name());
                true
            }
            Err(e) => {
                warn!("Error saving {}: {}", kind.file_name(), e);
                false
            }
        }
    }

    fn try_save<T: Serialize>(&self, kind: RecordKind, records: &[T]) -> crate::Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        let json = serde_json::to_string_pretty(records)?;
        fs::write(self.path_for(kind), json)?;
        Ok(())
    }
}
