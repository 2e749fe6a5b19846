//! A single-file JSON store of donation records.
//!
//! The catalogue is one JSON array, read in full and rewritten on every
//! append. This stands in for a future network API; a missing file is
//! treated as an empty catalogue.

use std::path::{Path, PathBuf};

use super::{record::PersistedCat, CatStore, StoreError};

/// A JSON-file backed [`CatStore`].
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// A store persisting to the given file path.
    ///
    /// The file is created on the first append.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file the catalogue is persisted to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<PersistedCat>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }
}

impl CatStore for JsonStore {
    fn append(&mut self, cat: PersistedCat) -> Result<(), StoreError> {
        let mut cats = self.read()?;
        cats.push(cat);
        let content = serde_json::to_string_pretty(&cats)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<PersistedCat>, StoreError> {
        self.read()
    }
}
