//! JSON file store
//!
//! Whole-file load and save of the collection.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, info};

use crate::catalog::{Book, Collection};
use crate::config::Config;
use crate::error::Result;

/// How a load went. `JsonFileStore::load` collapses all three to a collection.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The file existed and parsed
    Loaded(Collection),

    /// No file yet; a fresh, truly empty library
    Missing,

    /// The file existed but could not be read or parsed
    Recovered { reason: String },
}

impl LoadOutcome {
    /// The loaded collection, or an empty one
    pub fn into_collection(self) -> Collection {
        match self {
            LoadOutcome::Loaded(collection) => collection,
            LoadOutcome::Missing | LoadOutcome::Recovered { .. } => Collection::new(),
        }
    }

    /// Whether the file was unusable and has been replaced by an empty collection
    pub fn is_recovered(&self) -> bool {
        matches!(self, LoadOutcome::Recovered { .. })
    }
}

/// Reads and writes the library file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Path of the JSON document
    path: PathBuf,

    /// Spaces per indentation level
    indent: usize,
}

impl JsonFileStore {
    /// Create a store for `path` with the given indentation width
    pub fn new(path: impl Into<PathBuf>, indent: usize) -> Self {
        Self {
            path: path.into(),
            indent,
        }
    }

    /// Create a store from the session config
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.data_file.clone(), config.indent)
    }

    /// Read the file, keeping failures visible.
    ///
    /// Returns:
    /// - `Ok(Some(collection))` — file parsed
    /// - `Ok(None)` — file does not exist
    /// - `Err(_)` — file unreadable or not a valid collection
    pub fn try_load(&self) -> Result<Option<Collection>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        let collection: Collection = serde_json::from_str(&contents)?;
        Ok(Some(collection))
    }

    /// Load and classify the outcome
    pub fn load_outcome(&self) -> LoadOutcome {
        match self.try_load() {
            Ok(Some(collection)) => {
                info!(path = %self.path.display(), books = collection.len(), "Loaded library");
                LoadOutcome::Loaded(collection)
            }
            Ok(None) => {
                info!(path = %self.path.display(), "No library file, starting empty");
                LoadOutcome::Missing
            }
            Err(e) => {
                info!(path = %self.path.display(), error = %e, "Library file unusable, starting empty");
                LoadOutcome::Recovered {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Load the collection; a missing or corrupt file yields an empty one
    pub fn load(&self) -> Collection {
        self.load_outcome().into_collection()
    }

    /// Overwrite the file with the full collection.
    ///
    /// Keys are written in record order, non-ASCII text is left unescaped.
    /// This is a plain truncate-and-write: a crash mid-write can lose data.
    pub fn save(&self, collection: &[Book]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.path)?;
        let indent = vec![b' '; self.indent];
        let mut serializer =
            Serializer::with_formatter(BufWriter::new(file), PrettyFormatter::with_indent(&indent));
        collection.serialize(&mut serializer)?;

        let mut writer = serializer.into_inner();
        writer.flush()?;
        writer.get_ref().sync_all()?;

        debug!(path = %self.path.display(), books = collection.len(), "Saved library");
        Ok(())
    }

    /// Path of the library file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
