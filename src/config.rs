//! Configuration for Bookshelf
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{BookshelfError, Result};

/// Default name of the library file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "bibliotheque.json";

/// Main configuration for a Bookshelf session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// JSON file holding the whole collection
    pub data_file: PathBuf,

    /// Number of spaces per indentation level in the saved file
    pub indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            indent: 4,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the values that cannot be expressed in the types
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(BookshelfError::config("data file path is empty"));
        }
        if self.data_file.is_dir() {
            return Err(BookshelfError::config(format!(
                "data file {} is a directory",
                self.data_file.display()
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the library file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the indentation width of the saved file
    pub fn indent(mut self, spaces: usize) -> Self {
        self.config.indent = spaces;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
