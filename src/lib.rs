//! # Bookshelf
//!
//! A personal book-tracking library and CLI with:
//! - A JSON library file, loaded once and saved wholesale
//! - Tolerant loading (missing or corrupt file → empty collection)
//! - Add, delete, search, mark-as-read, filter and sort over the collection
//! - A numbered text menu front-end
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Shell (menu loop)                      │
//! │              stdin / stdout, input validation               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                         Library                             │
//! │           (session state: config + collection)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Catalog   │          │   Storage   │
//!   │ (in-memory) │          │ (JSON file) │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod catalog;
pub mod storage;
pub mod library;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BookshelfError, Result};
pub use config::Config;
pub use catalog::{Book, Collection};
pub use library::Library;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Bookshelf
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
