//! # Storage Layer
//!
//! This module defines the storage abstraction for noticeboard. The
//! [`ContentStore`] trait allows the library to work with different backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (a real platform's content tables) without
//!   changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Metadata stored in `data.json`
//!   - Notice body text in individual files: `notice-{uuid}.txt`
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <root>/
//! ├── data.json              # Metadata for all notices (keyed by id)
//! └── notice-{uuid}.txt      # Individual body text files
//! ```
//!
//! Metadata and body text are stored separately so listing and querying
//! don't require reading every body file. Filtering by search term does, so
//! the provided [`ContentStore::query`] loads full records.

use crate::error::Result;
use crate::model::Notice;
use crate::query::{run_query, NoticeQuery};
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for notice storage.
///
/// Implementations must handle persistence, retrieval, and consistency for
/// notice records.
pub trait ContentStore {
    /// Save a notice (create or update)
    fn save_notice(&mut self, notice: &Notice) -> Result<()>;

    /// Get a notice by ID
    fn get_notice(&self, id: &Uuid) -> Result<Notice>;

    /// List all notices, in no particular order
    fn list_notices(&self) -> Result<Vec<Notice>>;

    /// Delete a notice permanently
    fn delete_notice(&mut self, id: &Uuid) -> Result<()>;

    /// Run a filtered, ordered query. The default implementation loads every
    /// record and filters in memory; backends with native querying can
    /// override it.
    fn query(&self, query: &NoticeQuery) -> Result<Vec<Notice>> {
        Ok(run_query(self.list_notices()?, query))
    }
}
