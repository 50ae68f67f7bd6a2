//! # API Facade
//!
//! A **thin facade** over the schema and store layers for record operations:
//! the entry point an admin surface (or script) uses to create, read, and
//! delete notices.
//!
//! The facade does no business logic of its own—saving dispatches through
//! [`crate::schema::apply_submission`], querying through the store. The
//! renderers are deliberately *not* here: the host platform invokes them per
//! request through the directive registry, borrowing the store via
//! [`crate::render::RenderContext`].
//!
//! ## Generic Over ContentStore
//!
//! `Noticeboard<S: ContentStore>` is generic over the storage backend:
//! - Production: `Noticeboard<FileStore>`
//! - Testing: `Noticeboard<InMemoryStore>`

use uuid::Uuid;

use crate::error::Result;
use crate::model::Notice;
use crate::query::NoticeQuery;
use crate::schema::{self, NoticeSubmission};
use crate::store::ContentStore;

pub struct Noticeboard<S: ContentStore> {
    store: S,
}

impl<S: ContentStore> Noticeboard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store, e.g. to build a render context.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create (`id = None`) or update a notice from a form submission.
    /// Returns `None` when the save was an autosave and was skipped.
    pub fn save_notice(
        &mut self,
        id: Option<Uuid>,
        submission: &NoticeSubmission,
        autosave: bool,
    ) -> Result<Option<Notice>> {
        schema::apply_submission(&mut self.store, id, submission, autosave)
    }

    pub fn notice(&self, id: &Uuid) -> Result<Notice> {
        self.store.get_notice(id)
    }

    pub fn notices(&self, query: &NoticeQuery) -> Result<Vec<Notice>> {
        self.store.query(query)
    }

    pub fn delete_notice(&mut self, id: &Uuid) -> Result<()> {
        self.store.delete_notice(id)
    }
}
