//! # Noticeboard Architecture
//!
//! Noticeboard is a **host-agnostic content library**. It defines a dated
//! "Notice" record, decides when a notice is visible, and renders single-item
//! and list markup—but it owns no web server, no admin chrome, and no routing.
//! The host platform supplies those through small traits.
//!
//! This distinction drives the entire architecture and should guide all
//! development.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Platform Layer (registry.rs, directives.rs, platform.rs)   │
//! │  - Embed directives and query hooks the host invokes        │
//! │  - The ONLY place that knows how the host dispatches        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Rendering Layer (render/)                                  │
//! │  - Single-item and list markup                              │
//! │  - Explicit escape policy, word trimming                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Logic Layer (visibility.rs, query.rs, schema.rs)           │
//! │  - Pure business rules                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ContentStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Ambient State
//!
//! The host platform this library was modeled on iterates query results
//! through a shared "current item" cursor that must be reset on every exit
//! path. Noticeboard does not reproduce that: the list renderer owns a plain
//! local iterator over its own query result, and the routed current item
//! travels explicitly inside [`render::RenderContext`]. There is nothing to
//! reset because there is nothing shared.
//!
//! ## Key Principle: Degrade, Never Panic
//!
//! Required fields ("title required", "dates required when the range is
//! enabled") are advisory, enforced only at submission time by
//! [`schema::validate_submission`]. A record that was saved without them must
//! still load, evaluate, and render—empty title, empty body, and unparseable
//! date bounds are all defined, non-panicking outcomes.
//!
//! ## Testing Strategy
//!
//! 1. **Logic** (`visibility.rs`, `query.rs`, `text.rs`, `schema.rs`):
//!    thorough unit tests in colocated `#[cfg(test)]` modules. This is where
//!    the lion's share of testing lives.
//!
//! 2. **Renderers** (`render/`): given an [`store::memory::InMemoryStore`]
//!    and a fixture platform, assert on the produced markup.
//!
//! 3. **Registry** (`registry.rs` + `tests/`): end-to-end expansion of the
//!    embed directives and query hooks the way a host would drive them.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for record operations
//! - [`model`]: Core data types (`Notice`, `NoticeMetadata`)
//! - [`visibility`]: The date-window visibility evaluator
//! - [`query`]: Category/search filtering and ordering
//! - [`text`]: Sanitization and word trimming
//! - [`render`]: Single-item and list markup renderers
//! - [`platform`]: Host collaborator traits (permalinks, thumbnails, labels)
//! - [`registry`]: Typed extension-point registry
//! - [`directives`]: The two embed directives this crate registers
//! - [`augment`]: Category-archive query augmentation
//! - [`schema`]: Admin form field definitions, validation, save handling
//! - [`store`]: Storage abstraction and implementations
//! - [`error`]: Error types

pub mod api;
pub mod augment;
pub mod directives;
pub mod error;
pub mod model;
pub mod platform;
pub mod query;
pub mod registry;
pub mod render;
pub mod schema;
pub mod store;
pub mod text;
pub mod visibility;
