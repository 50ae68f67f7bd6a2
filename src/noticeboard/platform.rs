//! Host platform collaborators.
//!
//! The rendering/routing layer of the host supplies permalinks, resolved
//! thumbnail markup, and category label formatting. Noticeboard only consumes
//! these; [`FixedPlatform`] exists so renderers can be tested without a host.

use std::collections::HashMap;

use crate::model::Notice;
use crate::text::sanitize_text;

/// Request parameter key for the category filter.
pub const CATEGORY_PARAM: &str = "category";
/// Request parameter key for the search term.
pub const SEARCH_PARAM: &str = "resource_search_term";

/// Services the host's rendering/routing layer provides per record.
pub trait Platform {
    /// Canonical page URL for a notice.
    fn permalink(&self, notice: &Notice) -> String;

    /// Thumbnail markup at the requested pixel size, or `None` when the
    /// record has no image.
    fn thumbnail_markup(&self, notice: &Notice, size: (u32, u32)) -> Option<String>;

    /// Display label for a category slug.
    fn category_label(&self, slug: &str) -> String;
}

/// Flat string query parameters of the current request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    params: HashMap<String, String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Raw parameter lookup.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Sanitized `category` parameter, `None` when absent or blank.
    pub fn category(&self) -> Option<String> {
        self.sanitized(CATEGORY_PARAM)
    }

    /// Sanitized search term parameter, `None` when absent or blank.
    pub fn search_term(&self) -> Option<String> {
        self.sanitized(SEARCH_PARAM)
    }

    fn sanitized(&self, key: &str) -> Option<String> {
        self.param(key)
            .map(sanitize_text)
            .filter(|s| !s.is_empty())
    }
}

/// Deterministic platform for tests: permalinks are derived from the record
/// id, thumbnails from the stored reference and requested size, labels by
/// capitalizing the slug.
#[cfg(any(test, feature = "test_utils"))]
pub struct FixedPlatform;

#[cfg(any(test, feature = "test_utils"))]
impl Platform for FixedPlatform {
    fn permalink(&self, notice: &Notice) -> String {
        format!("https://example.test/notices/{}", notice.metadata.id)
    }

    fn thumbnail_markup(&self, notice: &Notice, size: (u32, u32)) -> Option<String> {
        notice.metadata.thumbnail.as_ref().map(|img| {
            format!(
                "<img src='{}' width='{}' height='{}' />",
                img, size.0, size.1
            )
        })
    }

    fn category_label(&self, slug: &str) -> String {
        let mut chars = slug.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}
