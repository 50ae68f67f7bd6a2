//! Category-archive query augmentation.
//!
//! Category archive pages only query the host's generic content type by
//! default, so notices would never appear alongside ordinary posts. This hook
//! widens the primary query's type filter to include notices.

use crate::registry::QueryHook;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// The host's generic content type.
    Post,
    Notice,
}

/// The host's outgoing page-level query, reduced to what the augmenter
/// inspects and mutates.
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    pub is_category_archive: bool,
    /// Whether this is the page's primary query, as opposed to a secondary
    /// widget or embed query.
    pub is_primary: bool,
    /// Type filter; `None` means the host default.
    pub content_types: Option<Vec<ContentType>>,
}

/// Injects [`ContentType::Notice`] into a primary category-archive query.
///
/// Existing types are preserved in order; an unset filter becomes
/// `[Post, Notice]`. Non-category and non-primary queries are untouched.
pub fn augment_category_query(query: &mut PageQuery) {
    if !(query.is_category_archive && query.is_primary) {
        return;
    }
    match &mut query.content_types {
        Some(types) => {
            if !types.contains(&ContentType::Notice) {
                types.push(ContentType::Notice);
            }
        }
        None => {
            query.content_types = Some(vec![ContentType::Post, ContentType::Notice]);
        }
    }
}

/// [`QueryHook`] wrapper around [`augment_category_query`].
pub struct CategoryArchiveHook;

impl QueryHook for CategoryArchiveHook {
    fn before_query(&self, query: &mut PageQuery) {
        augment_category_query(query);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_query(content_types: Option<Vec<ContentType>>) -> PageQuery {
        PageQuery {
            is_category_archive: true,
            is_primary: true,
            content_types,
        }
    }

    #[test]
    fn unset_filter_becomes_post_and_notice() {
        let mut query = category_query(None);
        augment_category_query(&mut query);
        assert_eq!(
            query.content_types,
            Some(vec![ContentType::Post, ContentType::Notice])
        );
    }

    #[test]
    fn existing_types_are_preserved() {
        let mut query = category_query(Some(vec![ContentType::Post]));
        augment_category_query(&mut query);
        assert_eq!(
            query.content_types,
            Some(vec![ContentType::Post, ContentType::Notice])
        );
    }

    #[test]
    fn notice_is_not_duplicated() {
        let mut query = category_query(Some(vec![ContentType::Notice]));
        augment_category_query(&mut query);
        assert_eq!(query.content_types, Some(vec![ContentType::Notice]));
    }

    #[test]
    fn non_category_queries_are_untouched() {
        let mut query = PageQuery {
            is_category_archive: false,
            is_primary: true,
            content_types: None,
        };
        augment_category_query(&mut query);
        assert_eq!(query.content_types, None);
    }

    #[test]
    fn secondary_queries_are_untouched() {
        let mut query = PageQuery {
            is_category_archive: true,
            is_primary: false,
            content_types: Some(vec![ContentType::Post]),
        };
        augment_category_query(&mut query);
        assert_eq!(query.content_types, Some(vec![ContentType::Post]));
    }
}
