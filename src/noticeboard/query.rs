//! Category/search filtering and ordering for notice listings.
//!
//! The filter itself is pure: it takes the full record set and returns the
//! matches ordered by creation date descending, newest first, with no
//! page-size cap. Resolution of the *effective* filter (embed attribute vs.
//! request parameter) lives in [`resolve_category`] so the precedence rule is
//! testable on its own.

use crate::model::Notice;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeQuery {
    /// Category slug filter; `None` matches every category.
    pub category: Option<String>,
    /// Substring search over title and body; `None` matches everything.
    pub search_term: Option<String>,
}

impl NoticeQuery {
    pub fn with_category(mut self, slug: impl Into<String>) -> Self {
        self.category = Some(slug.into());
        self
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }
}

/// The embed-attribute category wins over the request parameter; both empty
/// means no filter.
pub fn resolve_category(attr: Option<&str>, request_param: Option<&str>) -> Option<String> {
    fn pick(s: Option<&str>) -> Option<&str> {
        s.map(str::trim).filter(|s| !s.is_empty())
    }
    pick(attr).or_else(|| pick(request_param)).map(String::from)
}

/// Applies `query` to `notices` and orders the result by creation date
/// descending.
pub fn run_query(mut notices: Vec<Notice>, query: &NoticeQuery) -> Vec<Notice> {
    notices.retain(|n| matches_category(n, query.category.as_deref()));
    notices.retain(|n| matches_search(n, query.search_term.as_deref()));
    notices.sort_by(|a, b| b.metadata.created_at.cmp(&a.metadata.created_at));
    notices
}

fn matches_category(notice: &Notice, category: Option<&str>) -> bool {
    match category {
        None => true,
        Some(slug) => {
            let slug = slug.to_lowercase();
            notice
                .metadata
                .categories
                .iter()
                .any(|c| c.to_lowercase() == slug)
        }
    }
}

fn matches_search(notice: &Notice, term: Option<&str>) -> bool {
    match term {
        None => true,
        Some(term) if term.trim().is_empty() => true,
        Some(term) => {
            let term = term.to_lowercase();
            notice.metadata.title.to_lowercase().contains(&term)
                || notice.body_text.to_lowercase().contains(&term)
        }
    }
}
