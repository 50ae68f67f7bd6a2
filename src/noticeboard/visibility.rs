//! # Visibility Evaluator
//!
//! A notice can carry an inclusive calendar-day window (`date_from` ..
//! `date_to`) outside of which it is hidden. The window only applies when the
//! record's date gating is enabled; records that predate the feature count as
//! enabled (see [`NoticeMetadata::date_enabled`]).
//!
//! Bounds are stored as raw strings exactly as the admin form saved them, so
//! evaluation has to cope with empty and malformed values. Policy: a bound
//! that is missing, empty, or unparseable imposes **no restriction on that
//! side**. Evaluation never fails.

use chrono::NaiveDate;

use crate::model::{Notice, NoticeMetadata};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One side of the visibility window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    /// No restriction on this side.
    Unbounded,
    On(NaiveDate),
}

/// Parses a stored bound string. Missing, empty (after trimming), and
/// malformed values all come back as [`DateBound::Unbounded`].
pub fn parse_bound(raw: Option<&str>) -> DateBound {
    match raw.map(str::trim) {
        None | Some("") => DateBound::Unbounded,
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(DateBound::On)
            .unwrap_or(DateBound::Unbounded),
    }
}

/// Whether `today` falls inside the window described by the metadata.
///
/// Inclusive on both ends, calendar-day precision. Returns true
/// unconditionally when gating is explicitly disabled.
pub fn is_visible_on(meta: &NoticeMetadata, today: NaiveDate) -> bool {
    if !meta.date_enabled() {
        return true;
    }
    let from = parse_bound(meta.date_from.as_deref());
    let to = parse_bound(meta.date_to.as_deref());
    let after_start = match from {
        DateBound::Unbounded => true,
        DateBound::On(d) => today >= d,
    };
    let before_end = match to {
        DateBound::Unbounded => true,
        DateBound::On(d) => today <= d,
    };
    after_start && before_end
}

pub fn is_visible(notice: &Notice, today: NaiveDate) -> bool {
    is_visible_on(&notice.metadata, today)
}
