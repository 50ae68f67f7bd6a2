//! Record schema for the admin form surface.
//!
//! The host platform owns the form chrome; this module supplies what it needs
//! from us: the field definitions and defaults ([`notice_fields`]), the
//! advisory submission-time validation ([`validate_submission`]), and the
//! save handler ([`apply_submission`]). Validation is never re-run on read—a
//! record saved past it must still render.

use chrono::Utc;
use uuid::Uuid;

use crate::error::Result;
use crate::model::Notice;
use crate::store::ContentStore;
use crate::text::sanitize_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    MultilineText,
    Checkbox,
    Date,
}

/// One admin-form field: key, human label, input kind, and default value.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub default: &'static str,
}

/// The notice meta fields, in form order. Title and thumbnail are supplied by
/// the host's standard record surface, not listed here.
pub fn notice_fields() -> Vec<FieldDef> {
    vec![
        FieldDef {
            key: "body_text",
            label: "Notice",
            kind: FieldKind::MultilineText,
            default: "",
        },
        FieldDef {
            key: "external_url",
            label: "Website URL for more info",
            kind: FieldKind::Text,
            default: "",
        },
        FieldDef {
            key: "date_enabled",
            label: "Enable date range (show/hide notice based on date)",
            kind: FieldKind::Checkbox,
            default: "1",
        },
        FieldDef {
            key: "date_from",
            label: "Notice Display Date From",
            kind: FieldKind::Date,
            default: "",
        },
        FieldDef {
            key: "date_to",
            label: "Notice Display Date To",
            kind: FieldKind::Date,
            default: "",
        },
    ]
}

/// Raw form values posted on save.
#[derive(Debug, Clone, Default)]
pub struct NoticeSubmission {
    pub title: String,
    pub body_text: String,
    pub external_url: String,
    pub date_enabled: bool,
    pub date_from: String,
    pub date_to: String,
    pub categories: Vec<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: &'static str,
}

/// Advisory submission-time checks, in the order the form surfaces them.
/// The storage layer never enforces these.
pub fn validate_submission(submission: &NoticeSubmission) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if submission.title.trim().is_empty() {
        issues.push(ValidationIssue {
            field: "title",
            message: "Title is required",
        });
    }
    if submission.body_text.trim().is_empty() {
        issues.push(ValidationIssue {
            field: "body_text",
            message: "Notice is required",
        });
    }
    if submission.date_enabled {
        if submission.date_to.trim().is_empty() {
            issues.push(ValidationIssue {
                field: "date_to",
                message: "Date To is required",
            });
        }
        if submission.date_from.trim().is_empty() {
            issues.push(ValidationIssue {
                field: "date_from",
                message: "Date From is required",
            });
        }
    }
    issues
}

/// Creates or updates a notice from a form submission.
///
/// Returns `Ok(None)` during autosave: the host fires the save callback for
/// autosaves too, and those must not touch stored metadata. Every text field
/// passes through [`sanitize_text`]; an edited record always ends up with an
/// explicit `date_enabled` flag, so only never-saved legacy records stay
/// unset.
pub fn apply_submission<S: ContentStore>(
    store: &mut S,
    id: Option<Uuid>,
    submission: &NoticeSubmission,
    autosave: bool,
) -> Result<Option<Notice>> {
    if autosave {
        return Ok(None);
    }

    let mut notice = match id {
        Some(id) => store.get_notice(&id)?,
        None => Notice::new(String::new(), String::new()),
    };

    notice.metadata.title = sanitize_text(&submission.title);
    notice.body_text = sanitize_text(&submission.body_text);
    notice.metadata.external_url =
        Some(sanitize_text(&submission.external_url)).filter(|s| !s.is_empty());
    notice.metadata.date_enabled = Some(submission.date_enabled);
    notice.metadata.date_from =
        Some(sanitize_text(&submission.date_from)).filter(|s| !s.is_empty());
    notice.metadata.date_to = Some(sanitize_text(&submission.date_to)).filter(|s| !s.is_empty());
    notice.metadata.categories = submission
        .categories
        .iter()
        .map(|c| sanitize_text(c))
        .filter(|c| !c.is_empty())
        .collect();
    notice.metadata.thumbnail = submission.thumbnail.clone().filter(|t| !t.is_empty());
    notice.metadata.updated_at = Utc::now();

    store.save_notice(&notice)?;
    Ok(Some(notice))
}
