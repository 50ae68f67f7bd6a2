use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeMetadata {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    // We store the title in metadata to list without reading body files
    pub title: String,
    /// Opaque image reference; the host platform resolves it to a pixel size.
    pub thumbnail: Option<String>,
    /// Category slugs, zero or more.
    pub categories: Vec<String>,
    /// Free-form "more information" URL. Sanitized on save, never validated.
    pub external_url: Option<String>,
    /// `None` means the record predates the date-range feature and was never
    /// re-saved. Legacy records are treated as enabled; see
    /// [`NoticeMetadata::date_enabled`].
    #[serde(default)]
    pub date_enabled: Option<bool>,
    /// Raw `YYYY-MM-DD` string as the admin form saved it. Parsing (and the
    /// handling of malformed values) is the visibility evaluator's job.
    #[serde(default)]
    pub date_from: Option<String>,
    #[serde(default)]
    pub date_to: Option<String>,
}

impl NoticeMetadata {
    pub fn new(title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            title,
            thumbnail: None,
            categories: Vec::new(),
            external_url: None,
            date_enabled: None,
            date_from: None,
            date_to: None,
        }
    }

    /// Effective date-gating flag. A record with no stored value at all is a
    /// legacy record and counts as enabled; only an explicit `false` disables
    /// the window.
    pub fn date_enabled(&self) -> bool {
        self.date_enabled.unwrap_or(true)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub metadata: NoticeMetadata,
    pub body_text: String,
}

impl Notice {
    pub fn new(title: String, body_text: String) -> Self {
        Self {
            metadata: NoticeMetadata::new(title),
            body_text,
        }
    }
}
