use super::ContentStore;
use crate::error::{NoticeboardError, Result};
use crate::model::Notice;
use std::collections::HashMap;
use uuid::Uuid;

/// Hash-map backed store for tests. No persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    notices: HashMap<Uuid, Notice>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentStore for InMemoryStore {
    fn save_notice(&mut self, notice: &Notice) -> Result<()> {
        self.notices.insert(notice.metadata.id, notice.clone());
        Ok(())
    }

    fn get_notice(&self, id: &Uuid) -> Result<Notice> {
        self.notices
            .get(id)
            .cloned()
            .ok_or(NoticeboardError::NoticeNotFound(*id))
    }

    fn list_notices(&self) -> Result<Vec<Notice>> {
        Ok(self.notices.values().cloned().collect())
    }

    fn delete_notice(&mut self, id: &Uuid) -> Result<()> {
        self.notices
            .remove(id)
            .map(|_| ())
            .ok_or(NoticeboardError::NoticeNotFound(*id))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::{Duration, Utc};

    pub struct StoreFixture {
        pub store: InMemoryStore,
        age_days: i64,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                age_days: 0,
            }
        }

        /// Saves a notice and returns it. Each successive notice is created
        /// one day earlier than the previous, so insertion order is also
        /// newest-first query order.
        pub fn add_notice(&mut self, title: &str, body: &str, categories: &[&str]) -> Notice {
            let mut notice = Notice::new(title.to_string(), body.to_string());
            notice.metadata.categories = categories.iter().map(|s| s.to_string()).collect();
            notice.metadata.created_at = Utc::now() - Duration::days(self.age_days);
            self.age_days += 1;
            self.store.save_notice(&notice).unwrap();
            notice
        }

        pub fn with_notice(mut self, title: &str, body: &str, categories: &[&str]) -> Self {
            self.add_notice(title, body, categories);
            self
        }

        pub fn with_dated_notice(
            mut self,
            title: &str,
            date_from: &str,
            date_to: &str,
        ) -> Self {
            let mut notice = self.add_notice(title, "Dated content", &[]);
            notice.metadata.date_enabled = Some(true);
            notice.metadata.date_from = Some(date_from.to_string());
            notice.metadata.date_to = Some(date_to.to_string());
            self.store.save_notice(&notice).unwrap();
            self
        }

        pub fn with_ungated_notice(mut self, title: &str) -> Self {
            let mut notice = self.add_notice(title, "Always shown", &[]);
            notice.metadata.date_enabled = Some(false);
            self.store.save_notice(&notice).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::query::NoticeQuery;

    #[test]
    fn test_delete_not_found() {
        let mut store = InMemoryStore::new();
        let id = Uuid::new_v4();
        match store.delete_notice(&id) {
            Err(NoticeboardError::NoticeNotFound(err_id)) => assert_eq!(err_id, id),
            _ => panic!("Expected NoticeNotFound"),
        }
    }

    #[test]
    fn test_save_overwrites_existing() {
        let mut store = InMemoryStore::new();
        let mut notice = Notice::new("First".into(), "v1".into());
        store.save_notice(&notice).unwrap();
        notice.body_text = "v2".into();
        store.save_notice(&notice).unwrap();

        let loaded = store.get_notice(&notice.metadata.id).unwrap();
        assert_eq!(loaded.body_text, "v2");
        assert_eq!(store.list_notices().unwrap().len(), 1);
    }

    #[test]
    fn test_default_query_orders_newest_first() {
        let fixture = StoreFixture::default()
            .with_notice("Newest", "", &[])
            .with_notice("Older", "", &[])
            .with_notice("Oldest", "", &[]);

        let result = fixture.store.query(&NoticeQuery::default()).unwrap();
        let titles: Vec<_> = result.iter().map(|n| n.metadata.title.as_str()).collect();
        assert_eq!(titles, vec!["Newest", "Older", "Oldest"]);
    }

    #[test]
    fn test_query_applies_category_filter() {
        let fixture = StoreFixture::default()
            .with_notice("A", "", &["events"])
            .with_notice("B", "", &["news"]);

        let result = fixture
            .store
            .query(&NoticeQuery::default().with_category("news"))
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].metadata.title, "B");
    }
}
