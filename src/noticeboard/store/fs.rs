use super::ContentStore;
use crate::error::{NoticeboardError, Result};
use crate::model::{Notice, NoticeMetadata};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const DATA_FILENAME: &str = "data.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn body_path(&self, id: &Uuid) -> PathBuf {
        self.root.join(format!("notice-{}.txt", id))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NoticeboardError::Io)?;
        }
        Ok(())
    }

    fn load_metadata(&self) -> Result<HashMap<Uuid, NoticeMetadata>> {
        let data_file = self.root.join(DATA_FILENAME);
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(data_file).map_err(NoticeboardError::Io)?;
        let meta: HashMap<Uuid, NoticeMetadata> =
            serde_json::from_str(&content).map_err(NoticeboardError::Serialization)?;
        Ok(meta)
    }

    fn save_metadata(&self, meta: &HashMap<Uuid, NoticeMetadata>) -> Result<()> {
        let data_file = self.root.join(DATA_FILENAME);
        let content =
            serde_json::to_string_pretty(meta).map_err(NoticeboardError::Serialization)?;
        fs::write(data_file, content).map_err(NoticeboardError::Io)?;
        Ok(())
    }
}

impl ContentStore for FileStore {
    fn save_notice(&mut self, notice: &Notice) -> Result<()> {
        self.ensure_root()?;

        // 1. Update metadata index
        let mut meta_map = self.load_metadata()?;
        meta_map.insert(notice.metadata.id, notice.metadata.clone());
        self.save_metadata(&meta_map)?;

        // 2. Write body file
        fs::write(self.body_path(&notice.metadata.id), &notice.body_text)
            .map_err(NoticeboardError::Io)?;

        Ok(())
    }

    fn get_notice(&self, id: &Uuid) -> Result<Notice> {
        let meta_map = self.load_metadata()?;
        let metadata = meta_map
            .get(id)
            .ok_or(NoticeboardError::NoticeNotFound(*id))?
            .clone();

        // A missing body file degrades to an empty body rather than failing
        // the whole read.
        let body_text = fs::read_to_string(self.body_path(id)).unwrap_or_default();

        Ok(Notice {
            metadata,
            body_text,
        })
    }

    fn list_notices(&self) -> Result<Vec<Notice>> {
        let meta_map = self.load_metadata()?;
        let mut notices = Vec::with_capacity(meta_map.len());
        for (id, metadata) in meta_map {
            let body_text = fs::read_to_string(self.body_path(&id)).unwrap_or_default();
            notices.push(Notice {
                metadata,
                body_text,
            });
        }
        Ok(notices)
    }

    fn delete_notice(&mut self, id: &Uuid) -> Result<()> {
        let mut meta_map = self.load_metadata()?;
        if meta_map.remove(id).is_none() {
            return Err(NoticeboardError::NoticeNotFound(*id));
        }
        self.save_metadata(&meta_map)?;

        let body = self.body_path(id);
        if body.exists() {
            fs::remove_file(body).map_err(NoticeboardError::Io)?;
        }
        Ok(())
    }
}
