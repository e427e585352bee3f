//! Where created loans end up.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Document must be a JSON object")]
    InvalidDocument,

    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A document store keyed by collection.
#[async_trait]
pub trait LoanRepository: Send + Sync {
    /// Save `document` in `collection` and return its generated id
    /// (`<collection>/<n>`).
    async fn store(&self, collection: &str, document: Value) -> Result<String, RepositoryError>;
}

/// Tag a document with its collection and id, the way it is persisted.
fn with_metadata(mut document: Value, collection: &str, id: &str) -> Result<Value, RepositoryError> {
    let object = document
        .as_object_mut()
        .ok_or(RepositoryError::InvalidDocument)?;
    object.insert(
        "@metadata".to_string(),
        json!({ "@collection": collection, "@id": id }),
    );
    Ok(document)
}

#[derive(Default)]
struct Collections {
    next_ids: HashMap<String, u64>,
    documents: HashMap<String, Value>,
}

/// Process-local store; contents vanish on restart.
#[derive(Default)]
pub struct InMemoryRepository {
    inner: RwLock<Collections>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<Value> {
        self.inner.read().documents.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl LoanRepository for InMemoryRepository {
    async fn store(&self, collection: &str, document: Value) -> Result<String, RepositoryError> {
        if !document.is_object() {
            return Err(RepositoryError::InvalidDocument);
        }
        let mut inner = self.inner.write();
        let next = inner.next_ids.entry(collection.to_string()).or_insert(0);
        *next += 1;
        let id = format!("{}/{}", collection, next);
        let document = with_metadata(document, collection, &id)?;
        inner.documents.insert(id.clone(), document);
        Ok(id)
    }
}

/// One pretty-printed JSON file per document: `<dir>/<collection>-<n>.json`.
pub struct FileRepository {
    dir: PathBuf,
    next_ids: tokio::sync::Mutex<HashMap<String, u64>>,
}

impl FileRepository {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            next_ids: tokio::sync::Mutex::new(HashMap::new()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `id`.
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", id.replace('/', "-")))
    }

    /// Highest number already used in `collection`, so ids survive restarts.
    async fn highest_on_disk(&self, collection: &str) -> Result<u64, RepositoryError> {
        let prefix = format!("{}-", collection);
        let mut highest = 0;
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some(n) = name
                .to_str()
                .and_then(|n| n.strip_prefix(&prefix))
                .and_then(|n| n.strip_suffix(".json"))
                .and_then(|n| n.parse::<u64>().ok())
            else {
                continue;
            };
            highest = highest.max(n);
        }
        Ok(highest)
    }
}

#[async_trait]
impl LoanRepository for FileRepository {
    async fn store(&self, collection: &str, document: Value) -> Result<String, RepositoryError> {
        if !document.is_object() {
            return Err(RepositoryError::InvalidDocument);
        }
        let mut next_ids = self.next_ids.lock().await;
        let current = match next_ids.get(collection) {
            Some(n) => *n,
            None => self.highest_on_disk(collection).await?,
        };
        let id = format!("{}/{}", collection, current + 1);
        let document = with_metadata(document, collection, &id)?;

        let bytes = serde_json::to_vec_pretty(&document)?;
        tokio::fs::write(self.path_for(&id), bytes).await?;

        next_ids.insert(collection.to_string(), current + 1);
        Ok(id)
    }
}
