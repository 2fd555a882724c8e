use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::domain::document::Document;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("data file does not hold a valid document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Whole-document persistence. There are no partial reads or writes; every
/// operation moves the complete document.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Reads the whole document. A missing backing file yields an empty
    /// document; callers wanting seed content must write it explicitly.
    async fn load(&self) -> Result<Document, StoreError>;

    /// Serializes the whole document and overwrites the backing file.
    /// The previous contents are gone once the write starts; a failure
    /// mid-write can leave the file truncated.
    async fn save(&self, document: &Document) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self) -> Result<Document, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Document::default()),
            Err(e) => return Err(StoreError::Io(e)),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn save(&self, document: &Document) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(document)?;
        tokio::fs::write(&self.path, bytes).await?;
        debug!(path = %self.path.display(), "document saved");
        Ok(())
    }
}

/// In-memory substitute for service tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    document: std::sync::Mutex<Document>,
}

#[cfg(test)]
#[async_trait]
impl DocumentStore for MemoryStore {
    async fn load(&self) -> Result<Document, StoreError> {
        Ok(self.document.lock().unwrap().clone())
    }

    async fn save(&self, document: &Document) -> Result<(), StoreError> {
        *self.document.lock().unwrap() = document.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::Contact;
    use crate::domain::post::Post;

    fn file_store(dir: &tempfile::TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("data.json"))
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let document = file_store(&dir).load().await.unwrap();
        assert!(document.posts.is_empty());
        assert!(document.contacts.is_empty());
    }

    #[tokio::test]
    async fn round_trips_an_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = file_store(&dir);
        store.save(&Document::default()).await.unwrap();
        let loaded = store.load().await.unwrap();
        assert!(loaded.posts.is_empty());
        assert!(loaded.contacts.is_empty());
    }

    #[tokio::test]
    async fn round_trips_one_entry_per_collection() {
        let dir = tempfile::tempdir().unwrap();
        let store = file_store(&dir);

        let mut document = Document::default();
        document.posts.push(Post::new(
            1,
            "Hello".into(),
            "First entry".into(),
            "Ann".into(),
        ));
        document.contacts.push(Contact::new(
            1,
            "Ben".into(),
            "ben@example.com".into(),
            "Hi there".into(),
        ));
        store.save(&document).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.posts.len(), 1);
        assert_eq!(loaded.posts[0].id, document.posts[0].id);
        assert_eq!(loaded.posts[0].title, document.posts[0].title);
        assert_eq!(loaded.posts[0].content, document.posts[0].content);
        assert_eq!(loaded.posts[0].author, document.posts[0].author);
        assert_eq!(loaded.posts[0].timestamp, document.posts[0].timestamp);
        assert_eq!(loaded.contacts.len(), 1);
        assert_eq!(loaded.contacts[0].name, document.contacts[0].name);
        assert_eq!(loaded.contacts[0].email, document.contacts[0].email);
        assert_eq!(loaded.contacts[0].message, document.contacts[0].message);
        assert_eq!(loaded.contacts[0].timestamp, document.contacts[0].timestamp);
    }

    #[tokio::test]
    async fn round_trips_special_characters() {
        let dir = tempfile::tempdir().unwrap();
        let store = file_store(&dir);

        let mut document = Document::default();
        document.posts.push(Post::new(
            1,
            "\"Quoted\" ünïcode".into(),
            "line one\nline two\n\ttabbed".into(),
            "Zoë 日本語".into(),
        ));
        store.save(&document).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.posts[0].title, document.posts[0].title);
        assert_eq!(loaded.posts[0].content, document.posts[0].content);
        assert_eq!(loaded.posts[0].author, document.posts[0].author);
    }

    #[tokio::test]
    async fn save_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = file_store(&dir);

        let mut document = Document::default();
        document.posts.push(Post::new(1, "a".into(), "b".into(), "c".into()));
        store.save(&document).await.unwrap();
        store.save(&Document::default()).await.unwrap();

        assert!(store.load().await.unwrap().posts.is_empty());
    }

    #[tokio::test]
    async fn malformed_file_fails_to_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let err = JsonFileStore::new(path).load().await.unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }

    #[tokio::test]
    async fn document_missing_a_collection_fails_to_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, br#"{ "posts": [] }"#).unwrap();

        let err = JsonFileStore::new(path).load().await.unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }
}
