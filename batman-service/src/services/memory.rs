use crate::services::database::DocumentStore;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use service_core::error::AppError;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Process-local [`DocumentStore`] for tests and database-less local runs.
///
/// Collections keep insertion order. When constructed with `available = false`
/// every call fails like an unreachable server would.
pub struct InMemoryStore {
    name: String,
    available: bool,
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
    insert_count: AtomicU64,
}

impl InMemoryStore {
    pub fn new(name: impl Into<String>, available: bool) -> Self {
        Self {
            name: name.into(),
            available,
            collections: RwLock::new(BTreeMap::new()),
            insert_count: AtomicU64::new(0),
        }
    }

    pub fn insert_count(&self) -> u64 {
        self.insert_count.load(Ordering::SeqCst)
    }

    fn ensure_available(&self) -> Result<(), AppError> {
        if self.available {
            Ok(())
        } else {
            Err(AppError::database(format!(
                "in-memory store '{}' is unavailable",
                self.name
            )))
        }
    }
}

fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn insert_one(&self, collection: &str, mut document: Document) -> Result<String, AppError> {
        self.ensure_available()?;

        let id = ObjectId::new();
        document.insert("_id", id);

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);
        self.insert_count.fetch_add(1, Ordering::SeqCst);

        Ok(id.to_hex())
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError> {
        self.ensure_available()?;

        let limit = limit
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(usize::MAX);

        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| matches_filter(document, &filter))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.ensure_available()?;
        Ok(self.collections.read().await.keys().cloned().collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.ensure_available()
    }

    async fn close(&self) {
        tracing::debug!(database = %self.name, "Closing in-memory store");
    }
}
