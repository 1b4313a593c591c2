use crate::config::{DatabaseConfig, StoreBackend};
use crate::services::InMemoryStore;
use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use metrics::counter;
use mongodb::{
    bson::{doc, Bson, DateTime as BsonDateTime, Document},
    options::FindOptions,
    Client as MongoClient, Database as MongoDatabase,
};
use serde::{de::DeserializeOwned, Serialize};
use service_core::error::AppError;
use std::sync::Arc;

/// Name used for the in-memory backend when `DATABASE_NAME` is unset.
pub const DEFAULT_MEMORY_DATABASE: &str = "batman";

/// Schemaless backend with named collections and store-assigned identifiers.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Database name this store writes into.
    fn name(&self) -> &str;

    /// Inserts one document and returns the identifier the store assigned to it.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<String, AppError>;

    /// Returns documents matching `filter` in store order, at most `limit` of them.
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;

    async fn ping(&self) -> Result<(), AppError>;

    async fn close(&self);
}

/// MongoDB-backed [`DocumentStore`].
#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: MongoDatabase,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn name(&self) -> &str {
        self.db.name()
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<String, AppError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(document, None)
            .await?;

        Ok(match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        })
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError> {
        let find_options = FindOptions::builder().limit(limit).build();

        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter, find_options)
            .await?;

        Ok(cursor.try_collect::<Vec<Document>>().await?)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self.db.list_collection_names(None).await?)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn close(&self) {
        tracing::info!("Closing MongoDB client");
        self.client.clone().shutdown().await;
    }
}

/// Outcome of a best-effort bulk insert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub inserted: u64,
    pub skipped: u64,
}

/// Process-wide handle to the document store.
///
/// Holds no store when the connection settings were absent at startup; every
/// operation then fails with a database error instead of panicking.
#[derive(Clone)]
pub struct Database {
    store: Option<Arc<dyn DocumentStore>>,
}

impl Database {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store: Some(store) }
    }

    pub fn unconfigured() -> Self {
        Self { store: None }
    }

    /// Builds the handle from configuration. Connection problems are logged and
    /// leave the handle unconfigured so the process can still serve requests.
    pub async fn from_config(config: &DatabaseConfig) -> Self {
        match config.backend {
            StoreBackend::Memory => {
                let name = config.name.as_deref().unwrap_or(DEFAULT_MEMORY_DATABASE);
                tracing::warn!(database = %name, "Using in-memory document store; data is not persisted");
                Self::new(Arc::new(InMemoryStore::new(name, true)))
            }
            StoreBackend::MongoDb => match (config.url.as_deref(), config.name.as_deref()) {
                (Some(uri), Some(name)) => match MongoStore::connect(uri, name).await {
                    Ok(store) => Self::new(Arc::new(store)),
                    Err(e) => {
                        tracing::error!("Database unavailable, continuing without it: {}", e);
                        Self::unconfigured()
                    }
                },
                _ => {
                    tracing::warn!(
                        "DATABASE_URL or DATABASE_NAME not set; database endpoints will report errors"
                    );
                    Self::unconfigured()
                }
            },
        }
    }

    pub fn is_configured(&self) -> bool {
        self.store.is_some()
    }

    pub fn name(&self) -> Option<&str> {
        self.store.as_ref().map(|store| store.name())
    }

    fn store(&self) -> Result<&Arc<dyn DocumentStore>, AppError> {
        self.store
            .as_ref()
            .ok_or_else(|| AppError::database("Database not configured"))
    }

    /// Serializes `record`, stamps `created_at`/`updated_at`, inserts it into
    /// `collection` and returns the new identifier. Not idempotent.
    pub async fn create_document<T>(&self, collection: &str, record: &T) -> Result<String, AppError>
    where
        T: Serialize + ?Sized,
    {
        let store = self.store()?;

        let mut document = mongodb::bson::to_document(record)?;
        let now = BsonDateTime::from_chrono(Utc::now());
        document.insert("created_at", now);
        document.insert("updated_at", now);

        let id = store.insert_one(collection, document).await.map_err(|e| {
            tracing::error!(collection = %collection, "Failed to insert document: {}", e);
            e
        })?;

        counter!("records_inserted_total", "collection" => collection.to_string()).increment(1);
        tracing::debug!(collection = %collection, id = %id, "Document inserted");

        Ok(id)
    }

    /// Returns the raw documents in `collection` matching `filter`, in store
    /// order. A `limit` of `None` or `0` means no limit; negative limits cap at
    /// their absolute value.
    pub async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError> {
        let store = self.store()?;
        let limit = limit
            .filter(|n| *n != 0)
            .map(|n| n.checked_abs().unwrap_or(i64::MAX));

        store.find(collection, filter, limit).await.map_err(|e| {
            tracing::error!(collection = %collection, "Failed to read documents: {}", e);
            e
        })
    }

    /// Lists `collection` decoded into its public record type. Storage-only
    /// fields (`_id`, timestamps) are dropped by the decode.
    pub async fn get_records<T>(&self, collection: &str, limit: Option<i64>) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned,
    {
        self.get_documents(collection, Document::new(), limit)
            .await?
            .into_iter()
            .map(|document| mongodb::bson::from_document(document).map_err(AppError::from))
            .collect()
    }

    /// Inserts `records` one at a time. A failed insert is logged and counted
    /// as skipped; it never aborts the batch.
    pub async fn seed<T>(&self, collection: &str, records: &[T]) -> SeedOutcome
    where
        T: Serialize,
    {
        let mut outcome = SeedOutcome::default();

        for record in records {
            match self.create_document(collection, record).await {
                Ok(_) => outcome.inserted += 1,
                Err(e) => {
                    outcome.skipped += 1;
                    counter!("seed_skipped_total", "collection" => collection.to_string())
                        .increment(1);
                    tracing::warn!(collection = %collection, "Skipping seed record: {}", e);
                }
            }
        }

        tracing::info!(
            collection = %collection,
            inserted = outcome.inserted,
            skipped = outcome.skipped,
            "Seed finished"
        );

        outcome
    }

    pub async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.store()?.list_collection_names().await
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.store()?.ping().await
    }

    pub async fn close(&self) {
        if let Some(store) = &self.store {
            store.close().await;
        }
    }
}
