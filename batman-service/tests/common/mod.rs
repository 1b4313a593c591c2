#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use batman_service::config::{BatmanConfig, DatabaseConfig, StoreBackend};
use batman_service::services::{Database, InMemoryStore};
use batman_service::startup::{build_router, AppState, Application};
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_DATABASE: &str = "batman_test";

pub fn test_config() -> BatmanConfig {
    BatmanConfig {
        common: CoreConfig { port: 0 }, // Random port for testing
        database: DatabaseConfig {
            backend: StoreBackend::Memory,
            url: None,
            name: Some(TEST_DATABASE.to_string()),
        },
    }
}

pub fn memory_database() -> Database {
    Database::new(Arc::new(InMemoryStore::new(TEST_DATABASE, true)))
}

/// A store that fails every call, standing in for an unreachable server.
pub fn unavailable_database() -> Database {
    Database::new(Arc::new(InMemoryStore::new(TEST_DATABASE, false)))
}

pub fn router_with(db: Database) -> Router {
    build_router(AppState {
        config: test_config(),
        db,
    })
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: Database,
}

impl TestApp {
    /// Spawn the full HTTP server on a random port with an in-memory store.
    pub async fn spawn() -> Self {
        Self::spawn_with(memory_database()).await
    }

    pub async fn spawn_with(db: Database) -> Self {
        let app = Application::build_with_database(test_config(), db)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling the root endpoint
        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(&address).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port, db }
    }
}
