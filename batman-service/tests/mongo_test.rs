//! End-to-end tests against a real MongoDB.
//!
//! Run with a local server and `cargo test -- --ignored`.

use batman_service::config::{BatmanConfig, DatabaseConfig, StoreBackend};
use batman_service::services::{Database, DocumentStore, MongoStore};
use batman_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use uuid::Uuid;

fn mongo_uri() -> String {
    std::env::var("TEST_MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
}

fn unique_db_name() -> String {
    format!("batman_test_{}", Uuid::new_v4())
}

#[tokio::test]
#[ignore = "Requires MongoDB running on localhost:27017"]
async fn create_list_and_seed_against_mongodb() {
    let db_name = unique_db_name();
    let store = MongoStore::connect(&mongo_uri(), &db_name)
        .await
        .expect("Failed to connect to MongoDB");

    let config = BatmanConfig {
        common: CoreConfig { port: 0 },
        database: DatabaseConfig {
            backend: StoreBackend::MongoDb,
            url: Some(mongo_uri()),
            name: Some(db_name.clone()),
        },
    };
    let app = Application::build_with_database(config, Database::new(Arc::new(store.clone())))
        .await
        .expect("Failed to build application");
    let address = format!("http://127.0.0.1:{}", app.port());
    tokio::spawn(app.run_until_stopped());

    let client = reqwest::Client::new();

    let created: serde_json::Value = client
        .post(format!("{}/api/gadgets", address))
        .json(&serde_json::json!({
            "name": "Batclaw",
            "category": "Utility",
            "description": "Retractable claw."
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["id"].as_str().unwrap().len(), 24);

    let seeded: serde_json::Value = client
        .post(format!("{}/api/seed/batmobiles", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(seeded["inserted"], 27);

    let limited: Vec<serde_json::Value> = client
        .get(format!("{}/api/batmobiles?limit=3", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(limited.len(), 3);
    assert!(limited.iter().all(|r| r.get("_id").is_none()));

    let status: serde_json::Value = client
        .get(format!("{}/test", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(status["database"], "✅ Connected & Working");

    assert!(store.ping().await.is_ok());

    // Cleanup
    let _ = store.client().database(&db_name).drop(None).await;
}
