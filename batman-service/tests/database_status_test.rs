mod common;

use axum::http::StatusCode;
use batman_service::services::Database;
use common::{get, memory_database, post_empty, router_with, send, unavailable_database};

#[tokio::test]
async fn reports_working_store_and_collections() {
    let app = router_with(memory_database());
    send(&app, post_empty("/api/seed/gadgets")).await;
    send(&app, post_empty("/api/seed/batmobiles")).await;

    let (status, body) = send(&app, get("/test")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["collections"], serde_json::json!(["batmobile", "gadget"]));
    // Test configuration names a database but no URL
    assert_eq!(body["database_name"], "✅ Set");
    assert_eq!(body["database_url"], "❌ Not Set");
}

#[tokio::test]
async fn unreachable_store_is_reported_in_body_not_status() {
    let app = router_with(unavailable_database());

    let (status, body) = send(&app, get("/test")).await;

    assert_eq!(status, StatusCode::OK);
    let database = body["database"].as_str().unwrap();
    assert!(database.starts_with("⚠️  Connected but Error: "), "{}", database);
    let detail = database.trim_start_matches("⚠️  Connected but Error: ");
    assert!(detail.chars().count() <= 50);
    assert_eq!(body["collections"], serde_json::json!([]));
}

#[tokio::test]
async fn missing_store_is_reported_in_body_not_status() {
    let app = router_with(Database::unconfigured());

    let (status, body) = send(&app, get("/test")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "⚠️  Available but not initialized");
    assert_eq!(body["connection_status"], "Not Connected");
}
