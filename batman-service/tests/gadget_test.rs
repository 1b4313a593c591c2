mod common;

use axum::http::StatusCode;
use common::{get, memory_database, post_json, router_with, send, TestApp};
use serde_json::json;

fn batarang() -> serde_json::Value {
    json!({
        "name": "Batarang",
        "category": "Offensive",
        "description": "Bat-shaped throwing weapon.",
        "first_appearance": "Detective Comics #31",
        "image_url": "http://example.com/batarang.jpg"
    })
}

#[tokio::test]
async fn create_then_list_gadget() {
    let app = router_with(memory_database());

    let (status, created) = send(&app, post_json("/api/gadgets", &batarang())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["ok"], true);

    let (status, listed) = send(&app, get("/api/gadgets")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([batarang()]));
}

#[tokio::test]
async fn gadget_without_category_is_rejected_and_not_stored() {
    let app = router_with(memory_database());

    let (status, body) = send(
        &app,
        post_json(
            "/api/gadgets",
            &json!({ "name": "Batarang", "description": "Throwing weapon" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["details"].as_str().unwrap().contains("category"));

    let (_, listed) = send(&app, get("/api/gadgets")).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn gadget_with_malformed_image_url_is_rejected() {
    let app = router_with(memory_database());

    let mut body = batarang();
    body["image_url"] = json!("not-a-url");
    let (status, _) = send(&app, post_json("/api/gadgets", &body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn gadget_with_non_http_image_url_is_rejected() {
    let app = router_with(memory_database());

    for url in ["ftp://example.com/batarang.jpg", "javascript:alert(1)"] {
        let mut body = batarang();
        body["image_url"] = json!(url);
        let (status, error) = send(&app, post_json("/api/gadgets", &body)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", url);
        assert_eq!(error["error"], "Validation error");
    }

    let (_, listed) = send(&app, get("/api/gadgets")).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn gadget_collection_is_separate_from_batmobiles() {
    let app = router_with(memory_database());

    send(&app, post_json("/api/gadgets", &batarang())).await;

    let (_, batmobiles) = send(&app, get("/api/batmobiles")).await;
    assert!(batmobiles.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn gadgets_round_trip_over_http() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/gadgets", app.address))
        .json(&batarang())
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let response = client
        .get(format!("{}/api/gadgets?limit=1", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    let listed: Vec<serde_json::Value> = response.json().await.expect("Failed to parse JSON");
    assert_eq!(listed, vec![batarang()]);
}
