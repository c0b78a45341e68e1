//! End-to-end tests for the item endpoints, driven through the full router.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use itemctl_server::db::create_memory_pool;
use itemctl_server::{build_router, create_pool, ensure_schema, AppState, ServerConfig};

async fn test_app() -> Router {
    let pool = create_memory_pool().await.expect("pool creation failed");
    ensure_schema(&pool).await.expect("schema creation failed");
    build_router(AppState::new(pool), &ServerConfig::default())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test]
async fn create_returns_generated_id() {
    let app = test_app().await;

    let (status, item) = send(
        &app,
        "POST",
        "/items/",
        Some(json!({"name": "Widget", "price": 9.99})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(item["id"].as_i64().is_some());
    assert_eq!(item["name"], "Widget");
    assert_eq!(item["price"], 9.99);
    assert!(item["description"].is_null());
}

#[tokio::test]
async fn list_and_get_after_two_creates() {
    let app = test_app().await;

    let (_, first) = send(
        &app,
        "POST",
        "/items/",
        Some(json!({"name": "Widget", "price": 9.99})),
    )
    .await;
    let (_, second) = send(
        &app,
        "POST",
        "/items/",
        Some(json!({"name": "Gadget", "description": "blue", "price": 3.5})),
    )
    .await;

    let (status, list) = send(&app, "GET", "/items/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([first.clone(), second.clone()]));

    for item in [&first, &second] {
        let uri = format!("/items/{}", item["id"]);
        let (status, fetched) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&fetched, item);
    }
}

#[tokio::test]
async fn collection_without_trailing_slash() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/items",
        Some(json!({"name": "Widget", "price": 1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, list) = send(&app, "GET", "/items", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn get_missing_is_404() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/items/9999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "item '9999' not found");
}

#[tokio::test]
async fn non_integer_id_is_400() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/items/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn update_overwrites_and_keeps_id() {
    let app = test_app().await;
    let (_, created) = send(
        &app,
        "POST",
        "/items/",
        Some(json!({"name": "Widget", "description": "old", "price": 9.99})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/items/{id}"),
        Some(json!({"id": id + 100, "name": "Widget Pro", "description": null, "price": 12.0})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({"id": id, "name": "Widget Pro", "description": null, "price": 12.0})
    );

    let (status, _) = send(&app, "GET", &format!("/items/{}", id + 100), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_missing_is_404_without_mutation() {
    let app = test_app().await;
    let (_, existing) = send(
        &app,
        "POST",
        "/items/",
        Some(json!({"name": "Widget", "price": 9.99})),
    )
    .await;

    let (status, _) = send(
        &app,
        "PUT",
        "/items/9999",
        Some(json!({"name": "Ghost", "price": 0.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, "GET", "/items/", None).await;
    assert_eq!(list, json!([existing]));
}

#[tokio::test]
async fn delete_returns_row_then_404() {
    let app = test_app().await;
    let (_, created) = send(
        &app,
        "POST",
        "/items/",
        Some(json!({"name": "Widget", "price": 9.99})),
    )
    .await;
    let uri = format!("/items/{}", created["id"]);

    let (status, deleted) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, created);

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn identical_update_is_idempotent() {
    let app = test_app().await;
    let payload = json!({"name": "Widget", "description": "same", "price": 4.25});

    let (_, created) = send(&app, "POST", "/items/", Some(payload.clone())).await;
    let uri = format!("/items/{}", created["id"]);

    let (_, before) = send(&app, "GET", &uri, None).await;
    let (status, _) = send(&app, "PUT", &uri, Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    let (_, after) = send(&app, "GET", &uri, None).await;

    assert_eq!(before, created);
    assert_eq!(after, before);
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let app = test_app().await;

    let (status, _) = send(&app, "POST", "/items/", Some(json!({"name": "Widget"}))).await;
    assert!(status.is_client_error());

    let (_, list) = send(&app, "GET", "/items/", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn file_database_persists_across_pools() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("development.db").display());

    let created = {
        let pool = create_pool(&url).await.unwrap();
        assert!(ensure_schema(&pool).await.unwrap());
        let app = build_router(AppState::new(pool.clone()), &ServerConfig::default());
        let (_, created) = send(
            &app,
            "POST",
            "/items/",
            Some(json!({"name": "Widget", "price": 9.99})),
        )
        .await;
        pool.close().await;
        created
    };

    let pool = create_pool(&url).await.unwrap();
    assert!(!ensure_schema(&pool).await.unwrap());
    let app = build_router(AppState::new(pool), &ServerConfig::default());

    let (status, fetched) = send(&app, "GET", &format!("/items/{}", created["id"]), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn out_of_range_and_negative_ids() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/items/99999999999999999999", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (status, _) = send(&app, "GET", "/items/-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn string_price_is_rejected() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/items/",
        Some(json!({"name": "Widget", "price": "cheap"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn health_reports_database() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");
}
