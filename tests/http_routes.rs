mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use common::fresh_store;
use serde_json::{json, Value};
use sqlite_admin::{app, AdminPolicy, AppState};
use tower::ServiceExt;

const MAX_BODY: usize = 64 * 1024;

fn router(store: &sqlite_admin::Store) -> Router {
    app(
        AppState {
            store: store.clone(),
            policy: AdminPolicy::default(),
        },
        MAX_BODY,
    )
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            let text = v.to_string();
            builder = builder
                .header("content-type", "application/json")
                .header("content-length", text.len());
            Body::from(text)
        }
        None => Body::empty(),
    };
    let resp = app
        .clone()
        .oneshot(builder.body(body).expect("failed to build request"))
        .await
        .expect("request failed");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn create_and_list_users() {
    let db = fresh_store().await;
    let app = router(&db.store);

    let (status, body) = send(&app, "POST", "/users", Some(json!({"username": "ada", "email": "ada@example.com"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User created successfully!");

    let (status, body) = send(&app, "GET", "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["users"], json!([{"id": 1, "username": "ada", "email": "ada@example.com"}]));
}

#[tokio::test]
async fn table_data_returns_schema_and_rows() {
    let db = fresh_store().await;
    let app = router(&db.store);
    send(&app, "POST", "/add_record/user", Some(json!({"username": "ada", "email": "ada@example.com"}))).await;

    let (status, body) = send(&app, "GET", "/table_data/user", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["schema"][1]["name"], "username");
    assert_eq!(body["schema"][1]["notnull"], true);
    assert_eq!(body["schema"][1]["unique"], true);
    assert_eq!(body["schema"][0]["pk"], 1);
    assert_eq!(body["data"][0]["email"], "ada@example.com");

    let (status, body) = send(&app, "GET", "/table_data/ghost", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "database_error");
    assert_eq!(body["error"]["message"], "no such table: ghost");
}

#[tokio::test]
async fn add_record_maps_errors_to_statuses() {
    let db = fresh_store().await;
    let app = router(&db.store);

    let (status, body) = send(&app, "POST", "/add_record/user", Some(json!({"username": "ada"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "validation_error");

    let (status, body) = send(&app, "POST", "/add_record/orders", Some(json!({"item": "book"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "unsupported_table");

    let (status, _) = send(&app, "POST", "/add_record/user", Some(json!({"username": "ada", "email": "a@x"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = send(&app, "POST", "/add_record/user", Some(json!({"username": "ada", "email": "b@x"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "database_error");

    let (status, body) = send(&app, "POST", "/add_record/user", Some(json!(["not", "an", "object"]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn delete_record_by_id() {
    let db = fresh_store().await;
    let app = router(&db.store);
    send(&app, "POST", "/users", Some(json!({"username": "ada", "email": "ada@example.com"}))).await;

    let (status, body) = send(&app, "DELETE", "/delete_record/user", Some(json!({"id": 42}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");

    let (status, body) = send(&app, "DELETE", "/delete_record/user", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "No record ID provided");

    let (status, body) = send(&app, "DELETE", "/delete_record/user", Some(json!({"id": 1}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = send(&app, "GET", "/users", None).await;
    assert_eq!(body["users"], json!([]));
}

#[tokio::test]
async fn execute_script_reports_results_and_errors() {
    let db = fresh_store().await;
    let app = router(&db.store);

    let (status, body) = send(&app, "POST", "/execute_script", Some(json!({"script": "SELECT 1 as x"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "results": [{"x": 1}]}));

    let (status, body) = send(&app, "POST", "/execute_script", Some(json!({"script": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "No script provided");

    let (status, body) = send(&app, "POST", "/execute_script", Some(json!({"script": "nonsense"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "database_error");
}

#[tokio::test]
async fn pages_and_probes_respond() {
    let db = fresh_store().await;
    let app = router(&db.store);

    let (status, body) = send(&app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");

    let (status, body) = send(&app, "GET", "/tables", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["tables"].as_array().unwrap().contains(&json!("user")));

    let resp = app
        .clone()
        .oneshot(Request::get("/table_manager").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(std::str::from_utf8(&html).unwrap().contains("/table_data/user"));
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let db = fresh_store().await;
    let app = router(&db.store);
    let script = format!("SELECT '{}'", "a".repeat(MAX_BODY));
    let (status, _) = send(&app, "POST", "/execute_script", Some(json!({"script": script}))).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}
