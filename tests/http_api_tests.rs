//! End-to-end tests over the HTTP surface

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use grievance_portal::build_router;
use grievance_portal::state::AppState;
use grievance_portal::store::{GrievanceStore, JsonFileStore, MemoryStore};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

fn app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let router = build_router(AppState::new(store.clone()), "public");
    (router, store)
}

async fn dispatch(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("response expected");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");

    (
        status,
        String::from_utf8(body.to_vec()).expect("body should be UTF-8"),
    )
}

async fn send_form(app: &Router, uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request should build");

    dispatch(app, request).await
}

async fn send_json(app: &Router, uri: &str, payload: Value) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request should build");

    dispatch(app, request).await
}

async fn send_empty(app: &Router, method: Method, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");

    dispatch(app, request).await
}

#[tokio::test]
async fn submit_saves_record_and_confirms() {
    let (app, store) = app();

    let (status, body) = send_form(
        &app,
        "/submit-grievance",
        "title=Leaky+faucet&complaint=Drips+all+night&mood=tired&date=2024-01-15",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Grievance submitted and saved successfully.");

    let records = store.list_all().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Leaky faucet");
    assert_eq!(records[0].complaint, "Drips all night");
    assert_eq!(records[0].mood, "tired");
    assert_eq!(records[0].date, "2024-01-15");
}

#[tokio::test]
async fn admin_page_lists_newest_first() {
    let (app, _store) = app();

    send_form(
        &app,
        "/submit-grievance",
        "title=older+gripe&complaint=c&mood=m&date=2024-01-01",
    )
    .await;
    send_form(
        &app,
        "/submit-grievance",
        "title=newer+gripe&complaint=c&mood=m&date=2024-06-01",
    )
    .await;

    let (status, page) = send_empty(&app, Method::GET, "/admin/grievances").await;

    assert_eq!(status, StatusCode::OK);
    let newer = page.find("newer gripe").expect("newer record should render");
    let older = page.find("older gripe").expect("older record should render");
    assert!(newer < older);
}

#[tokio::test]
async fn admin_page_escapes_user_input() {
    let (app, _store) = app();

    send_form(
        &app,
        "/submit-grievance",
        "title=%3Cscript%3Ealert(1)%3C%2Fscript%3E&complaint=c&mood=m&date=2024-01-01",
    )
    .await;

    let (status, page) = send_empty(&app, Method::GET, "/admin/grievances").await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!page.contains("<script>alert(1)</script>"));
}

#[tokio::test]
async fn delete_removes_record_then_404s_on_repeat() {
    let (app, store) = app();

    send_form(
        &app,
        "/submit-grievance",
        "title=t&complaint=c&mood=m&date=2024-01-01",
    )
    .await;
    let id = store.list_all().await.unwrap()[0].id;

    let (status, body) = send_json(&app, "/admin/delete-grievance", json!({ "id": id })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Grievance deleted successfully.");
    assert!(store.list_all().await.unwrap().is_empty());

    let (status, body) = send_json(&app, "/admin/delete-grievance", json!({ "id": id })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Grievance not found.");
}

#[tokio::test]
async fn delete_with_malformed_body_is_rejected() {
    let (app, _store) = app();

    let (status, _body) = send_json(
        &app,
        "/admin/delete-grievance",
        json!({ "id": "not-a-number" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn clear_all_empties_the_admin_page() {
    let (app, store) = app();

    for date in ["2024-01-01", "2024-01-02"] {
        send_form(
            &app,
            "/submit-grievance",
            &format!("title=t&complaint=c&mood=m&date={date}"),
        )
        .await;
    }
    assert_eq!(store.list_all().await.unwrap().len(), 2);

    let (status, body) = send_empty(&app, Method::POST, "/admin/clear-all-grievances").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "All grievances cleared successfully.");

    let (status, page) = send_empty(&app, Method::GET, "/admin/grievances").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("No grievances submitted yet."));
}

#[tokio::test]
async fn healthcheck_is_available() {
    let (app, _store) = app();

    let (status, body) = send_empty(&app, Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let parsed: Value = serde_json::from_str(&body).expect("health body should be JSON");
    assert_eq!(parsed["status"], "ok");
}

#[tokio::test]
async fn corrupt_store_surfaces_as_500() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("grievances.json");
    std::fs::write(&path, b"{ not json").unwrap();

    let store = Arc::new(JsonFileStore::new(&path));
    let app = build_router(AppState::new(store), "public");

    let (status, body) = send_empty(&app, Method::GET, "/admin/grievances").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Error processing grievance data.");

    let (status, _body) = send_form(
        &app,
        "/submit-grievance",
        "title=t&complaint=c&mood=m&date=2024-01-01",
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn submission_form_is_served_from_public_dir() {
    let (app, _store) = app();

    let (status, page) = send_empty(&app, Method::GET, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("/submit-grievance"));
}
