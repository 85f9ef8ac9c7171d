//! HTTP API tests - drive the full router against an in-memory SQLite store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use chaptersmith::infrastructure::http::{build_router, AppState};
use chaptersmith::infrastructure::memory::InMemoryProjectLocks;
use chaptersmith::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, DbPool, SqliteProjectRepository,
    SqliteStoreStatus,
};

async fn test_pool() -> DbPool {
    let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

fn app_with_pool(pool: DbPool) -> Router {
    let state = AppState::new(
        Arc::new(SqliteProjectRepository::new(pool.clone())),
        InMemoryProjectLocks::new().arc(),
        Arc::new(SqliteStoreStatus::new(pool, ":memory:")),
    );
    build_router(Arc::new(state))
}

async fn test_app() -> Router {
    app_with_pool(test_pool().await)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
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
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn create_project(app: &Router, body: Value) -> String {
    let (status, json) = send(app, Method::POST, "/api/projects", Some(body)).await;
    assert_eq!(status, StatusCode::OK, "{json}");
    json["data"]["id"].as_str().unwrap().to_string()
}

fn words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[tokio::test]
async fn root_reports_liveness() {
    let app = test_app().await;
    let (status, json) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["errno"], 0);
    assert_eq!(json["error"], "");
    assert!(json["data"]["message"].as_str().unwrap().contains("running"));
}

#[tokio::test]
async fn store_status_lists_tables() {
    let app = test_app().await;
    let (status, json) = send(&app, Method::GET, "/test", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["connection_status"], "Connected");
    assert_eq!(json["data"]["collections"], json!(["chapters", "projects"]));
}

#[tokio::test]
async fn store_status_reports_failure_in_body() {
    let pool = test_pool().await;
    let app = app_with_pool(pool.clone());
    pool.close().await;

    let (status, json) = send(&app, Method::GET, "/test", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["connection_status"], "Not Connected");
    assert!(json["data"]["error"].is_string());
}

#[tokio::test]
async fn dual_pov_scenario() {
    let app = test_app().await;
    let id = create_project(
        &app,
        json!({
            "name": "Contract Vows",
            "outline": "A meets B.\nThey argue.",
            "chapter_count": 3,
            "pov_mode": "dual"
        }),
    )
    .await;

    for (number, pov) in [(1, "female"), (2, "male")] {
        let (status, json) = send(
            &app,
            Method::POST,
            &format!("/api/projects/{id}/chapters/generate"),
            Some(json!({ "chapter_number": number })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{json}");
        assert_eq!(json["data"]["ok"], true);

        let chapter = &json["data"]["chapter"];
        assert_eq!(chapter["number"], number);
        assert_eq!(chapter["pov"], pov);
        assert_eq!(chapter["title"], format!("Chapter {number}"));

        let count = chapter["word_count"].as_u64().unwrap() as usize;
        assert!((1400..=1800).contains(&count));
        assert_eq!(words(chapter["text"].as_str().unwrap()), count);
    }

    let (status, json) = send(&app, Method::GET, &format!("/api/projects/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["genre"], "general");
    assert_eq!(json["data"]["pov_mode"], "dual");
    assert_eq!(json["data"]["chapters"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn create_keeps_explicit_null_genre_absent() {
    let app = test_app().await;
    let id = create_project(
        &app,
        json!({
            "name": "Untitled",
            "outline": "",
            "chapter_count": 3,
            "genre": null,
            "rules": "no cliffhangers"
        }),
    )
    .await;

    let (_, json) = send(&app, Method::GET, &format!("/api/projects/{id}"), None).await;
    assert!(json["data"]["genre"].is_null());
    assert_eq!(json["data"]["pov_mode"], "female");
    assert_eq!(json["data"]["rules"], "no cliffhangers");
}

#[tokio::test]
async fn create_rejects_bad_chapter_count() {
    let app = test_app().await;
    let (status, json) = send(
        &app,
        Method::POST,
        "/api/projects",
        Some(json!({ "name": "n", "outline": "o", "chapter_count": 9 })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["errno"], 422);
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn list_returns_created_projects() {
    let app = test_app().await;
    let a = create_project(&app, json!({ "name": "A", "outline": "x", "chapter_count": 3 })).await;
    let b = create_project(&app, json!({ "name": "B", "outline": "y", "chapter_count": 5 })).await;

    let (status, json) = send(&app, Method::GET, "/api/projects", None).await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&a.as_str()));
    assert!(ids.contains(&b.as_str()));
}

#[tokio::test]
async fn invalid_id_is_bad_request() {
    let app = test_app().await;

    let (status, json) = send(&app, Method::GET, "/api/projects/not-an-id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errno"], 400);

    let (status, _) = send(&app, Method::DELETE, "/api/projects/not-an-id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/projects/not-an-id/chapters/generate",
        Some(json!({ "chapter_number": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_project_is_not_found() {
    let app = test_app().await;
    let missing = uuid::Uuid::new_v4();

    let (status, json) = send(&app, Method::GET, &format!("/api/projects/{missing}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["errno"], 404);

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/projects/{missing}/chapters/generate_all"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_id_reports_not_deleted() {
    let app = test_app().await;
    let missing = uuid::Uuid::new_v4();

    let (status, json) = send(&app, Method::DELETE, &format!("/api/projects/{missing}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["deleted"], false);
}

#[tokio::test]
async fn delete_removes_project() {
    let app = test_app().await;
    let id = create_project(&app, json!({ "name": "A", "outline": "x", "chapter_count": 3 })).await;

    let (_, json) = send(&app, Method::DELETE, &format!("/api/projects/{id}"), None).await;
    assert_eq!(json["data"]["deleted"], true);

    let (status, _) = send(&app, Method::GET, &format!("/api/projects/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn generate_out_of_range_is_bad_request() {
    let app = test_app().await;
    let id = create_project(&app, json!({ "name": "A", "outline": "x", "chapter_count": 3 })).await;
    let uri = format!("/api/projects/{id}/chapters/generate");

    for number in [4, 0, -1] {
        let (status, json) =
            send(&app, Method::POST, &uri, Some(json!({ "chapter_number": number }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "chapter {number}");
        assert_eq!(json["errno"], 400);
    }
}

#[tokio::test]
async fn generate_all_replaces_chapters() {
    let app = test_app().await;
    let id = create_project(
        &app,
        json!({ "name": "Pack", "outline": "- Moon\n- Bond", "chapter_count": 4, "genre": "werewolf" }),
    )
    .await;

    let (status, json) = send(
        &app,
        Method::POST,
        &format!("/api/projects/{id}/chapters/generate_all"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], json!({ "ok": true, "count": 4 }));

    let (_, json) = send(&app, Method::GET, &format!("/api/projects/{id}"), None).await;
    let chapters = json["data"]["chapters"].as_array().unwrap();
    let numbers: Vec<u64> = chapters.iter().map(|c| c["number"].as_u64().unwrap()).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
    for chapter in chapters {
        let count = chapter["word_count"].as_u64().unwrap();
        assert!((1400..=1800).contains(&count));
    }
}

#[tokio::test]
async fn edit_and_copy_chapter() {
    let app = test_app().await;
    let id = create_project(&app, json!({ "name": "A", "outline": "x", "chapter_count": 3 })).await;
    send(
        &app,
        Method::POST,
        &format!("/api/projects/{id}/chapters/generate"),
        Some(json!({ "chapter_number": 2 })),
    )
    .await;

    let (status, json) = send(
        &app,
        Method::PATCH,
        &format!("/api/projects/{id}/chapters/2"),
        Some(json!({ "text": "Short replacement text." })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{json}");
    let chapter = &json["data"]["chapter"];
    assert_eq!(chapter["title"], "Chapter 2");
    let count = chapter["word_count"].as_u64().unwrap();
    assert!((1400..=1800).contains(&count));
    assert!(chapter["text"].as_str().unwrap().starts_with("Short replacement text."));

    let (status, json) = send(
        &app,
        Method::PATCH,
        &format!("/api/projects/{id}/chapters/2"),
        Some(json!({ "title": "The Deal" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["chapter"]["word_count"], count);

    let (status, json) = send(
        &app,
        Method::GET,
        &format!("/api/projects/{id}/chapters/2/copy"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["title"], "The Deal");
    assert_eq!(json["data"]["word_count"], count);
}

#[tokio::test]
async fn missing_chapter_is_not_found() {
    let app = test_app().await;
    let id = create_project(&app, json!({ "name": "A", "outline": "x", "chapter_count": 3 })).await;

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/api/projects/{id}/chapters/1"),
        Some(json!({ "title": "Nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = send(
        &app,
        Method::GET,
        &format!("/api/projects/{id}/chapters/3/copy"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["errno"], 404);
}
