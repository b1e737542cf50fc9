mod common;

use common::{StubLookup, StubProbe, create_link, spawn_app, spawn_app_with};
use serde_json::{Value, json};
use std::future::IntoFuture;

fn error_message(body: &Value) -> &str {
    body["error"]["message"].as_str().unwrap_or_default()
}

#[tokio::test]
async fn test_create_link_with_generated_slug() {
    let app = spawn_app();

    let link = create_link(&app.server, "google.com", "").await;

    assert_eq!(link["url"], "http://google.com");
    assert_eq!(link["viewCount"], 0);
    assert_eq!(link["deletedAt"], Value::Null);

    let slug = link["slug"].as_str().unwrap();
    assert_eq!(slug.len(), 6);
    assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    assert_eq!(link["id"].as_str().unwrap().len(), 20);
}

#[tokio::test]
async fn test_create_link_slug_field_is_optional() {
    let app = spawn_app();

    let response = app
        .server
        .post("/link")
        .json(&json!({ "url": "https://www.google.com/" }))
        .await;

    response.assert_status_ok();
    let link = response.json::<Value>();
    assert_eq!(link["url"], "https://www.google.com/");
}

#[tokio::test]
async fn test_create_link_duplicate_slug() {
    let app = spawn_app();
    create_link(&app.server, "https://www.google.com/", "google").await;

    let response = app
        .server
        .post("/link")
        .json(&json!({ "url": "https://www.google.com/", "slug": "google" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
    let body = response.json::<Value>();
    assert_eq!(error_message(&body), "Slug is already in use");
    assert_eq!(body["error"]["details"]["reason"], "slug_in_use");
    assert_eq!(app.repo.len(), 1);
}

#[tokio::test]
async fn test_create_link_slug_too_short() {
    let app = spawn_app();

    let response = app
        .server
        .post("/link")
        .json(&json!({ "url": "https://google.com", "slug": "abc" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        error_message(&response.json::<Value>()),
        "Slug must be at least 4 characters long"
    );
}

#[tokio::test]
async fn test_create_link_slug_invalid_characters() {
    let app = spawn_app();

    let response = app
        .server
        .post("/link")
        .json(&json!({ "url": "https://google.com", "slug": "Google" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        error_message(&response.json::<Value>()),
        "Slug may only contain lowercase letters or numbers"
    );
}

#[tokio::test]
async fn test_create_link_unreachable_url() {
    let app = spawn_app();

    let response = app
        .server
        .post("/link")
        .json(&json!({ "url": "foo", "slug": "" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(error_message(&response.json::<Value>()), "Unable to load URL");
    assert!(app.repo.is_empty());
}

#[tokio::test]
async fn test_create_link_bad_status() {
    let app = spawn_app_with(
        StubProbe {
            status: 404,
            unreachable_hosts: vec![],
        },
        StubLookup { available: true },
    );

    let response = app
        .server
        .post("/link")
        .json(&json!({ "url": "https://google.com/missing" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        error_message(&response.json::<Value>()),
        "URL failed to load with 404: Not Found"
    );
}

#[tokio::test]
async fn test_create_link_unsafe_url() {
    let app = spawn_app();

    let response = app
        .server
        .post("/link")
        .json(&json!({ "url": "https://testsafebrowsing.appspot.com/s/malware.html" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(error_message(&body), "URL is unsafe");
    assert_eq!(body["error"]["details"]["reason"], "url_unsafe");
    assert!(app.repo.is_empty());
}

#[tokio::test]
async fn test_create_link_fails_closed_without_safety_service() {
    let app = spawn_app_with(StubProbe::ok(), StubLookup { available: false });

    let response = app
        .server
        .post("/link")
        .json(&json!({ "url": "https://google.com" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        error_message(&response.json::<Value>()),
        "Unable to verify URL safety"
    );
    assert!(app.repo.is_empty());
}

#[tokio::test]
async fn test_create_link_rejects_malformed_body() {
    let app = spawn_app();

    let response = app.server.post("/link").json(&json!({ "slug": "google" })).await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_get_link() {
    let app = spawn_app();
    let created = create_link(&app.server, "https://www.google.com/", "google").await;
    let id = created["id"].as_str().unwrap();

    let response = app.server.get(&format!("/link/{id}")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), created);
}

#[tokio::test]
async fn test_get_unknown_link_is_null() {
    let app = spawn_app();

    let response = app.server.get("/link/notalink").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), Value::Null);
}

#[tokio::test]
async fn test_delete_link() {
    let app = spawn_app();
    let created = create_link(&app.server, "https://www.google.com/", "google").await;
    let id = created["id"].as_str().unwrap();

    app.server
        .delete(&format!("/link/{id}"))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    let link = app.server.get(&format!("/link/{id}")).await.json::<Value>();
    assert!(link["deletedAt"].is_string());
    assert_eq!(link["slug"], "google");
}

#[tokio::test]
async fn test_delete_twice_reports_already_deleted() {
    let app = spawn_app();
    let created = create_link(&app.server, "https://www.google.com/", "google").await;
    let id = created["id"].as_str().unwrap();
    app.server.delete(&format!("/link/{id}")).await;

    let first = app.server.get(&format!("/link/{id}")).await.json::<Value>();
    let response = app.server.delete(&format!("/link/{id}")).await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
    assert_eq!(error_message(&response.json::<Value>()), "Link already deleted");

    let second = app.server.get(&format!("/link/{id}")).await.json::<Value>();
    assert_eq!(first["deletedAt"], second["deletedAt"]);
}

#[tokio::test]
async fn test_delete_unknown_link() {
    let app = spawn_app();

    let response = app.server.delete("/link/notalink").await;

    response.assert_status_not_found();
    assert_eq!(error_message(&response.json::<Value>()), "Link not found");
}

#[tokio::test]
async fn test_concurrent_deletes_have_one_winner() {
    let app = spawn_app();
    let created = create_link(&app.server, "https://www.google.com/", "google").await;
    let path = format!("/link/{}", created["id"].as_str().unwrap());

    let (a, b) = tokio::join!(
        app.server.delete(&path).into_future(),
        app.server.delete(&path).into_future()
    );

    let mut statuses = [a.status_code().as_u16(), b.status_code().as_u16()];
    statuses.sort_unstable();
    assert_eq!(statuses, [204, 409]);
}

#[tokio::test]
async fn test_deleted_slug_stays_reserved() {
    let app = spawn_app();
    let created = create_link(&app.server, "https://www.google.com/", "google").await;
    app.server
        .delete(&format!("/link/{}", created["id"].as_str().unwrap()))
        .await;

    let response = app
        .server
        .post("/link")
        .json(&json!({ "url": "https://bing.com", "slug": "google" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
    assert_eq!(error_message(&response.json::<Value>()), "Slug is already in use");
}

#[tokio::test]
async fn test_create_link_with_route_slug_is_rejected() {
    let app = spawn_app();

    for slug in ["link", "health"] {
        let response = app
            .server
            .post("/link")
            .json(&json!({ "url": "https://www.google.com/", "slug": slug }))
            .await;

        response.assert_status(axum::http::StatusCode::CONFLICT);
        assert_eq!(error_message(&response.json::<Value>()), "Slug is already in use");
    }

    assert!(app.repo.is_empty());
    app.server.get("/health").await.assert_status_ok();
}
