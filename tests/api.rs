//! Route-level tests that run without a database: liveness, routing shape and
//! input rejection. The pool is lazy, so nothing here opens a connection;
//! query-backed behavior is covered by `tests/crud.rs` against a live MySQL
//! instance.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use smdpro_backend::{app, AppState};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use tower::ServiceExt;

fn test_app() -> axum::Router {
    let pool = MySqlPoolOptions::new()
        .max_connections(1)
        .connect_lazy_with(MySqlConnectOptions::new());
    app(AppState { pool })
}

async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    resp.into_body().collect().await.unwrap().to_bytes().to_vec()
}

#[tokio::test]
async fn liveness_routes_respond_with_their_strings() {
    let app = test_app();

    let resp = app
        .clone()
        .oneshot(Request::get("/api/test").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, b"Test route is working!");

    let resp = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, b"SMDPRO API is running!");
}

#[tokio::test]
async fn non_numeric_id_is_a_bad_request() {
    for path in [
        "/api/project/abc",
        "/api/material/abc",
        "/api/bom/abc",
        "/api/panel/abc",
    ] {
        let resp = test_app()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{path}");
        let body: serde_json::Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
        assert_eq!(body["message"], "invalid id");
    }
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let resp = test_app()
        .oneshot(Request::get("/api/nonexistent").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_requires_a_json_body() {
    // No content type at all.
    let resp = test_app()
        .oneshot(
            Request::post("/api/project")
                .body(Body::from("name=Rev+A"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    // JSON content type but not an object.
    let resp = test_app()
        .oneshot(
            Request::post("/api/project")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("[]"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn list_uses_plural_path_only() {
    // POST on the collection path is not part of the surface.
    let resp = test_app()
        .oneshot(
            Request::post("/api/projects")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
