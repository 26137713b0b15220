#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use lore_api::config::ServerConfig;
use lore_api::router::build_app_router;
use lore_api::state::AppState;
use lore_api::views::Views;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        request_timeout_secs: 30,
    }
}

/// Build the full application router, with all middleware layers, on top of
/// the given database pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        views: Arc::new(Views::new().expect("templates should compile")),
    };
    build_app_router(state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an `application/x-www-form-urlencoded` body built from `fields`.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Value of the `Location` header of a redirect.
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect should carry a Location header")
        .to_str()
        .unwrap()
}
