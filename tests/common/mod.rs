#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

pub struct TestApp {
    pub router: Router,
    pub db: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("Failed to create in-memory SQLite pool");

        notetag::db::migrate(&pool)
            .await
            .expect("Failed to run migrations");

        let router = notetag::build_app(pool.clone());

        Self { router, db: pool }
    }

    /// Send a request through the app and return the response.
    pub async fn request(&self, req: Request<Body>) -> Response {
        tower::ServiceExt::oneshot(self.router.clone(), req)
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.request(req).await
    }

    /// Send a request carrying a JSON body.
    pub async fn send_json(&self, method: &str, uri: &str, body: Value) -> Response {
        let req = Request::builder()
            .uri(uri)
            .method(method)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(req).await
    }

    /// Send a body-less request with the given method.
    pub async fn send(&self, method: &str, uri: &str) -> Response {
        let req = Request::builder()
            .uri(uri)
            .method(method)
            .body(Body::empty())
            .unwrap();
        self.request(req).await
    }

    /// Create an entry through the API and return its JSON representation.
    pub async fn create_entry(&self, content: &str) -> Value {
        let resp = self
            .send_json("POST", "/entry/", serde_json::json!({ "content": content }))
            .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        body_json(resp).await
    }

    /// Create a tag through the API and return its JSON representation.
    pub async fn create_tag(&self, name: &str) -> Value {
        let resp = self
            .send_json("POST", "/tag/", serde_json::json!({ "name": name }))
            .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        body_json(resp).await
    }

    pub async fn link(&self, entry_id: &str, tag_name: &str) -> Response {
        self.send(
            "POST",
            &format!("/entry_tag/?entry_id={entry_id}&tag_name={tag_name}"),
        )
        .await
    }
}

/// Read the full response body as a String.
pub async fn body_string(resp: Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Read the full response body as JSON.
pub async fn body_json(resp: Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("Response body should be JSON")
}

/// Pause long enough for the next write to get a later timestamp.
pub async fn tick() {
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
}
