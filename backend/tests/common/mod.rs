//! Shared harness for the HTTP acceptance tests.
//!
//! Every `TestApp` drives the real router over its own in-memory database.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use subway_backend::storage::DbConnection;
use subway_backend::{create_router, AppState};

pub const STATIONS_PATH: &str = "/stations";
pub const LINES_PATH: &str = "/lines";

pub struct TestApp {
    router: Router,
}

#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    /// Parsed JSON body, `Value::Null` when the body is empty
    pub body: Value,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = DbConnection::init_in_memory()
            .await
            .expect("Failed to create test database");
        Self {
            router: create_router(AppState::new(db), &[]),
        }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router should not fail");

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse { status, location, body }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn create_station(&self, name: &str) -> TestResponse {
        self.post(STATIONS_PATH, serde_json::json!({ "name": name })).await
    }

    pub async fn station_names(&self) -> Vec<String> {
        let response = self.get(STATIONS_PATH).await;
        assert_eq!(response.status, StatusCode::OK);
        names(&response.body)
    }
}

/// Collect the `name` field of every element of a JSON array
pub fn names(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|item| item["name"].as_str().expect("name should be a string").to_string())
        .collect()
}
