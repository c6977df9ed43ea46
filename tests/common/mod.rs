//! Shared helpers: an app over in-memory repositories and a request driver.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use top_places::config::DEFAULT_BODY_LIMIT_BYTES;
use top_places::repository::{InMemoryCountryRepository, InMemoryPlaceRepository};
use top_places::{app, AppState};
use tower::ServiceExt; // For oneshot()

pub struct TestApp {
    pub router: Router,
    pub places: InMemoryPlaceRepository,
}

pub fn test_app() -> TestApp {
    test_app_with_body_limit(DEFAULT_BODY_LIMIT_BYTES)
}

pub fn test_app_with_body_limit(body_limit: usize) -> TestApp {
    let countries = InMemoryCountryRepository::new();
    let places = InMemoryPlaceRepository::new();
    let state = AppState::new(Arc::new(countries), Arc::new(places.clone()));
    TestApp {
        router: app(state, body_limit),
        places,
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

impl TestApp {
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.raw(request).await
    }

    pub async fn raw(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send("GET", uri, None).await
    }

    /// Creates a country and returns its id.
    pub async fn country(&self, name: &str, capital: &str) -> i64 {
        let res = self
            .send(
                "POST",
                "/countries/",
                Some(serde_json::json!({ "name": name, "capital": capital })),
            )
            .await;
        assert_eq!(res.status, StatusCode::OK, "create country: {}", res.body);
        res.body["id"].as_i64().unwrap()
    }

    /// Creates a place and returns the response body.
    pub async fn place(&self, body: Value) -> Value {
        let res = self.send("POST", "/places/", Some(body)).await;
        assert_eq!(res.status, StatusCode::CREATED, "create place: {}", res.body);
        res.body
    }
}
