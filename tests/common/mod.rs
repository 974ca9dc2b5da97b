//! Shared harness for HTTP integration tests.
//!
//! Builds the real router on top of `InMemoryStore` and real JWT tokens, so
//! every request goes through the auth middleware, the application handlers
//! and the store adapter.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{FixedOffset, NaiveDate, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use muscle_diary::adapters::auth::{JwtAuthenticator, PlaintextPasswordHasher};
use muscle_diary::adapters::http::{build_router, Ports, RouterSettings};
use muscle_diary::adapters::memory::InMemoryStore;
use muscle_diary::application::handlers::ranking::RankingCache;
use muscle_diary::domain::exercise::DEFAULT_EXERCISES;
use muscle_diary::ports::ExerciseRepository;

pub const SECRET: &[u8] = b"integration-test-secret-with-enough-bytes";

pub struct TestApp {
    pub router: Router,
    pub store: InMemoryStore,
    pub cache: Arc<RankingCache>,
}

pub struct Response {
    pub status: StatusCode,
    pub body: Value,
}

/// Logged-in test user.
pub struct Session {
    pub id: String,
    pub email: String,
    pub token: String,
}

pub fn zone() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).unwrap()
}

/// Today in the ranking reference zone.
pub fn today() -> NaiveDate {
    Utc::now().with_timezone(&zone()).date_naive()
}

impl TestApp {
    pub async fn new() -> Self {
        let store = InMemoryStore::new();
        store.seed(&DEFAULT_EXERCISES).await.unwrap();

        let jwt = Arc::new(JwtAuthenticator::new(SECRET, Duration::from_secs(7200), None));
        let shared = Arc::new(store.clone());
        let ports = Ports {
            users: shared.clone(),
            exercises: shared.clone(),
            workouts: shared.clone(),
            workout_reader: shared.clone(),
            likes: shared.clone(),
            timeline: shared.clone(),
            summary: shared.clone(),
            rankings: shared,
            hasher: Arc::new(PlaintextPasswordHasher),
            tokens: jwt.clone(),
            sessions: jwt,
        };

        let cache = Arc::new(RankingCache::new());
        let settings = RouterSettings {
            zone: zone(),
            refresh_timeout: Duration::from_secs(1),
            request_timeout: Duration::from_secs(5),
            cors_origins: Vec::new(),
        };
        let router = build_router(ports, cache.clone(), settings);

        Self {
            router,
            store,
            cache,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        Response { status, body }
    }

    pub async fn get(&self, uri: &str, token: &str) -> Response {
        self.request(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> Response {
        self.request(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: &str, body: Value) -> Response {
        self.request(Method::PUT, uri, Some(token), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> Response {
        self.request(Method::DELETE, uri, Some(token), None).await
    }

    pub async fn signup(&self, email: &str) -> Session {
        let response = self
            .request(
                Method::POST,
                "/signup",
                None,
                Some(json!({ "email": email, "password": "secret123" })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);

        Session {
            id: response.body["id"].as_str().unwrap().to_string(),
            email: response.body["email"].as_str().unwrap().to_string(),
            token: response.body["token"].as_str().unwrap().to_string(),
        }
    }

    /// Id of a seeded exercise, looked up by name.
    pub async fn exercise_id(&self, token: &str, name: &str) -> String {
        let response = self.get("/exercises", token).await;
        response
            .body
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["name"] == name)
            .map(|e| e["id"].as_str().unwrap().to_string())
            .unwrap()
    }

    /// Creates a record and returns its id.
    pub async fn create_record(&self, token: &str, body: Value) -> String {
        let response = self.post("/training_records", token, body).await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.body["record_id"].as_str().unwrap().to_string()
    }
}

/// Record payload with the given sets as `(set, reps, exercise_weight)`.
pub fn record_body(
    exercise_id: &str,
    trained_on: NaiveDate,
    is_public: bool,
    sets: &[(i32, i32, f64)],
) -> Value {
    json!({
        "exercise_id": exercise_id,
        "body_weight": 70.0,
        "trained_on": trained_on.to_string(),
        "is_public": is_public,
        "comment": "felt strong",
        "sets": sets
            .iter()
            .map(|(set, reps, weight)| json!({ "set": set, "reps": reps, "exercise_weight": weight }))
            .collect::<Vec<_>>(),
    })
}
