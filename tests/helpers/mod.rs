//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use securelink_api::{AppState, build_router};
use securelink_auth::JwtEncoder;
use securelink_core::config::AppConfig;
use securelink_store::{LinkStore, MemoryLinkStore};

/// Test application context.
///
/// Runs the full router over the in-memory link store, so tests exercise
/// the HTTP surface without an external database.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The backing store, for direct assertions
    pub store: Arc<MemoryLinkStore>,
    /// Application config
    pub config: AppConfig,
}

/// A parsed test response
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (empty object if the body was empty)
    pub body: Value,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let store = Arc::new(MemoryLinkStore::new());
        let state = AppState::new(config.clone(), Arc::clone(&store) as Arc<dyn LinkStore>);
        let router = build_router(state);

        Self {
            router,
            store,
            config,
        }
    }

    /// Mint a bearer token for the given owner
    pub fn issue_token(&self, owner_id: Uuid) -> String {
        let (token, _) = JwtEncoder::new(&self.config.auth)
            .generate_access_token(owner_id)
            .expect("Failed to mint test token");
        token
    }

    /// Make a request against the router and parse the JSON response
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        bearer: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = bearer {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .expect("Failed to build request"),
            None => builder.body(Body::empty()).expect("Failed to build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Object(Default::default())
        } else {
            serde_json::from_slice(&bytes).expect("Response body was not JSON")
        };

        TestResponse { status, body }
    }
}
