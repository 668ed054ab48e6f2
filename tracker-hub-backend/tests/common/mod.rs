//! Shared test helpers: an in-process fake backend served by axum

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use tracker_hub_backend::{ClientConfig, HttpBackend};

/// A request as seen by the fake backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path plus query string
    pub target: String,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

/// Canned answer for one path.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl CannedResponse {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: body.to_string(),
        }
    }
}

impl IntoResponse for CannedResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}

#[derive(Clone, Default)]
struct FakeState {
    routes: Arc<Mutex<HashMap<String, CannedResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Fake backend answering canned responses by path.
pub struct FakeBackend {
    pub base_url: String,
    state: FakeState,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake backend");
        let addr = listener.local_addr().expect("local addr");

        let state = FakeState::default();
        // Routes are registered after start, so every path goes through one handler
        let app = Router::new().fallback(answer).with_state(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("serve fake backend");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Registers the answer for `path` (query string ignored when matching).
    pub async fn route(&self, path: &str, response: CannedResponse) {
        self.state
            .routes
            .lock()
            .await
            .insert(path.to_string(), response);
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().await.clone()
    }

    pub fn backend(&self) -> HttpBackend {
        HttpBackend::new(&ClientConfig::new(&self.base_url)).expect("valid base URL")
    }
}

/// Records the request, then replies with the canned answer for its path.
async fn answer(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    body: String,
) -> CannedResponse {
    let target = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), ToString::to_string);
    state.requests.lock().await.push(RecordedRequest {
        method: method.to_string(),
        target,
        body,
    });

    state
        .routes
        .lock()
        .await
        .get(uri.path())
        .cloned()
        .unwrap_or_else(|| CannedResponse::text(404, "404 page not found"))
}

/// Base URL of a port nobody listens on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}
