//! Mock upstream host for tests.
//!
//! Serves canned responses from an axum router bound to an ephemeral
//! local port, so the real `UpstreamClient` can be exercised end to end.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{Value, json};

/// A base URL nothing listens on; connections are refused.
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:1";

/// What the mock returns for a path.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// 200 with this JSON body
    Json(Value),
    /// Empty body with this status
    Status(StatusCode),
    /// 200 with this raw text body
    Body(&'static str),
    /// 200 with this JSON body, after a delay
    Slow(Duration, Value),
}

/// Builder for a mock upstream host.
#[derive(Debug, Default)]
pub struct MockUpstream {
    routes: HashMap<String, MockResponse>,
    fallback: Option<MockResponse>,
}

/// A running mock upstream host.
pub struct MockServer {
    /// Base URL to point an `UpstreamClient` at
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

#[derive(Clone)]
struct MockState {
    routes: Arc<HashMap<String, MockResponse>>,
    fallback: Option<Arc<MockResponse>>,
    hits: Arc<AtomicUsize>,
}

impl MockUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to an exact path.
    pub fn route(mut self, path: impl Into<String>, response: MockResponse) -> Self {
        self.routes.insert(path.into(), response);
        self
    }

    /// Respond to every path without its own route. Without a fallback,
    /// unknown paths get a 404.
    pub fn fallback(mut self, response: MockResponse) -> Self {
        self.fallback = Some(response);
        self
    }

    /// Bind to a free local port and start serving.
    pub async fn start(self) -> MockServer {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = MockState {
            routes: Arc::new(self.routes),
            fallback: self.fallback.map(Arc::new),
            hits: Arc::clone(&hits),
        };

        let app = Router::new().fallback(serve).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockServer {
            base_url: format!("http://{addr}"),
            hits,
        }
    }
}

impl MockServer {
    /// Number of requests this host has received.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn serve(State(state): State<MockState>, uri: Uri) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let response = state
        .routes
        .get(uri.path())
        .or(state.fallback.as_deref());

    match response {
        Some(MockResponse::Json(value)) => Json(value.clone()).into_response(),
        Some(MockResponse::Status(status)) => (*status).into_response(),
        Some(MockResponse::Body(body)) => (StatusCode::OK, *body).into_response(),
        Some(MockResponse::Slow(delay, value)) => {
            tokio::time::sleep(*delay).await;
            Json(value.clone()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Station listing body with one station and its train ids.
pub fn station_listing(code: &str, train_ids: &[&str]) -> Value {
    json!({
        code: {
            "name": format!("{code} station"),
            "code": code,
            "trains": train_ids,
        }
    })
}

/// Train detail body with a single run under `train_id`.
pub fn train_detail(train_id: &str, run: Value) -> Value {
    json!({ train_id: [run] })
}

/// A Washington → Boston run that left WAS five minutes late.
pub fn northeast_run(train_num: &str) -> Value {
    json!({
        "trainNum": train_num,
        "routeName": "Northeast Regional",
        "origCode": "WAS",
        "destCode": "BOS",
        "updatedAt": "2024-01-01T10:06:00Z",
        "stations": [
            {
                "code": "WAS",
                "status": "Departed",
                "dep": "2024-01-01T10:05:00Z",
                "schDep": "2024-01-01T10:00:00Z"
            },
            {
                "code": "BAL",
                "status": "Enroute",
                "arr": "2024-01-01T10:47:00Z",
                "schArr": "2024-01-01T10:40:00Z"
            },
            {
                "code": "BOS",
                "status": "Enroute",
                "schArr": "2024-01-01T17:00:00Z"
            }
        ]
    })
}
