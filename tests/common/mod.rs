#![allow(dead_code)]

use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONNECTION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, Uri};
use axum::response::IntoResponse;
use axum::Router;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const API_KEY: &str = "test-secret-key";

#[derive(Debug, Clone)]
pub struct Captured {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub content_types: Vec<String>,
    pub connection: Option<String>,
    pub body: String,
}

impl Captured {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

#[derive(Clone)]
struct MockState {
    captured: Arc<Mutex<Vec<Captured>>>,
    reply: Arc<String>,
    delay: Duration,
}

/// Fake AddisPay host answering every request with a fixed body.
pub struct MockGatewayServer {
    pub base_url: String,
    captured: Arc<Mutex<Vec<Captured>>>,
}

impl MockGatewayServer {
    pub async fn start(reply: &str) -> Self {
        Self::start_with_delay(reply, Duration::ZERO).await
    }

    pub async fn start_with_delay(reply: &str, delay: Duration) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            captured: captured.clone(),
            reply: Arc::new(reply.to_string()),
            delay,
        };
        let app = Router::new().fallback(record).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            captured,
        }
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let header = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string)
    };
    let captured = Captured {
        method,
        path: uri.path().to_string(),
        authorization: header(AUTHORIZATION),
        content_types: headers
            .get_all(CONTENT_TYPE)
            .iter()
            .filter_map(|h| h.to_str().ok())
            .map(str::to_string)
            .collect(),
        connection: header(CONNECTION),
        body,
    };
    state.captured.lock().unwrap().push(captured);

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    ([(CONTENT_TYPE, "application/json")], state.reply.to_string())
}

/// Address nothing is listening on.
pub fn dead_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
