//! Mock catalog server for testing the HTTP retriever.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A mock response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"error": "mock failure"}"#.to_string(),
        }
    }
}

#[derive(Clone)]
struct MockState {
    response: Arc<Mutex<MockResponse>>,
    user_agents: Arc<Mutex<Vec<String>>>,
}

/// Serves a single configurable response at `/products`.
pub struct MockCatalog {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockCatalog {
    pub async fn start(response: MockResponse) -> Self {
        let state = MockState {
            response: Arc::new(Mutex::new(response)),
            user_agents: Arc::new(Mutex::new(Vec::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/products", get(handle_products))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}/products", self.addr)
    }

    pub async fn set_response(&self, response: MockResponse) {
        *self.state.response.lock().await = response;
    }

    pub async fn user_agents(&self) -> Vec<String> {
        self.state.user_agents.lock().await.clone()
    }
}

impl Drop for MockCatalog {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_products(State(state): State<MockState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(agent) = headers.get("user-agent").and_then(|v| v.to_str().ok()) {
        state.user_agents.lock().await.push(agent.to_string());
    }
    let response = state.response.lock().await.clone();
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [("content-type", "application/json")],
        response.body,
    )
}
