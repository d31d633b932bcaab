//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use parking_lot::Mutex;
use shopfront::catalog::Product;
use shopfront::config::Config;
use shopfront::fetch::{FetchController, FetchError, RawResponse, Retriever};
use shopfront::storage::{KeyValueStore, MemoryStore};
use shopfront::ui::app::App;
use shopfront::ui::notification::NotificationCenter;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub const CATALOG_URL: &str = "mock://catalog";

pub const TWO_PRODUCTS: &str = r#"[
    {"id": 1, "title": "Mug", "price": 9.5, "rating": {"rate": 4.2, "count": 10}},
    {"id": 2, "title": "Lamp", "price": 24.0}
]"#;

/// Canned answer for one identifier.
#[derive(Clone)]
pub struct Script {
    pub delay: Duration,
    pub response: Result<RawResponse, FetchError>,
}

impl Script {
    pub fn ok(delay_ms: u64, body: &str) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            response: Ok(RawResponse::new(200, body)),
        }
    }

    pub fn status(delay_ms: u64, status: u16) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            response: Ok(RawResponse::new(status, "")),
        }
    }

    pub fn transport(delay_ms: u64, message: &str) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            response: Err(FetchError::Transport(message.to_string())),
        }
    }
}

pub type CallLog = Arc<Mutex<Vec<String>>>;

/// Retriever that answers from a table and records every call.
pub struct ScriptedRetriever {
    scripts: HashMap<String, Script>,
    calls: CallLog,
}

impl ScriptedRetriever {
    pub fn new() -> Self {
        Self {
            scripts: HashMap::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with(mut self, identifier: &str, script: Script) -> Self {
        self.scripts.insert(identifier.to_string(), script);
        self
    }

    pub fn calls(&self) -> CallLog {
        Arc::clone(&self.calls)
    }
}

impl Retriever for ScriptedRetriever {
    async fn retrieve(&self, identifier: &str) -> Result<RawResponse, FetchError> {
        self.calls.lock().push(identifier.to_string());
        let script = self
            .scripts
            .get(identifier)
            .cloned()
            .unwrap_or_else(|| Script::transport(0, "no script for identifier"));
        tokio::time::sleep(script.delay).await;
        script.response
    }
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- App helpers --------------------------------------------------------------

pub type TestApp = App<ScriptedRetriever>;

/// Build an `App` on the current runtime with an in-memory store.
///
/// Must be called from inside a tokio runtime.
pub fn make_app(retriever: ScriptedRetriever) -> (TestApp, Arc<dyn KeyValueStore>) {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let app = make_app_with_store(retriever, Arc::clone(&store));
    (app, store)
}

pub fn make_app_with_store(retriever: ScriptedRetriever, store: Arc<dyn KeyValueStore>) -> TestApp {
    let mut config = Config::default();
    config.catalog.url = CATALOG_URL.to_string();
    let handle = tokio::runtime::Handle::current();
    let schema = config.catalog.schema.clone();
    let catalog: FetchController<ScriptedRetriever, Vec<Product>> =
        FetchController::with_parser(retriever, handle.clone(), move |body: &[u8]| {
            schema.parse(body)
        });
    let notifications = NotificationCenter::from_config(handle, &config.notifications);
    App::new(&config, catalog, notifications, store)
}
