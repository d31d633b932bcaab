use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::error::FetchError;
use super::retriever::Retriever;
use super::state::FetchState;

type Parser<T> = Arc<dyn Fn(&[u8]) -> Result<T, FetchError> + Send + Sync>;

/// Outcome of one retrieval, tagged with the generation that started it.
struct Resolution<T> {
    generation: u64,
    outcome: Result<T, FetchError>,
}

/// Drives a single logical request through idle/loading/loaded/failed.
///
/// Retrievals run as tokio tasks on `runtime`; their outcomes come back over
/// a channel and are applied by [`poll`](Self::poll) or
/// [`settle`](Self::settle). Every identifier change bumps the generation
/// and aborts the previous task. Outcomes whose generation no longer
/// matches are discarded, even if the abort came too late to stop them.
pub struct FetchController<R, T> {
    retriever: Arc<R>,
    parser: Parser<T>,
    runtime: Handle,
    identifier: Option<String>,
    generation: u64,
    state: FetchState<T>,
    task: Option<JoinHandle<()>>,
    torn_down: bool,
    tx: mpsc::UnboundedSender<Resolution<T>>,
    rx: mpsc::UnboundedReceiver<Resolution<T>>,
}

impl<R, T> FetchController<R, T>
where
    R: Retriever,
    T: DeserializeOwned + Send + 'static,
{
    /// Controller that decodes response bodies as JSON into `T`.
    pub fn new(retriever: R, runtime: Handle) -> Self {
        Self::with_parser(retriever, runtime, |body: &[u8]| {
            serde_json::from_slice(body).map_err(|err| FetchError::Parse(err.to_string()))
        })
    }
}

impl<R, T> FetchController<R, T>
where
    R: Retriever,
    T: Send + 'static,
{
    /// Controller with a custom body decoder.
    pub fn with_parser<F>(retriever: R, runtime: Handle, parser: F) -> Self
    where
        F: Fn(&[u8]) -> Result<T, FetchError> + Send + Sync + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            retriever: Arc::new(retriever),
            parser: Arc::new(parser),
            runtime,
            identifier: None,
            generation: 0,
            state: FetchState::Idle,
            task: None,
            torn_down: false,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Point the controller at a new identifier.
    ///
    /// Setting the identifier that is already live does nothing. An empty
    /// identifier goes idle without issuing a request.
    pub fn set_identifier(&mut self, identifier: &str) {
        if self.torn_down {
            debug!(identifier, "ignoring identifier change on torn-down fetch controller");
            return;
        }
        if self.identifier.as_deref() == Some(identifier) {
            return;
        }
        self.identifier = Some(identifier.to_string());
        self.restart();
    }

    /// Issue a fresh request for the current identifier.
    pub fn refresh(&mut self) {
        if self.torn_down {
            return;
        }
        self.restart();
    }

    /// Stop observing: no resolution, pending or future, is applied after this.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.generation += 1;
        if let Some(task) = self.task.take() {
            task.abort();
        }
        debug!(generation = self.generation, "fetch controller torn down");
    }

    /// Apply every resolution that has already arrived, without waiting.
    ///
    /// Returns true if the observable state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(resolution) = self.rx.try_recv() {
            changed |= self.apply(resolution);
        }
        changed
    }

    /// Wait until the live request settles.
    ///
    /// Returns immediately when nothing is loading.
    pub async fn settle(&mut self) -> &FetchState<T> {
        while self.state.is_loading() && !self.torn_down {
            let Some(resolution) = self.rx.recv().await else {
                break;
            };
            self.apply(resolution);
        }
        &self.state
    }

    fn restart(&mut self) {
        self.generation += 1;
        if let Some(task) = self.task.take() {
            task.abort();
        }

        let identifier = match self.identifier.as_deref() {
            Some(identifier) if !identifier.is_empty() => identifier.to_string(),
            _ => {
                self.state = FetchState::Idle;
                return;
            }
        };

        self.state = FetchState::Loading;
        debug!(generation = self.generation, identifier = %identifier, "starting fetch");

        let generation = self.generation;
        let retriever = Arc::clone(&self.retriever);
        let parser = Arc::clone(&self.parser);
        let tx = self.tx.clone();
        self.task = Some(self.runtime.spawn(async move {
            let outcome = match retriever.retrieve(&identifier).await {
                Ok(response) if response.is_success() => parser(&response.body),
                Ok(response) => Err(FetchError::Status(response.status)),
                Err(err) => Err(err),
            };
            // Receiver lives as long as the controller; a send error only
            // means the controller is gone.
            let _ = tx.send(Resolution {
                generation,
                outcome,
            });
        }));
    }

    fn apply(&mut self, resolution: Resolution<T>) -> bool {
        if self.torn_down || resolution.generation != self.generation {
            debug!(
                generation = resolution.generation,
                current = self.generation,
                "discarding superseded fetch resolution"
            );
            return false;
        }

        self.task = None;
        self.state = match resolution.outcome {
            Ok(data) => FetchState::Loaded(data),
            Err(err) => {
                warn!(generation = resolution.generation, error = %err, "fetch failed");
                FetchState::Failed(err.to_string())
            }
        };
        true
    }
}

impl<R, T> Drop for FetchController<R, T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
