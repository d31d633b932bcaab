mod common;

use common::{Script, ScriptedRetriever};
use shopfront::fetch::{FetchController, FetchState};
use std::time::Duration;
use tokio::runtime::Handle;

type Numbers = FetchController<ScriptedRetriever, Vec<u32>>;

fn controller(retriever: ScriptedRetriever) -> Numbers {
    FetchController::new(retriever, Handle::current())
}

#[tokio::test(start_paused = true)]
async fn loads_data_for_identifier() {
    let retriever = ScriptedRetriever::new().with("a", Script::ok(20, "[1, 2, 3]"));
    let calls = retriever.calls();
    let mut fetch = controller(retriever);
    assert!(fetch.state().is_idle());

    fetch.set_identifier("a");
    assert!(fetch.state().is_loading());

    let state = fetch.settle().await;
    assert_eq!(state, &FetchState::Loaded(vec![1, 2, 3]));
    assert_eq!(*calls.lock(), vec!["a".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn slow_failure_is_superseded_by_newer_success() {
    let retriever = ScriptedRetriever::new()
        .with("a", Script::transport(200, "connection reset"))
        .with("b", Script::ok(10, "[7]"));
    let mut fetch = controller(retriever);

    fetch.set_identifier("a");
    fetch.set_identifier("b");
    assert_eq!(fetch.settle().await, &FetchState::Loaded(vec![7]));

    // Long after A would have failed, nothing changes.
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(!fetch.poll());
    assert_eq!(fetch.state(), &FetchState::Loaded(vec![7]));
    assert_eq!(fetch.state().error(), None);
}

#[tokio::test(start_paused = true)]
async fn queued_stale_resolution_is_discarded() {
    let retriever = ScriptedRetriever::new()
        .with("a", Script::ok(10, "[1]"))
        .with("b", Script::ok(100, "[2]"));
    let mut fetch = controller(retriever);

    fetch.set_identifier("a");
    // Let A resolve into the channel without applying it.
    tokio::time::sleep(Duration::from_millis(50)).await;
    fetch.set_identifier("b");

    assert!(!fetch.poll());
    assert!(fetch.state().is_loading());
    assert_eq!(fetch.settle().await, &FetchState::Loaded(vec![2]));
}

#[tokio::test(start_paused = true)]
async fn empty_identifier_stays_idle_without_request() {
    let retriever = ScriptedRetriever::new();
    let calls = retriever.calls();
    let mut fetch = controller(retriever);

    fetch.set_identifier("");
    assert!(fetch.state().is_idle());
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!fetch.poll());
    assert!(calls.lock().is_empty());
}

#[tokio::test(start_paused = true)]
async fn clearing_identifier_abandons_request() {
    let retriever = ScriptedRetriever::new().with("a", Script::ok(100, "[1]"));
    let mut fetch = controller(retriever);

    fetch.set_identifier("a");
    fetch.set_identifier("");
    assert!(fetch.state().is_idle());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!fetch.poll());
    assert!(fetch.state().is_idle());
}

#[tokio::test(start_paused = true)]
async fn same_identifier_issues_one_request() {
    let retriever = ScriptedRetriever::new().with("a", Script::ok(10, "[1]"));
    let calls = retriever.calls();
    let mut fetch = controller(retriever);

    fetch.set_identifier("a");
    fetch.set_identifier("a");
    fetch.settle().await;
    fetch.set_identifier("a");
    tokio::time::sleep(Duration::from_millis(50)).await;
    fetch.poll();

    assert_eq!(calls.lock().len(), 1);
    assert_eq!(fetch.state(), &FetchState::Loaded(vec![1]));
}

#[tokio::test(start_paused = true)]
async fn non_success_status_fails_with_status_message() {
    let retriever = ScriptedRetriever::new().with("a", Script::status(10, 404));
    let mut fetch = controller(retriever);

    fetch.set_identifier("a");
    let state = fetch.settle().await;
    assert_eq!(state.error(), Some("HTTP error! status: 404"));
}

#[tokio::test(start_paused = true)]
async fn unparseable_body_fails() {
    let retriever = ScriptedRetriever::new().with("a", Script::ok(10, "<html>oops</html>"));
    let mut fetch = controller(retriever);

    fetch.set_identifier("a");
    let state = fetch.settle().await;
    let message = state.error().expect("expected a failure");
    assert!(message.starts_with("Invalid response body"), "{message}");
}

#[tokio::test(start_paused = true)]
async fn transport_error_message_is_kept() {
    let retriever = ScriptedRetriever::new().with("a", Script::transport(10, "dns failure"));
    let mut fetch = controller(retriever);

    fetch.set_identifier("a");
    assert_eq!(fetch.settle().await.error(), Some("dns failure"));
}

#[tokio::test(start_paused = true)]
async fn refresh_reissues_current_identifier() {
    let retriever = ScriptedRetriever::new().with("a", Script::ok(10, "[4]"));
    let calls = retriever.calls();
    let mut fetch = controller(retriever);

    fetch.set_identifier("a");
    fetch.settle().await;
    let before = fetch.generation();

    fetch.refresh();
    assert!(fetch.state().is_loading());
    assert!(fetch.generation() > before);
    assert_eq!(fetch.settle().await, &FetchState::Loaded(vec![4]));
    assert_eq!(calls.lock().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn teardown_suppresses_all_updates() {
    let retriever = ScriptedRetriever::new()
        .with("a", Script::ok(10, "[1]"))
        .with("b", Script::ok(10, "[2]"));
    let calls = retriever.calls();
    let mut fetch = controller(retriever);

    fetch.set_identifier("a");
    fetch.teardown();
    assert!(fetch.is_torn_down());

    fetch.set_identifier("b");
    fetch.refresh();
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert!(!fetch.poll());
    assert!(fetch.state().is_loading());
    assert_eq!(fetch.identifier(), Some("a"));
    assert!(!calls.lock().contains(&"b".to_string()));
    // settle returns at once instead of waiting forever
    assert!(fetch.settle().await.is_loading());
}
