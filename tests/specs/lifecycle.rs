//! Lifecycle operations and the call shapes they accept.

use crate::prelude::*;
use tokio::sync::oneshot;

/// `up()` with no target brings up the whole group, detached.
#[tokio::test]
async fn up_without_target_brings_up_group_detached() {
    let stack = Stack::new("echo 'Creating stack_web_1 ... done'");
    let output = stack.compose().up(Call::group()).await.unwrap();

    assert_eq!(output, "Creating stack_web_1 ... done");
    assert_eq!(stack.calls(), vec!["up -d"]);
}

/// Group and service call shapes reach the same dispatcher with the same notifier.
#[tokio::test]
async fn both_call_shapes_resolve_equivalently() {
    let stack = Stack::new("echo \"$1 ${2:-all}\"");
    let compose = stack.compose();
    let timeline = Timeline::default();

    compose.restart(Call::group().with_notifier(timeline.notifier("n"))).await.unwrap();
    compose.restart(Call::service("web").with_notifier(timeline.notifier("n"))).await.unwrap();
    compose.restart("api").await.unwrap();

    assert_eq!(stack.calls(), vec!["restart", "restart web", "restart api"]);
    assert_eq!(timeline.events(), vec!["n:restart all", "n:restart web"]);
}

/// Every notification lands before the completion callback.
#[tokio::test]
async fn notifications_precede_completion() {
    let stack = Stack::new(
        "for i in 1 2 3 4 5 6 7 8; do echo \"Stopping web_$i\"; echo \"warn $i\" >&2; done",
    );
    let timeline = Timeline::default();
    let (tx, rx) = oneshot::channel();

    let done = timeline.clone();
    let call = Call::group().with_notifier(timeline.notifier("n"));
    stack
        .compose()
        .launch(berth_engine::Lifecycle::Stop, call, move |result| {
            done.push("done");
            let _ = tx.send(result);
        })
        .unwrap();
    rx.await.unwrap().unwrap();

    let events = timeline.events();
    assert_eq!(events.len(), 17);
    assert_eq!(events.last().map(String::as_str), Some("done"));
    assert_eq!(events.iter().filter(|e| *e == "done").count(), 1);
}

/// Failures arrive through the completion path, never through the notifier.
#[tokio::test]
async fn failure_is_delivered_once_through_completion() {
    let stack = Stack::new("echo 'Stopping web'; echo 'ERROR: timeout' >&2; exit 1");
    let timeline = Timeline::default();

    let err = stack
        .compose()
        .stop(Call::service("web").with_notifier(timeline.notifier("n")))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("ERROR: timeout"), "{err}");
    let mut events = timeline.events();
    events.sort();
    assert_eq!(events, vec!["n:ERROR: timeout", "n:Stopping web"]);
}

/// `names()` splits the service listing on whitespace.
#[tokio::test]
async fn names_lists_services() {
    let stack = Stack::new("printf 'web\\napi\\ndb\\n'");
    assert_eq!(stack.compose().names().await.unwrap(), vec!["web", "api", "db"]);
}

/// A missing tool is a launch failure, reported like any other error.
#[tokio::test]
async fn missing_tool_is_reported() {
    let stack = Stack::new("exit 0");
    let compose = Compose::new(stack.config().program("definitely-not-a-compose-binary"));
    let err = compose.version().await.unwrap_err();

    // `sh -c` reports an unknown command as exit status 127
    assert_eq!(err.exit_code(), Some(127));
}

/// `isRunning` is true once any container exists.
#[tokio::test]
async fn is_running_follows_ps() {
    let running = Stack::new("echo 4f1c2a");
    let stopped = Stack::new("true");
    assert!(running.compose().is_running().await.unwrap());
    assert!(!stopped.compose().is_running().await.unwrap());
}
