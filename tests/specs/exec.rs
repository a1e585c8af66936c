//! Running commands inside services.

use crate::prelude::*;
use berth_adapters::{EngineCall, FakeContainerEngine};

/// A failing group-routed exec reports both the error and what it printed.
#[tokio::test]
async fn group_routed_failure_includes_captured_output() {
    let stack = Stack::new("echo 'permission denied'; exit 1");
    let err = stack.compose().exec("web", "ls", ExecOptions::new(), None).await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("exit code 1"), "{message}");
    assert!(message.contains("DOCKER GIVES: permission denied"), "{message}");
    assert_eq!(stack.calls(), vec!["exec web ls"]);
}

/// Success passes the command's output through unchanged.
#[tokio::test]
async fn group_routed_success_passes_output_through() {
    let stack = Stack::new("echo 'uid=0(root)'");
    let timeline = Timeline::default();
    let output = stack
        .compose()
        .exec("web", "id", ExecOptions::new(), Some(timeline.notifier("out")))
        .await
        .unwrap();

    assert_eq!(output, "uid=0(root)");
    assert_eq!(timeline.events(), vec!["out:uid=0(root)"]);
}

/// When the direct path's lookup fails, that error is returned and exec is never attempted.
#[tokio::test]
async fn direct_path_lookup_failure_skips_exec() {
    let stack = Stack::new("echo 'Cannot connect to the Docker daemon' >&2; exit 1");
    let engine = FakeContainerEngine::new();
    let compose = Compose::new(stack.config().detached_exec_supported(false))
        .with_engine(Arc::new(engine.clone()));

    let err = compose.exec("web", "ls", ExecOptions::new(), None).await.unwrap_err();

    assert!(matches!(err, ComposeError::Process(ProcessError::Failed { .. })), "{err:?}");
    assert_eq!(stack.calls(), vec!["ps -q web"]);
    assert!(engine.calls().is_empty());
}

/// Detached execution always addresses the container directly.
#[tokio::test]
async fn detached_exec_uses_container_id() {
    let stack = Stack::new("printf '9c1e\\r\\n'");
    let engine = FakeContainerEngine::new();
    let compose = stack.compose().with_engine(Arc::new(engine.clone()));

    compose.exec("worker", "make jobs", ExecOptions::detached(), None).await.unwrap();

    assert_eq!(
        engine.calls(),
        vec![EngineCall::Exec {
            container_id: "9c1e".into(),
            command: "make jobs".into(),
            options: ExecOptions::detached(),
        }]
    );
}

/// `cp` resolves the container first and copies into it.
#[tokio::test]
async fn cp_targets_resolved_container() {
    let stack = Stack::new("echo 9c1e");
    let engine = FakeContainerEngine::new();
    let compose = stack.compose().with_engine(Arc::new(engine.clone()));

    compose.cp("db", "seed.sql", "/docker-entrypoint-initdb.d/").await.unwrap();

    assert_eq!(
        engine.calls(),
        vec![EngineCall::Copy {
            container_id: "9c1e".into(),
            src: "seed.sql".into(),
            dst: "/docker-entrypoint-initdb.d/".into(),
        }]
    );
}
