//! The `logs` operation.

use std::time::Duration;

use crate::prelude::*;

const RAW: &str = "printf 'Attaching...\\nweb_1  | line1\\napi_1  | line2\\n'";

/// Snapshot mode drops the banner and strips only the target's prefixes.
#[tokio::test]
async fn snapshot_for_web_with_tail() {
    let stack = Stack::new(RAW);
    let options = LogsOptions::new().tail(10u32);
    let text = stack.compose().logs("web", &options, None).unwrap().finish().await.unwrap();

    similar_asserts::assert_eq!(text.as_str(), "line1\napi_1  | line2");
    assert_eq!(stack.calls(), vec!["logs --tail=10 web"]);
}

/// Options deserialize from camelCase keys.
#[tokio::test]
async fn options_from_json() {
    let stack = Stack::new("exit 0");
    let options: LogsOptions =
        serde_json::from_str(r#"{"time": true, "tail": 5, "noColor": true}"#).unwrap();
    stack.compose().logs("", &options, None).unwrap().finish().await.unwrap();
    assert_eq!(stack.calls(), vec!["logs -t --tail=5 --no-color"]);
}

/// Follow mode delivers prefix-stripped chunks as they arrive, until killed.
#[tokio::test]
async fn follow_streams_until_killed() {
    let stack = Stack::new(
        "echo 'Attaching to web_1'; echo 'web_1  | \u{1b}[32mlistening\u{1b}[0m'; exec sleep 30",
    );
    let timeline = Timeline::default();
    let options = LogsOptions::new().follow(true);
    let session = stack.compose().logs("web", &options, Some(timeline.notifier("log"))).unwrap();

    tokio::time::timeout(Duration::from_secs(10), async {
        while timeline.events().len() < 2 {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .unwrap();

    session.kill();
    let err = session.finish().await.unwrap_err();
    assert!(matches!(err, ComposeError::Process(ProcessError::Killed { .. })), "{err:?}");
    assert_eq!(
        timeline.events(),
        vec!["log:Attaching to web_1", "log:\u{1b}[32mlistening\u{1b}[0m"]
    );
}
