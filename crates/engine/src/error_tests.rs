// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn exit_failure() -> ComposeError {
    ComposeError::Process(ProcessError::Failed {
        command: "docker-compose exec web ls".into(),
        exit_code: 126,
        stdout: String::new(),
        stderr: "OCI runtime exec failed".into(),
    })
}

#[test]
fn exec_error_embeds_captured_output() {
    let err = ComposeError::Exec {
        source: Box::new(exit_failure()),
        captured_output: "permission denied\n".into(),
    };
    assert_eq!(
        err.to_string(),
        "Error occurred: command `docker-compose exec web ls` failed with exit code 126: \
         OCI runtime exec failed. DOCKER GIVES: permission denied"
    );
    assert_eq!(err.exit_code(), Some(126));
    assert_eq!(err.captured_output(), Some("permission denied\n"));
}

#[test]
fn exec_error_without_output_omits_suffix() {
    let err = ComposeError::Exec { source: Box::new(exit_failure()), captured_output: "\n".into() };
    let message = err.to_string();
    assert!(message.starts_with("Error occurred: "));
    assert!(message.ends_with("OCI runtime exec failed."));
    assert!(!message.contains("DOCKER GIVES"));
}

#[test]
fn exec_error_exposes_source() {
    use std::error::Error as _;
    let err =
        ComposeError::Exec { source: Box::new(exit_failure()), captured_output: String::new() };
    let source = err.source().map(|s| s.to_string()).unwrap_or_default();
    assert!(source.contains("exit code 126"));
    assert_eq!(err.captured_output(), None);
}

#[test]
fn not_running_names_service() {
    let err = ComposeError::NotRunning("db".into());
    assert_eq!(err.to_string(), "service `db` has no running container");
    assert_eq!(err.exit_code(), None);
}

#[test]
fn usage_error_is_transparent() {
    let err = ComposeError::from(UsageError::EmptyServiceName);
    assert_eq!(err.to_string(), UsageError::EmptyServiceName.to_string());
}
