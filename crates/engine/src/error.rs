// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use berth_core::{GenerateError, UsageError};
use berth_process::ProcessError;
use thiserror::Error;

/// Errors from compose operations.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// The group tool (or container engine) failed to launch or exited nonzero.
    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error(transparent)]
    Usage(#[from] UsageError),

    /// `ps -q <service>` reported no container.
    #[error("service `{0}` has no running container")]
    NotRunning(String),

    /// A group-routed `exec` failed; `captured_output` is the stdout seen
    /// before the failure.
    #[error("Error occurred: {source}.{}", docker_gives(.captured_output))]
    Exec { source: Box<ComposeError>, captured_output: String },

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: std::io::Error },
}

impl ComposeError {
    /// Exit code of the underlying command, looking through `Exec`.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ComposeError::Process(e) => e.exit_code(),
            ComposeError::Exec { source, .. } => source.exit_code(),
            _ => None,
        }
    }

    /// Output captured alongside a failed `exec`, if any.
    pub fn captured_output(&self) -> Option<&str> {
        match self {
            ComposeError::Exec { captured_output, .. } if !captured_output.is_empty() => {
                Some(captured_output)
            }
            _ => None,
        }
    }
}

fn docker_gives(captured: &str) -> String {
    let captured = captured.trim_end();
    if captured.is_empty() {
        String::new()
    } else {
        format!(" DOCKER GIVES: {}", captured)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
