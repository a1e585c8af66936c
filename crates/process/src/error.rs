// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process failure taxonomy.

use std::sync::Arc;

/// Why a spawned command did not complete successfully.
///
/// Cloneable so every clone of a [`crate::ProcessHandle`] can observe the
/// same completion value.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProcessError {
    /// The shell itself could not be started (missing binary, bad working directory).
    #[error("failed to spawn `{command}`: {source}")]
    SpawnFailed { command: String, source: Arc<std::io::Error> },

    /// The command ran and exited with a non-zero status.
    #[error("command `{command}` failed with exit code {exit_code}{}", detail(.stderr, .stdout))]
    Failed { command: String, exit_code: i32, stdout: String, stderr: String },

    /// The command was terminated through [`crate::ProcessHandle::kill`].
    #[error("command `{command}` was killed")]
    Killed { command: String },

    /// The command was terminated by a signal it did not get from us.
    #[error("command `{command}` terminated by signal")]
    Signaled { command: String, stdout: String, stderr: String },

    /// Waiting on the child failed.
    #[error("failed waiting for `{command}`: {source}")]
    Wait { command: String, source: Arc<std::io::Error> },

    /// The supervising task went away before publishing a result.
    #[error("lost track of `{command}` before it exited")]
    Abandoned { command: String },
}

impl ProcessError {
    /// The command line this error belongs to.
    pub fn command(&self) -> &str {
        match self {
            ProcessError::SpawnFailed { command, .. }
            | ProcessError::Failed { command, .. }
            | ProcessError::Killed { command }
            | ProcessError::Signaled { command, .. }
            | ProcessError::Wait { command, .. }
            | ProcessError::Abandoned { command } => command,
        }
    }

    /// Exit code, when the command ran to completion.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ProcessError::Failed { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }

    /// True when the command never started.
    pub fn is_launch_failure(&self) -> bool {
        matches!(self, ProcessError::SpawnFailed { .. })
    }
}

/// Diagnostic suffix: stderr if there is any, else stdout.
fn detail(stderr: &str, stdout: &str) -> String {
    let text = if stderr.trim().is_empty() { stdout } else { stderr };
    let text = text.trim();
    if text.is_empty() {
        String::new()
    } else {
        format!(": {}", text)
    }
}
