// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handle to a spawned command.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::error::ProcessError;
use crate::output::{OutputBus, OutputChunk, OutputStream};

/// Successful completion of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Captured stdout, final newline stripped.
    pub stdout: String,
    /// Captured stderr, final newline stripped.
    pub stderr: String,
}

pub(crate) type Completion = Option<Result<ProcessOutput, ProcessError>>;

pub(crate) struct Shared {
    pub(crate) command: String,
    pub(crate) pid: Option<u32>,
    pub(crate) bus: OutputBus,
    pub(crate) cancel: CancellationToken,
    completion: watch::Receiver<Completion>,
}

/// A running (or finished) command.
///
/// Clones are views onto the same process: any of them can subscribe to
/// output, wait for completion, or kill it. Dropping every handle does not
/// stop the process; its output is still drained and discarded.
#[derive(Clone)]
pub struct ProcessHandle {
    shared: Arc<Shared>,
}

impl ProcessHandle {
    /// Handle for a freshly spawned child; the returned sender publishes completion.
    pub(crate) fn spawned(command: String, pid: Option<u32>) -> (Self, watch::Sender<Completion>) {
        let (tx, rx) = watch::channel(None);
        let shared = Shared {
            command,
            pid,
            bus: OutputBus::default(),
            cancel: CancellationToken::new(),
            completion: rx,
        };
        (Self { shared: Arc::new(shared) }, tx)
    }

    /// A handle whose output and result are already known.
    ///
    /// Used for commands that failed to launch and for test doubles.
    pub fn finished(
        command: impl Into<String>,
        output: Vec<OutputChunk>,
        result: Result<ProcessOutput, ProcessError>,
    ) -> Self {
        let (_tx, rx) = watch::channel(Some(result));
        let shared = Shared {
            command: command.into(),
            pid: None,
            bus: OutputBus::closed_with(output),
            cancel: CancellationToken::new(),
            completion: rx,
        };
        Self { shared: Arc::new(shared) }
    }

    pub(crate) fn shared(&self) -> &Arc<Shared> {
        &self.shared
    }

    /// The command line as passed to the shell.
    pub fn command(&self) -> &str {
        &self.shared.command
    }

    /// OS process id of the shell, if it was spawned.
    pub fn pid(&self) -> Option<u32> {
        self.shared.pid
    }

    /// Subscribe to output chunks (stdout and stderr, in arrival order).
    pub fn subscribe(&self) -> OutputStream {
        self.shared.bus.subscribe()
    }

    /// Wait for the command to exit.
    ///
    /// Resolves to the same value for every caller and every clone.
    pub async fn wait(&self) -> Result<ProcessOutput, ProcessError> {
        let mut rx = self.shared.completion.clone();
        let completion = match rx.wait_for(Option::is_some).await {
            Ok(value) => value.clone(),
            Err(_) => None,
        };
        completion.unwrap_or_else(|| {
            Err(ProcessError::Abandoned { command: self.shared.command.clone() })
        })
    }

    /// Whether a completion value has been published.
    pub fn is_finished(&self) -> bool {
        self.shared.completion.borrow().is_some()
    }

    /// Terminate the process (and its process group on Unix).
    ///
    /// Completion then resolves to [`ProcessError::Killed`]. No effect once
    /// the process has exited.
    pub fn kill(&self) {
        self.shared.cancel.cancel();
    }
}

impl fmt::Debug for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessHandle")
            .field("command", &self.shared.command)
            .field("pid", &self.shared.pid)
            .field("finished", &self.is_finished())
            .finish()
    }
}

#[cfg(test)]
#[path = "handle_tests.rs"]
mod tests;
