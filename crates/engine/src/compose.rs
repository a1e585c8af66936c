// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command dispatcher.
//!
//! Every group-tool operation funnels through [`Compose::spawn`]: the
//! operation's arguments are appended to the configured program and run in
//! the configured working directory. [`Compose::run`] and
//! [`Compose::dispatch`] layer the notifier and completion on top, always
//! draining notifications before the result is delivered.

use std::fmt;
use std::sync::Arc;

use berth_adapters::{ContainerEngine, DockerCli};
use berth_core::Notifier;
use berth_process::splitter::tap;
use berth_process::{CommandRequest, ProcessHandle, StreamFilter};

use crate::config::ComposeConfig;
use crate::error::ComposeError;

/// A docker-compose service group rooted at one working directory.
///
/// Cheap to clone; clones share the container engine.
#[derive(Clone)]
pub struct Compose {
    config: ComposeConfig,
    engine: Arc<dyn ContainerEngine>,
}

impl Compose {
    /// Dispatcher using the `docker` CLI for direct-addressed operations.
    pub fn new(config: ComposeConfig) -> Self {
        let engine = DockerCli::new().working_dir(config.working_dir.clone());
        Self { config, engine: Arc::new(engine) }
    }

    /// Dispatcher configured from `COMPOSE_CWD` and `COMPOSE_BIN`.
    pub fn from_env() -> Self {
        Self::new(ComposeConfig::from_env())
    }

    /// Replace the container engine used by `cp` and direct-addressed `exec`.
    pub fn with_engine(mut self, engine: Arc<dyn ContainerEngine>) -> Self {
        self.engine = engine;
        self
    }

    pub fn config(&self) -> &ComposeConfig {
        &self.config
    }

    pub(crate) fn engine(&self) -> &dyn ContainerEngine {
        self.engine.as_ref()
    }

    /// Full command line for group-tool `args`.
    pub fn command_line(&self, args: &str) -> String {
        let args = args.trim();
        if args.is_empty() {
            self.config.program.clone()
        } else {
            format!("{} {}", self.config.program, args)
        }
    }

    /// Start the group tool with `args` and return its handle.
    pub fn spawn(&self, args: &str) -> ProcessHandle {
        let command_text = self.command_line(args);
        tracing::debug!(
            cmd = %command_text,
            dir = %self.config.working_dir.display(),
            "dispatching compose command"
        );
        CommandRequest::new(&self.config.working_dir, command_text).run()
    }

    /// Run the group tool with `args` to completion.
    ///
    /// Every stdout and stderr chunk is forwarded to `notify` before this
    /// returns. Resolves to the command's stdout (final newline stripped).
    pub async fn run(&self, args: &str, notify: Option<&Notifier>) -> Result<String, ComposeError> {
        let handle = self.spawn(args);
        settle(handle, notify.cloned()).await
    }

    /// Callback form of [`Compose::run`].
    ///
    /// Returns immediately with the handle; `callback` is invoked exactly once
    /// from a spawned task after every notification has been delivered.
    /// Must be called within a Tokio runtime.
    pub fn dispatch<F>(&self, args: &str, notify: Option<Notifier>, callback: F) -> ProcessHandle
    where
        F: FnOnce(Result<String, ComposeError>) + Send + 'static,
    {
        let handle = self.spawn(args);
        let completion = settle(handle.clone(), notify);
        tokio::spawn(async move {
            callback(completion.await);
        });
        handle
    }
}

/// Drain `notify` (if any), then resolve `handle`'s completion to its stdout.
///
/// The notifier subscribes before this returns, so a caller that spawns the
/// returned future later still sees every chunk.
pub(crate) fn settle(
    handle: ProcessHandle,
    notify: Option<Notifier>,
) -> impl std::future::Future<Output = Result<String, ComposeError>> + Send + 'static {
    let forward = notify.map(|sink| tap(&handle, StreamFilter::Both, sink));
    async move {
        if let Some(forward) = forward {
            forward.await;
        }
        match handle.wait().await {
            Ok(output) => Ok(output.stdout),
            Err(e) => {
                tracing::warn!(cmd = %handle.command(), error = %e, "compose command failed");
                Err(e.into())
            }
        }
    }
}

impl fmt::Debug for Compose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compose").field("config", &self.config).finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "compose_tests.rs"]
mod tests;
