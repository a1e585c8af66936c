// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Running commands inside a service's container.
//!
//! Two paths exist. [`GroupRouted`] goes through the group tool's `exec`,
//! which resolves the service itself but cannot complete detached on every
//! platform. [`DirectAddressed`] resolves the container id first and calls
//! the container engine. [`select_strategy`] picks one per call from the
//! configured capability flag and the caller's options.

use async_trait::async_trait;
use berth_core::{validate_service_name, ExecOptions, Notifier};
use berth_process::splitter::{collect, tap};
use berth_process::StreamFilter;

use crate::compose::Compose;
use crate::error::ComposeError;

/// One way of running a command in a service's container.
#[async_trait]
pub trait ExecStrategy: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Run `command` in `service`, forwarding stdout to `notify`.
    async fn exec(
        &self,
        compose: &Compose,
        service: &str,
        command: &str,
        options: &ExecOptions,
        notify: Option<Notifier>,
    ) -> Result<String, ComposeError>;
}

/// `docker-compose exec [-T] <service> <command>`.
///
/// Stdout is also accumulated privately; on failure it is attached to the
/// error as `captured_output`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupRouted;

/// `ps -q <service>`, then the container engine's `exec`.
///
/// A resolution failure is returned as-is and the engine is never called.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectAddressed;

static GROUP_ROUTED: GroupRouted = GroupRouted;
static DIRECT_ADDRESSED: DirectAddressed = DirectAddressed;

/// Group-routed when the platform supports it and the caller did not ask
/// for detached execution; direct-addressed otherwise.
pub fn select_strategy(
    detached_exec_supported: bool,
    options: &ExecOptions,
) -> &'static dyn ExecStrategy {
    if detached_exec_supported && !options.detached {
        &GROUP_ROUTED
    } else {
        &DIRECT_ADDRESSED
    }
}

#[async_trait]
impl ExecStrategy for GroupRouted {
    fn name(&self) -> &'static str {
        "group-routed"
    }

    async fn exec(
        &self,
        compose: &Compose,
        service: &str,
        command: &str,
        options: &ExecOptions,
        notify: Option<Notifier>,
    ) -> Result<String, ComposeError> {
        let mut args = vec!["exec"];
        if options.no_tty {
            args.push("-T");
        }
        args.extend([service, command]);
        let handle = compose.spawn(&args.join(" "));

        let captured = collect(&handle, StreamFilter::Stdout);
        let forward = notify.map(|sink| tap(&handle, StreamFilter::Stdout, sink));
        let (captured_output, ()) = tokio::join!(captured, async {
            if let Some(forward) = forward {
                forward.await;
            }
        });

        match handle.wait().await {
            Ok(output) => Ok(output.stdout),
            Err(e) => {
                tracing::warn!(service, cmd = %handle.command(), error = %e, "exec failed");
                Err(ComposeError::Exec { source: Box::new(e.into()), captured_output })
            }
        }
    }
}

#[async_trait]
impl ExecStrategy for DirectAddressed {
    fn name(&self) -> &'static str {
        "direct-addressed"
    }

    async fn exec(
        &self,
        compose: &Compose,
        service: &str,
        command: &str,
        options: &ExecOptions,
        notify: Option<Notifier>,
    ) -> Result<String, ComposeError> {
        let id = compose.resolve_running(service).await?;
        let handle = compose.engine().exec(&id, command, options);
        if let Some(sink) = notify {
            tap(&handle, StreamFilter::Stdout, sink).await;
        }
        Ok(handle.wait().await?.stdout)
    }
}

impl Compose {
    /// Run `command` inside `service`'s container.
    ///
    /// See [`select_strategy`] for how the path is chosen.
    pub async fn exec(
        &self,
        service: &str,
        command: &str,
        options: ExecOptions,
        notify: Option<Notifier>,
    ) -> Result<String, ComposeError> {
        validate_service_name(service)?;
        let strategy = select_strategy(self.config().detached_exec_supported, &options);
        tracing::debug!(service, command, strategy = strategy.name(), "exec");
        strategy.exec(self, service, command, &options, notify).await
    }
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
