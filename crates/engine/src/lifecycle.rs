// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle operations and group introspection.

use berth_core::{Call, ResolvedCall};
use berth_process::ProcessHandle;

use crate::compose::Compose;
use crate::error::ComposeError;

/// Group-tool verbs that accept the group or one service as target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Create and start containers, detached.
    Up,
    Down,
    Start,
    Stop,
    Restart,
    /// List containers.
    Ps,
}

berth_core::simple_display! {
    Lifecycle {
        Up => "up",
        Down => "down",
        Start => "start",
        Stop => "stop",
        Restart => "restart",
        Ps => "ps",
    }
}

impl Lifecycle {
    fn flags(self) -> &'static [&'static str] {
        match self {
            Lifecycle::Up => &["-d"],
            _ => &[],
        }
    }

    /// Group-tool arguments for this verb applied to `target` (empty = whole group).
    pub fn args(self, target: &str) -> String {
        let verb = self.to_string();
        let mut args = vec![verb.as_str()];
        args.extend(self.flags());
        if !target.is_empty() {
            args.push(target);
        }
        args.join(" ")
    }
}

impl Compose {
    /// Callback form of the lifecycle operations.
    ///
    /// An invalid call shape is rejected before anything is spawned.
    pub fn launch<F>(
        &self,
        op: Lifecycle,
        call: impl Into<Call>,
        callback: F,
    ) -> Result<ProcessHandle, ComposeError>
    where
        F: FnOnce(Result<String, ComposeError>) + Send + 'static,
    {
        let ResolvedCall { target, notify } = call.into().resolve()?;
        Ok(self.dispatch(&op.args(&target), notify, callback))
    }

    async fn lifecycle(&self, op: Lifecycle, call: Call) -> Result<String, ComposeError> {
        let ResolvedCall { target, notify } = call.resolve()?;
        self.run(&op.args(&target), notify.as_ref()).await
    }

    /// `up -d [service]`
    pub async fn up(&self, call: impl Into<Call>) -> Result<String, ComposeError> {
        self.lifecycle(Lifecycle::Up, call.into()).await
    }

    /// `down [service]`
    pub async fn down(&self, call: impl Into<Call>) -> Result<String, ComposeError> {
        self.lifecycle(Lifecycle::Down, call.into()).await
    }

    /// `start [service]`
    pub async fn start(&self, call: impl Into<Call>) -> Result<String, ComposeError> {
        self.lifecycle(Lifecycle::Start, call.into()).await
    }

    /// `stop [service]`
    pub async fn stop(&self, call: impl Into<Call>) -> Result<String, ComposeError> {
        self.lifecycle(Lifecycle::Stop, call.into()).await
    }

    /// `restart [service]`
    pub async fn restart(&self, call: impl Into<Call>) -> Result<String, ComposeError> {
        self.lifecycle(Lifecycle::Restart, call.into()).await
    }

    /// `ps [service]`
    pub async fn ps(&self, call: impl Into<Call>) -> Result<String, ComposeError> {
        self.lifecycle(Lifecycle::Ps, call.into()).await
    }

    /// Service names declared in the configuration, in declaration order.
    pub async fn names(&self) -> Result<Vec<String>, ComposeError> {
        let output = self.run("config --services", None).await?;
        Ok(output.split_whitespace().map(str::to_string).collect())
    }

    /// The group tool's version report.
    pub async fn version(&self) -> Result<String, ComposeError> {
        self.run("version", None).await
    }

    /// The resolved configuration document.
    pub async fn config_text(&self) -> Result<String, ComposeError> {
        self.run("config", None).await
    }

    /// Whether any service in the group has a container.
    pub async fn is_running(&self) -> Result<bool, ComposeError> {
        let ids = self.run("ps -q", None).await?;
        Ok(!ids.trim().is_empty())
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
