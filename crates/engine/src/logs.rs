// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `logs` operation.
//!
//! Snapshot mode waits for the group tool to exit and reformats the whole
//! output. Follow mode additionally forwards every chunk, prefix-stripped,
//! as it arrives; the process runs until killed.

use std::sync::Arc;

use berth_core::{format_snapshot, validate_service_name};
use berth_core::{LogsOptions, Notifier, PrefixStripper};
use berth_process::splitter::tap;
use berth_process::{ProcessHandle, StreamFilter};
use tokio::task::JoinHandle;

use crate::compose::Compose;
use crate::error::ComposeError;

/// A running `logs` command.
#[derive(Debug)]
pub struct LogSession {
    handle: ProcessHandle,
    target: String,
    forwarder: Option<JoinHandle<()>>,
}

impl LogSession {
    pub fn handle(&self) -> &ProcessHandle {
        &self.handle
    }

    /// Stop following. [`LogSession::finish`] then reports the kill.
    pub fn kill(&self) {
        self.handle.kill();
    }

    /// Wait for the command to exit and return the reformatted snapshot.
    ///
    /// The banner line is dropped; with a target, that service's line
    /// prefixes are stripped too. All follow-mode chunks have been delivered
    /// by the time this returns.
    pub async fn finish(self) -> Result<String, ComposeError> {
        if let Some(forwarder) = self.forwarder {
            if let Err(e) = forwarder.await {
                tracing::warn!(error = %e, "log forwarder task failed");
            }
        }
        let output = self.handle.wait().await?;
        Ok(format_snapshot(&output.stdout, &self.target))
    }
}

impl Compose {
    /// `logs [flags] [target]`, where an empty `target` means every service.
    ///
    /// With `options.follow` and an `on_data` sink, stdout and stderr chunks
    /// are forwarded as they arrive, with `target`'s prefix stripped. Must be
    /// called within a Tokio runtime.
    pub fn logs(
        &self,
        target: &str,
        options: &LogsOptions,
        on_data: Option<Notifier>,
    ) -> Result<LogSession, ComposeError> {
        if !target.is_empty() {
            validate_service_name(target)?;
        }
        let mut args = vec!["logs".to_string()];
        args.extend(options.to_args());
        if !target.is_empty() {
            args.push(target.to_string());
        }
        let handle = self.spawn(&args.join(" "));

        let forwarder = match on_data {
            Some(sink) if options.follow => {
                let sink = strip_prefixes(target, sink);
                Some(tokio::spawn(tap(&handle, StreamFilter::Both, sink)))
            }
            _ => None,
        };

        Ok(LogSession { handle, target: target.to_string(), forwarder })
    }
}

/// Wrap `sink` so each chunk loses `target`'s line prefixes.
fn strip_prefixes(target: &str, sink: Notifier) -> Notifier {
    if target.is_empty() {
        return sink;
    }
    let stripper = PrefixStripper::new(target);
    Arc::new(move |chunk: &str| sink(&stripper.strip(chunk)))
}

#[cfg(test)]
#[path = "logs_tests.rs"]
mod tests;
