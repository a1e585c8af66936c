// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Forwarding a process's output to notifiers.
//!
//! Both helpers subscribe synchronously, so nothing emitted after the call
//! returns (or before it, thanks to replay) is missed. The returned futures
//! finish when the process's pipes close, which always happens before the
//! handle's completion value is published.

use std::future::Future;

use berth_core::Notifier;
use futures_util::StreamExt;

use crate::handle::ProcessHandle;
use crate::output::OutputSource;

/// Which pipes to forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamFilter {
    Stdout,
    Stderr,
    Both,
}

impl StreamFilter {
    pub fn accepts(self, source: OutputSource) -> bool {
        match self {
            StreamFilter::Both => true,
            StreamFilter::Stdout => source == OutputSource::Stdout,
            StreamFilter::Stderr => source == OutputSource::Stderr,
        }
    }
}

/// Forward every chunk accepted by `filter` to `sink`.
pub fn tap(
    handle: &ProcessHandle,
    filter: StreamFilter,
    sink: Notifier,
) -> impl Future<Output = ()> + Send + 'static {
    let mut stream = handle.subscribe();
    async move {
        while let Some(chunk) = stream.next().await {
            if filter.accepts(chunk.source) {
                sink(&chunk.text);
            }
        }
    }
}

/// Accumulate every chunk accepted by `filter`.
pub fn collect(
    handle: &ProcessHandle,
    filter: StreamFilter,
) -> impl Future<Output = String> + Send + 'static {
    let mut stream = handle.subscribe();
    async move {
        let mut text = String::new();
        while let Some(chunk) = stream.next().await {
            if filter.accepts(chunk.source) {
                text.push_str(&chunk.text);
            }
        }
        text
    }
}

#[cfg(test)]
#[path = "splitter_tests.rs"]
mod tests;
