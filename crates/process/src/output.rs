// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output chunks and the per-process fan-out bus.

use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::Stream;
use parking_lot::Mutex;
use tokio::sync::mpsc;

/// Which pipe a chunk was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputSource {
    Stdout,
    Stderr,
}

berth_core::simple_display! {
    OutputSource {
        Stdout => "stdout",
        Stderr => "stderr",
    }
}

/// Text read from one pipe, at most one line long.
///
/// A chunk lacks its trailing newline when the line was still being written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputChunk {
    pub source: OutputSource,
    pub text: String,
}

impl OutputChunk {
    pub fn new(source: OutputSource, text: impl Into<String>) -> Self {
        Self { source, text: text.into() }
    }

    pub fn stdout(text: impl Into<String>) -> Self {
        Self::new(OutputSource::Stdout, text)
    }

    pub fn stderr(text: impl Into<String>) -> Self {
        Self::new(OutputSource::Stderr, text)
    }
}

/// Subscription to a process's output.
///
/// Yields every chunk emitted since the process started, then live chunks,
/// and ends once both pipes have closed.
#[derive(Debug)]
pub struct OutputStream {
    rx: mpsc::UnboundedReceiver<OutputChunk>,
}

impl OutputStream {
    pub async fn next_chunk(&mut self) -> Option<OutputChunk> {
        self.rx.recv().await
    }
}

impl Stream for OutputStream {
    type Item = OutputChunk;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

/// Most bytes of recent output replayed to a new subscriber.
pub(crate) const REPLAY_LIMIT: usize = 64 * 1024;

#[derive(Default)]
struct BusState {
    history: VecDeque<OutputChunk>,
    history_bytes: usize,
    subscribers: Vec<mpsc::UnboundedSender<OutputChunk>>,
    closed: bool,
}

/// Fan-out of output chunks to any number of subscribers.
///
/// History and the subscriber list share one lock, so a subscriber never
/// duplicates a chunk or misses one published after it attached. Replay
/// covers only the most recent [`REPLAY_LIMIT`] bytes of a live process.
pub(crate) struct OutputBus {
    state: Mutex<BusState>,
    replay_limit: usize,
}

impl Default for OutputBus {
    fn default() -> Self {
        Self::with_replay_limit(REPLAY_LIMIT)
    }
}

impl OutputBus {
    pub(crate) fn with_replay_limit(replay_limit: usize) -> Self {
        Self { state: Mutex::new(BusState::default()), replay_limit }
    }

    /// A bus that already holds its full output.
    pub(crate) fn closed_with(history: Vec<OutputChunk>) -> Self {
        let history_bytes = history.iter().map(|c| c.text.len()).sum();
        let state = BusState {
            history: history.into(),
            history_bytes,
            subscribers: Vec::new(),
            closed: true,
        };
        Self { state: Mutex::new(state), replay_limit: history_bytes }
    }

    pub(crate) fn publish(&self, chunk: OutputChunk) {
        let mut state = self.state.lock();
        if state.closed {
            return;
        }
        state.subscribers.retain(|tx| tx.send(chunk.clone()).is_ok());
        state.history_bytes += chunk.text.len();
        state.history.push_back(chunk);
        while state.history_bytes > self.replay_limit {
            match state.history.pop_front() {
                Some(old) => state.history_bytes -= old.text.len(),
                None => break,
            }
        }
    }

    pub(crate) fn subscribe(&self) -> OutputStream {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut state = self.state.lock();
        for chunk in &state.history {
            let _ = tx.send(chunk.clone());
        }
        if !state.closed {
            state.subscribers.push(tx);
        }
        OutputStream { rx }
    }

    /// Stop accepting chunks; open subscriptions end after draining.
    pub(crate) fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.subscribers.clear();
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
