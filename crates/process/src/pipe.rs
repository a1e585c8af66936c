// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reading one child pipe: chunk decoding and bounded capture.
//!
//! Text is published as soon as it is read, newline or not. Each read is
//! split after every `\n` so a chunk never spans two lines it was not
//! written with.

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::output::{OutputBus, OutputChunk, OutputSource};

const READ_BUF: usize = 8 * 1024;

/// Most bytes of one pipe kept for the completion value.
pub(crate) const CAPTURE_LIMIT: usize = 16 * 1024 * 1024;

/// Forward one pipe to the bus until EOF; returns the captured text.
pub(crate) async fn pump<R: AsyncRead + Unpin>(
    reader: Option<R>,
    source: OutputSource,
    bus: &OutputBus,
) -> String {
    let mut capture = Capture::new(CAPTURE_LIMIT);
    let Some(mut reader) = reader else {
        return capture.into_text();
    };
    let mut decoder = Utf8Chunker::default();
    let mut buf = [0u8; READ_BUF];
    loop {
        match reader.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => {
                for text in decoder.feed(&buf[..n]) {
                    capture.push(&text);
                    bus.publish(OutputChunk::new(source, text));
                }
            }
            Err(e) => {
                tracing::warn!(%source, error = %e, "reading output failed");
                break;
            }
        }
    }
    if let Some(text) = decoder.finish() {
        capture.push(&text);
        bus.publish(OutputChunk::new(source, text));
    }
    if capture.truncated {
        tracing::warn!(%source, limit = CAPTURE_LIMIT, "captured output truncated");
    }
    capture.into_text()
}

/// Turns raw reads into text chunks without splitting a UTF-8 sequence.
#[derive(Debug, Default)]
pub(crate) struct Utf8Chunker {
    pending: Vec<u8>,
}

impl Utf8Chunker {
    /// Decode `bytes` (plus any carried tail) into line-bounded chunks.
    ///
    /// An incomplete multi-byte sequence at the end is held for the next call.
    pub(crate) fn feed(&mut self, bytes: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(bytes);
        let keep = incomplete_tail(&self.pending);
        let split = self.pending.len() - keep;
        let complete: Vec<u8> = self.pending.drain(..split).collect();
        if complete.is_empty() {
            return Vec::new();
        }
        String::from_utf8_lossy(&complete).split_inclusive('\n').map(str::to_string).collect()
    }

    /// Whatever is still held at EOF, decoded lossily.
    pub(crate) fn finish(self) -> Option<String> {
        if self.pending.is_empty() {
            None
        } else {
            Some(String::from_utf8_lossy(&self.pending).into_owned())
        }
    }
}

/// Length of a truncated UTF-8 sequence at the end of `bytes`, or 0.
fn incomplete_tail(bytes: &[u8]) -> usize {
    for back in 1..=bytes.len().min(3) {
        let byte = bytes[bytes.len() - back];
        if byte & 0b1100_0000 == 0b1000_0000 {
            continue;
        }
        let width = match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        return if width > back { back } else { 0 };
    }
    0
}

/// Accumulates text up to a byte limit, keeping the head.
#[derive(Debug)]
pub(crate) struct Capture {
    text: String,
    limit: usize,
    truncated: bool,
}

impl Capture {
    pub(crate) fn new(limit: usize) -> Self {
        Self { text: String::new(), limit, truncated: false }
    }

    pub(crate) fn push(&mut self, chunk: &str) {
        let room = self.limit - self.text.len();
        if chunk.len() <= room {
            self.text.push_str(chunk);
            return;
        }
        let mut end = room;
        while !chunk.is_char_boundary(end) {
            end -= 1;
        }
        self.text.push_str(&chunk[..end]);
        self.truncated = true;
    }

    pub(crate) fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
#[path = "pipe_tests.rs"]
mod tests;
