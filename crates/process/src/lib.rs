// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! berth-process: Spawning shell commands and observing their output
//!
//! Every command runs as one child process. The returned [`ProcessHandle`]
//! exposes two independent signals:
//!
//! - [`ProcessHandle::subscribe`]: a stream of output chunks, replaying
//!   anything emitted before the subscription
//! - [`ProcessHandle::wait`]: the one-shot completion value
//!
//! All chunks reach subscribers before the completion value is published.

mod error;
mod handle;
mod invoker;
mod output;
mod pipe;
mod request;
pub mod splitter;

pub use error::ProcessError;
pub use handle::{ProcessHandle, ProcessOutput};
pub use invoker::run;
pub use output::{OutputChunk, OutputSource, OutputStream};
pub use request::CommandRequest;
pub use splitter::StreamFilter;
