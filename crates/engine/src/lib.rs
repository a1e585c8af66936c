// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! berth-engine: Dispatching operations against a docker-compose service group
//!
//! [`Compose`] turns each logical operation into one invocation of the group
//! tool (or, for the direct-addressed paths, of the container engine) and
//! hands back either the command's output or a [`ProcessHandle`] the caller
//! can observe and kill.
//!
//! [`ProcessHandle`]: berth_process::ProcessHandle

mod compose;
mod config;
pub mod env;
mod error;
mod exec;
mod generate;
mod lifecycle;
mod logs;
mod resolver;

#[cfg(test)]
mod test_support;

pub use compose::Compose;
pub use config::ComposeConfig;
pub use error::ComposeError;
pub use exec::{select_strategy, DirectAddressed, ExecStrategy, GroupRouted};
pub use generate::CONFIG_FILE_NAME;
pub use lifecycle::Lifecycle;
pub use logs::LogSession;

pub use berth_core::{
    notifier, BuildSpec, Call, CallShape, ComposeFile, ExecOptions, LogsOptions, Notifier,
    ServiceDescriptor, ServiceSpec,
};
pub use berth_process::{OutputChunk, OutputSource, ProcessError, ProcessHandle};
