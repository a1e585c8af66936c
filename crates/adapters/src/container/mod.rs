// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container engine adapters.
//!
//! The group tool resolves services itself; these primitives instead take a
//! container id (from `ps -q <service>`) and talk to the engine directly.
//! Both return a [`ProcessHandle`] with the same output and completion
//! signals as group-tool commands.

mod docker;

pub use docker::DockerCli;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{EngineCall, FakeContainerEngine};

use berth_core::ExecOptions;
use berth_process::ProcessHandle;

/// Operations on one container, addressed by id.
pub trait ContainerEngine: Send + Sync + 'static {
    /// Run `command` inside the container.
    ///
    /// With `options.detached`, completion resolves once the command has
    /// been started.
    fn exec(&self, container_id: &str, command: &str, options: &ExecOptions) -> ProcessHandle;

    /// Copy `src` on the host to `dst` inside the container.
    fn copy(&self, container_id: &str, src: &str, dst: &str) -> ProcessHandle;
}

/// Quote `arg` for a POSIX shell, leaving plain words untouched.
pub fn shell_quote(arg: &str) -> String {
    let plain = |c: char| c.is_ascii_alphanumeric() || "_./:@%+=,-".contains(c);
    if !arg.is_empty() && arg.chars().all(plain) {
        return arg.to_string();
    }
    // The '\'' idiom: end quote, escaped quote, start quote
    format!("'{}'", arg.replace('\'', r"'\''"))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
