// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use berth_core::ExecOptions;
use berth_process::{CommandRequest, ProcessHandle};

use super::{shell_quote, ContainerEngine};

/// [`ContainerEngine`] backed by the `docker` CLI.
#[derive(Debug, Clone)]
pub struct DockerCli {
    program: String,
    working_dir: PathBuf,
}

impl Default for DockerCli {
    fn default() -> Self {
        Self::new()
    }
}

impl DockerCli {
    pub fn new() -> Self {
        Self { program: "docker".to_string(), working_dir: std::env::temp_dir() }
    }

    berth_core::setters! {
        into {
            program: String,
            working_dir: PathBuf,
        }
    }

    pub(crate) fn exec_command(
        &self,
        container_id: &str,
        command: &str,
        options: &ExecOptions,
    ) -> String {
        let detach = if options.detached { " -d" } else { "" };
        format!("{} exec{} {} {}", self.program, detach, container_id, command)
    }

    pub(crate) fn copy_command(&self, container_id: &str, src: &str, dst: &str) -> String {
        let dst = format!("{}:{}", container_id, dst);
        format!("{} cp {} {}", self.program, shell_quote(src), shell_quote(&dst))
    }

    fn spawn(&self, command_text: String) -> ProcessHandle {
        tracing::debug!(cmd = %command_text, "docker");
        CommandRequest::new(&self.working_dir, command_text).run()
    }
}

impl ContainerEngine for DockerCli {
    fn exec(&self, container_id: &str, command: &str, options: &ExecOptions) -> ProcessHandle {
        self.spawn(self.exec_command(container_id, command, options))
    }

    fn copy(&self, container_id: &str, src: &str, dst: &str) -> ProcessHandle {
        self.spawn(self.copy_command(container_id, src, dst))
    }
}

#[cfg(test)]
#[path = "docker_tests.rs"]
mod tests;
