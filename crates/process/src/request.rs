// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use crate::handle::ProcessHandle;

/// A command line and the directory it runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    working_dir: PathBuf,
    command_text: String,
}

impl CommandRequest {
    pub fn new(working_dir: impl Into<PathBuf>, command_text: impl Into<String>) -> Self {
        Self { working_dir: working_dir.into(), command_text: command_text.into() }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn command_text(&self) -> &str {
        &self.command_text
    }

    /// Spawn the command. See [`crate::run`].
    pub fn run(self) -> ProcessHandle {
        crate::invoker::run(self)
    }
}
