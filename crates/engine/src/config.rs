// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::env;

/// Settings fixed when a [`Compose`](crate::Compose) is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeConfig {
    /// Directory every group-tool command runs in.
    pub working_dir: PathBuf,
    /// Group tool command line, e.g. `docker-compose` or `docker compose`.
    pub program: String,
    /// Whether the group tool's `exec` can complete without a terminal.
    ///
    /// When false, every `exec` is addressed to the container directly.
    pub detached_exec_supported: bool,
}

impl ComposeConfig {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            program: env::DEFAULT_PROGRAM.to_string(),
            detached_exec_supported: !cfg!(windows),
        }
    }

    /// Read `COMPOSE_CWD` and `COMPOSE_BIN`.
    pub fn from_env() -> Self {
        Self::new(env::compose_cwd()).program(env::compose_bin())
    }

    berth_core::setters! {
        into {
            working_dir: PathBuf,
            program: String,
        }
        set {
            detached_exec_supported: bool,
        }
    }
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
