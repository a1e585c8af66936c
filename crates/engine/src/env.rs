// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the engine crate.

use std::path::PathBuf;

/// Group tool invoked when `COMPOSE_BIN` is unset.
pub const DEFAULT_PROGRAM: &str = "docker-compose";

/// Working directory for group-tool commands: COMPOSE_CWD > current directory
pub fn compose_cwd() -> PathBuf {
    if let Some(dir) = std::env::var("COMPOSE_CWD").ok().filter(|s| !s.is_empty()) {
        return PathBuf::from(dir);
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Group tool command line (may include leading arguments, e.g. `docker compose`)
pub fn compose_bin() -> String {
    std::env::var("COMPOSE_BIN")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
