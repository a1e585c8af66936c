// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};

/// Options for running a command inside a service's container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExecOptions {
    /// Return once the command has started instead of waiting for it.
    ///
    /// Detached execution always addresses the container directly.
    pub detached: bool,
    /// Pass `-T` to the group tool's `exec` (no pseudo-terminal).
    pub no_tty: bool,
}

impl ExecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn detached() -> Self {
        Self { detached: true, ..Self::default() }
    }

    crate::setters! {
        set {
            no_tty: bool,
        }
    }
}
