// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A scripted stand-in for the group tool.

use std::path::PathBuf;
use std::sync::Arc;

use berth_core::{notifier, Notifier};
use parking_lot::Mutex;
use tempfile::TempDir;

use crate::{Compose, ComposeConfig};

/// A temp directory holding a `compose` shell script that appends its
/// arguments to `calls` and then runs `body` (with `$*` available).
pub(crate) struct FakeCompose {
    dir: TempDir,
}

impl FakeCompose {
    pub(crate) fn new(body: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let script = format!("echo \"$*\" >> \"$(dirname \"$0\")/calls\"\n{}\n", body);
        std::fs::write(dir.path().join("compose"), script).unwrap();
        Self { dir }
    }

    pub(crate) fn dir(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    pub(crate) fn config(&self) -> ComposeConfig {
        let script = self.dir.path().join("compose");
        ComposeConfig::new(self.dir.path())
            .program(format!("sh '{}'", script.display()))
            .detached_exec_supported(true)
    }

    pub(crate) fn compose(&self) -> Compose {
        Compose::new(self.config())
    }

    /// Argument lists the script has been invoked with, in order.
    pub(crate) fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.dir.path().join("calls"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// A notifier that records every chunk it receives.
pub(crate) fn recorder() -> (Notifier, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (notifier(move |text| sink.lock().push(text.to_string())), seen)
}
