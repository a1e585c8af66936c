//! Shared fixtures.

#![allow(dead_code)]

use std::path::Path;

pub use std::sync::Arc;

pub use berth_engine::{
    notifier, Call, Compose, ComposeConfig, ComposeError, ExecOptions, LogsOptions, Notifier,
    ProcessError,
};
pub use parking_lot::Mutex;

/// A project directory with a scripted `compose` tool.
///
/// The script logs every argument list to `calls`, then runs its body.
pub struct Stack {
    dir: tempfile::TempDir,
}

impl Stack {
    pub fn new(body: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let script = format!("echo \"$*\" >> \"$(dirname \"$0\")/calls\"\n{body}\n");
        std::fs::write(dir.path().join("compose"), script).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> ComposeConfig {
        let script = self.dir.path().join("compose");
        ComposeConfig::new(self.dir.path())
            .program(format!("sh '{}'", script.display()))
            .detached_exec_supported(true)
    }

    pub fn compose(&self) -> Compose {
        Compose::new(self.config())
    }

    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.dir.path().join("calls"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// An ordered log of notifications and completions.
#[derive(Clone, Default)]
pub struct Timeline(Arc<Mutex<Vec<String>>>);

impl Timeline {
    pub fn notifier(&self, tag: &'static str) -> Notifier {
        let events = Arc::clone(&self.0);
        notifier(move |text| events.lock().push(format!("{tag}:{}", text.trim_end())))
    }

    pub fn push(&self, event: impl Into<String>) {
        self.0.lock().push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.0.lock().clone()
    }
}
