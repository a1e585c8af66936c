// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recording container engine for tests.

use std::sync::Arc;

use berth_core::ExecOptions;
use berth_process::{OutputChunk, ProcessError, ProcessHandle, ProcessOutput};
use parking_lot::Mutex;

use super::ContainerEngine;

/// A call observed by [`FakeContainerEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Exec { container_id: String, command: String, options: ExecOptions },
    Copy { container_id: String, src: String, dst: String },
}

#[derive(Clone)]
struct Scripted {
    output: Vec<OutputChunk>,
    result: Result<ProcessOutput, ProcessError>,
}

impl Default for Scripted {
    fn default() -> Self {
        Self {
            output: Vec::new(),
            result: Ok(ProcessOutput { stdout: String::new(), stderr: String::new() }),
        }
    }
}

/// [`ContainerEngine`] that records calls and replays scripted results.
#[derive(Clone, Default)]
pub struct FakeContainerEngine {
    calls: Arc<Mutex<Vec<EngineCall>>>,
    exec: Arc<Mutex<Scripted>>,
    copy: Arc<Mutex<Scripted>>,
}

impl FakeContainerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script every `exec` to emit `output` and resolve with `result`.
    pub fn on_exec(
        self,
        output: Vec<OutputChunk>,
        result: Result<ProcessOutput, ProcessError>,
    ) -> Self {
        *self.exec.lock() = Scripted { output, result };
        self
    }

    /// Script every `copy` to resolve with `result`.
    pub fn on_copy(self, result: Result<ProcessOutput, ProcessError>) -> Self {
        *self.copy.lock() = Scripted { output: Vec::new(), result };
        self
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().clone()
    }

    fn replay(command: String, scripted: &Mutex<Scripted>) -> ProcessHandle {
        let Scripted { output, result } = scripted.lock().clone();
        ProcessHandle::finished(command, output, result)
    }
}

impl ContainerEngine for FakeContainerEngine {
    fn exec(&self, container_id: &str, command: &str, options: &ExecOptions) -> ProcessHandle {
        self.calls.lock().push(EngineCall::Exec {
            container_id: container_id.to_string(),
            command: command.to_string(),
            options: *options,
        });
        Self::replay(format!("exec {} {}", container_id, command), &self.exec)
    }

    fn copy(&self, container_id: &str, src: &str, dst: &str) -> ProcessHandle {
        self.calls.lock().push(EngineCall::Copy {
            container_id: container_id.to_string(),
            src: src.to_string(),
            dst: dst.to_string(),
        });
        Self::replay(format!("cp {} {}:{}", src, container_id, dst), &self.copy)
    }
}
