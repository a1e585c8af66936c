// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spawning commands and supervising them until exit.

use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use std::time::Instant;

use tokio::process::{Child, Command};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::error::ProcessError;
use crate::handle::{Completion, ProcessHandle, ProcessOutput, Shared};
use crate::output::OutputSource;
use crate::pipe::pump;
use crate::request::CommandRequest;

/// Spawn `request` through the platform shell, rooted at its working directory.
///
/// Never blocks: the returned handle resolves once the process exits. A
/// command that cannot even be launched yields a handle already resolved
/// with [`ProcessError::SpawnFailed`].
///
/// Must be called from within a Tokio runtime.
pub fn run(request: CommandRequest) -> ProcessHandle {
    let command = request.command_text().to_string();
    let mut process = shell(&command);
    process.current_dir(request.working_dir());
    process.stdin(Stdio::null());
    process.stdout(Stdio::piped());
    process.stderr(Stdio::piped());
    // Own process group so kill() reaches whatever the shell started.
    #[cfg(unix)]
    process.process_group(0);

    match process.spawn() {
        Ok(child) => {
            let (handle, done) = ProcessHandle::spawned(command, child.id());
            tracing::debug!(cmd = %handle.command(), pid = ?handle.pid(), "spawned");
            tokio::spawn(supervise(child, Arc::clone(handle.shared()), done));
            handle
        }
        Err(source) => {
            tracing::warn!(
                cmd = %command,
                cwd = %request.working_dir().display(),
                error = %source,
                "failed to spawn"
            );
            let error =
                ProcessError::SpawnFailed { command: command.clone(), source: Arc::new(source) };
            ProcessHandle::finished(command, Vec::new(), Err(error))
        }
    }
}

#[cfg(unix)]
fn shell(command_text: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command_text);
    cmd
}

#[cfg(windows)]
fn shell(command_text: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command_text);
    cmd
}

/// Drain both pipes, wait for exit, then publish completion.
async fn supervise(mut child: Child, shared: Arc<Shared>, done: watch::Sender<Completion>) {
    let span = tracing::info_span!(
        "process.run",
        cmd = %shared.command,
        pid = ?shared.pid,
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );

    async {
        let start = Instant::now();
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let (exit, stdout, stderr) = tokio::join!(
            wait_or_kill(&mut child, &shared.cancel),
            pump(stdout, OutputSource::Stdout, &shared.bus),
            pump(stderr, OutputSource::Stderr, &shared.bus),
        );
        shared.bus.close();

        let span = tracing::Span::current();
        if let Ok(Exit::Exited(status)) = &exit {
            if let Some(code) = status.code() {
                span.record("exit_code", code);
            }
        }
        span.record("duration_ms", start.elapsed().as_millis() as u64);

        let result = settle(&shared.command, exit, stdout, stderr);
        match &result {
            Ok(_) => tracing::debug!("command succeeded"),
            Err(e) => tracing::debug!(error = %e, "command failed"),
        }

        // Receivers may all be gone; nothing left to notify then.
        let _ = done.send(Some(result));
    }
    .instrument(span)
    .await
}

enum Exit {
    Exited(ExitStatus),
    Killed,
}

async fn wait_or_kill(child: &mut Child, cancel: &CancellationToken) -> std::io::Result<Exit> {
    tokio::select! {
        status = child.wait() => return status.map(Exit::Exited),
        () = cancel.cancelled() => {}
    }
    terminate(child);
    child.wait().await?;
    Ok(Exit::Killed)
}

#[cfg(unix)]
fn terminate(child: &mut Child) {
    use nix::sys::signal::{killpg, Signal};
    use nix::unistd::Pid;

    if let Some(pid) = child.id() {
        match killpg(Pid::from_raw(pid as i32), Signal::SIGKILL) {
            Ok(()) => return,
            Err(e) => tracing::warn!(pid, error = %e, "killpg failed, killing shell only"),
        }
    }
    if let Err(e) = child.start_kill() {
        tracing::warn!(error = %e, "kill failed");
    }
}

#[cfg(windows)]
fn terminate(child: &mut Child) {
    if let Err(e) = child.start_kill() {
        tracing::warn!(error = %e, "kill failed");
    }
}

fn settle(
    command: &str,
    exit: std::io::Result<Exit>,
    stdout: String,
    stderr: String,
) -> Result<ProcessOutput, ProcessError> {
    let stdout = strip_final_newline(stdout);
    let stderr = strip_final_newline(stderr);
    let command = command.to_string();

    let status = match exit {
        Ok(Exit::Exited(status)) => status,
        Ok(Exit::Killed) => return Err(ProcessError::Killed { command }),
        Err(e) => return Err(ProcessError::Wait { command, source: Arc::new(e) }),
    };
    match status.code() {
        Some(0) => Ok(ProcessOutput { stdout, stderr }),
        Some(exit_code) => Err(ProcessError::Failed { command, exit_code, stdout, stderr }),
        None => Err(ProcessError::Signaled { command, stdout, stderr }),
    }
}

fn strip_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
#[path = "invoker_tests.rs"]
mod tests;
