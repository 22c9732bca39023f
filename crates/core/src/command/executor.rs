//! Blocking execution of check commands with a hard timeout

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::CheckCommand;
use crate::types::Outcome;

/// How long to wait for a pipe reader once the child has been reaped.
/// A grandchild that inherited the pipe can keep it open after a normal exit.
const READER_GRACE: Duration = Duration::from_secs(2);

/// Runs a single command to completion and classifies what happened.
///
/// Implementations must not return before the spawned process has been
/// waited on or killed.
pub trait Executor {
    fn execute(&self, command: &CheckCommand, timeout: Duration) -> Outcome;
}

/// Executes commands as real child processes
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    poll_interval: Duration,
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(50),
        }
    }
}

impl ProcessExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

impl Executor for ProcessExecutor {
    fn execute(&self, command: &CheckCommand, timeout: Duration) -> Outcome {
        let shell_cmd = command.to_shell_command();
        debug!("Spawning: {}", shell_cmd);

        let mut process = command.to_process_command();
        own_process_group(&mut process);

        let mut child = match process
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                debug!("Failed to spawn {}: {}", shell_cmd, e);
                return Outcome::Error(e.to_string());
            }
        };

        let stdout = spawn_reader(child.stdout.take());
        let stderr = spawn_reader(child.stderr.take());
        // Too far in the future to represent means no deadline at all
        let deadline = Instant::now().checked_add(timeout);

        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    let now = Instant::now();
                    let remaining = match deadline {
                        Some(deadline) => deadline.saturating_duration_since(now),
                        None => Duration::MAX,
                    };
                    if remaining.is_zero() {
                        warn!("{} exceeded {:?}, killing pid {}", shell_cmd, timeout, child.id());
                        kill_tree(&mut child);
                        if let Err(e) = child.wait() {
                            warn!("Failed to reap pid {}: {}", child.id(), e);
                        }
                        // Drop whatever partial output the readers managed to collect
                        let _ = collect(stdout);
                        let _ = collect(stderr);
                        return Outcome::TimedOut { after: timeout };
                    }
                    thread::sleep(self.poll_interval.min(remaining));
                }
                Err(e) => {
                    warn!("Failed to poll {}: {}", shell_cmd, e);
                    kill_tree(&mut child);
                    let _ = child.wait();
                    return Outcome::Error(e.to_string());
                }
            }
        };

        let stdout = collect(stdout);
        let stderr = collect(stderr);
        debug!("{} exited with {:?}", shell_cmd, status.code());

        if status.success() {
            Outcome::Passed { stdout }
        } else {
            Outcome::Failed {
                code: status.code(),
                stderr,
            }
        }
    }
}

/// Start the child as leader of a new process group, so a timeout can
/// take down everything it spawned (rustc, test binaries, clippy-driver).
#[cfg(unix)]
fn own_process_group(command: &mut Command) {
    use std::os::unix::process::CommandExt;
    command.process_group(0);
}

#[cfg(not(unix))]
fn own_process_group(_command: &mut Command) {}

/// Kill the child's whole process group, falling back to the child alone.
#[cfg(unix)]
fn kill_tree(child: &mut Child) {
    let group = format!("-{}", child.id());
    match Command::new("kill")
        .args(["-KILL", "--", &group])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
    {
        Ok(status) if status.success() => return,
        Ok(status) => warn!("kill {} exited with {:?}", group, status.code()),
        Err(e) => warn!("Failed to run kill for group {}: {}", group, e),
    }
    if let Err(e) = child.kill() {
        warn!("Failed to kill pid {}: {}", child.id(), e);
    }
}

#[cfg(not(unix))]
fn kill_tree(child: &mut Child) {
    if let Err(e) = child.kill() {
        warn!("Failed to kill pid {}: {}", child.id(), e);
    }
}

fn spawn_reader<R>(source: Option<R>) -> Receiver<String>
where
    R: Read + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    if let Some(mut source) = source {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = source.read_to_end(&mut buf);
            let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
        });
    }
    rx
}

fn collect(rx: Receiver<String>) -> String {
    rx.recv_timeout(READER_GRACE).unwrap_or_default()
}
