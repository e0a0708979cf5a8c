//! Runs `git` as a child process.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use sprout_core::application::ports::{CommandFailure, CommandRunner};
use tracing::{debug, instrument};

/// How long one git step may run before it is killed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// [`CommandRunner`] backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitRunner {
    program: PathBuf,
    timeout: Duration,
}

impl GitRunner {
    /// Run `git` from `PATH` with the default timeout.
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("git"),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a different executable (tests, non-standard installs).
    #[must_use]
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn spawn(&self, dir: &Path, args: &[String]) -> io::Result<Child> {
        Command::new(&self.program)
            .args(args)
            .current_dir(dir)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
    }
}

impl Default for GitRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for GitRunner {
    #[instrument(skip(self), fields(timeout_secs = self.timeout.as_secs()))]
    fn run(&self, dir: &Path, args: &[String]) -> Result<(), CommandFailure> {
        let mut child = self.spawn(dir, args).map_err(|e| CommandFailure {
            reason: if e.kind() == io::ErrorKind::NotFound {
                format!("{} not found: {e}", self.program.display())
            } else {
                format!("failed to start {}: {e}", self.program.display())
            },
            output: String::new(),
        })?;

        // Drain both pipes so a chatty child never blocks on a full buffer.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let started = Instant::now();
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break Ok(status),
                Ok(None) if started.elapsed() >= self.timeout => {
                    let _ = child.kill();
                    let _ = child.wait();
                    break Err(format!("timed out after {}s", self.timeout.as_secs()));
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    break Err(format!("failed to wait for {}: {e}", self.program.display()));
                }
            }
        };

        // A killed child's own children may still hold the pipes open.
        let finished = status.is_ok();
        let output = combine(collect(stdout, finished), &collect(stderr, finished));

        match status {
            Ok(status) if status.success() => {
                debug!(elapsed_ms = started.elapsed().as_millis() as u64, "git step done");
                Ok(())
            }
            Ok(status) => Err(CommandFailure {
                reason: status.to_string(),
                output,
            }),
            Err(reason) => Err(CommandFailure { reason, output }),
        }
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<Vec<u8>>> {
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            buf
        })
    })
}

fn collect(handle: Option<JoinHandle<Vec<u8>>>, wait: bool) -> String {
    handle
        .filter(|h| wait || h.is_finished())
        .and_then(|h| h.join().ok())
        .map(|buf| String::from_utf8_lossy(&buf).into_owned())
        .unwrap_or_default()
}

/// Stdout then stderr, each starting on its own line.
fn combine(mut stdout: String, stderr: &str) -> String {
    if !stdout.is_empty() && !stderr.is_empty() && !stdout.ends_with('\n') {
        stdout.push('\n');
    }
    stdout.push_str(stderr);
    stdout
}
