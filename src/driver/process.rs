use std::io::Read;
use std::process::{Child, ChildStdout, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::{BenchCommand, DriverError, Result, RunSource};

const POLL_INTERVAL: Duration = Duration::from_millis(10);
const MAX_TIMEOUT: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Runs the external command once per call and hands back its stdout.
#[derive(Debug, Clone, Default)]
pub struct ProcessSource {
    command: BenchCommand,
    invocations: usize,
}

impl ProcessSource {
    pub fn new(command: BenchCommand) -> Self {
        Self {
            command,
            invocations: 0,
        }
    }

    pub fn command(&self) -> &BenchCommand {
        &self.command
    }

    /// Number of children spawned so far.
    pub fn invocations(&self) -> usize {
        self.invocations
    }
}

impl RunSource for ProcessSource {
    fn run_once(&mut self) -> Result<String> {
        self.invocations += 1;
        run_command(&self.command)
    }
}

/// Spawns `command`, waits for it and returns its stdout as text.
///
/// Stdin is closed and stderr is inherited, so only stdout is captured. The child is
/// killed and reaped on every early return.
pub fn run_command(command: &BenchCommand) -> Result<String> {
    let program = command.display_name();
    let started = Instant::now();
    debug!(%program, "spawning run");

    let mut process = command.to_command();
    process
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());
    let child = process.spawn().map_err(|source| DriverError::Spawn {
        program: program.clone(),
        source,
    })?;
    let mut guard = ChildGuard::new(child);

    let (status, stdout) = match command.timeout {
        None => {
            let mut stdout = Vec::new();
            if let Some(mut pipe) = guard.take_stdout() {
                pipe.read_to_end(&mut stdout)?;
            }
            (guard.wait()?, stdout)
        }
        Some(timeout) => {
            let deadline = started
                .checked_add(timeout)
                .unwrap_or_else(|| started + MAX_TIMEOUT);
            let reader = guard.take_stdout().map(spawn_reader);
            let Some(status) = guard.wait_until(deadline)? else {
                guard.kill()?;
                warn!(%program, ?timeout, "run timed out, child killed");
                return Err(DriverError::Timeout { program, timeout });
            };
            let stdout = match reader {
                Some(handle) => {
                    // A background process may still hold stdout open after the child exits.
                    if !reader_finished_by(&handle, deadline) {
                        warn!(%program, ?timeout, "stdout still open after child exited");
                        return Err(DriverError::Timeout { program, timeout });
                    }
                    handle
                        .join()
                        .map_err(|_| std::io::Error::other("stdout reader thread panicked"))??
                }
                None => Vec::new(),
            };
            (status, stdout)
        }
    };

    debug!(
        %program,
        %status,
        bytes = stdout.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "run finished"
    );

    if !status.success() {
        return Err(DriverError::Execution { program, status });
    }
    if stdout.is_empty() {
        return Err(DriverError::EmptyOutput { program });
    }
    String::from_utf8(stdout).map_err(|_| DriverError::Decode { program })
}

fn spawn_reader(mut pipe: ChildStdout) -> thread::JoinHandle<std::io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buffer = Vec::new();
        pipe.read_to_end(&mut buffer)?;
        Ok(buffer)
    })
}

fn reader_finished_by<T>(handle: &thread::JoinHandle<T>, deadline: Instant) -> bool {
    loop {
        if handle.is_finished() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Owns a running child. Dropping it before the child was reaped kills and reaps it.
struct ChildGuard {
    child: Child,
    reaped: bool,
}

impl ChildGuard {
    fn new(child: Child) -> Self {
        Self {
            child,
            reaped: false,
        }
    }

    fn take_stdout(&mut self) -> Option<ChildStdout> {
        self.child.stdout.take()
    }

    fn wait(&mut self) -> std::io::Result<ExitStatus> {
        let status = self.child.wait()?;
        self.reaped = true;
        Ok(status)
    }

    fn wait_until(&mut self, deadline: Instant) -> std::io::Result<Option<ExitStatus>> {
        loop {
            if let Some(status) = self.child.try_wait()? {
                self.reaped = true;
                return Ok(Some(status));
            }
            if Instant::now() >= deadline {
                return Ok(None);
            }
            thread::sleep(POLL_INTERVAL);
        }
    }

    fn kill(&mut self) -> std::io::Result<ExitStatus> {
        self.child.kill()?;
        self.wait()
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if !self.reaped {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}
