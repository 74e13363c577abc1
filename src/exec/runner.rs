//! Shell-command runner gated by an [`ExecPolicy`].

use std::io;
use std::process::Command;

use tracing::debug;

use crate::exec::ExecPolicy;

/// Captured result of one command invocation.
#[derive(Debug, Clone)]
pub struct Captured {
    /// Standard output decoded as UTF-8 (lossy), untrimmed.
    pub stdout: String,
    /// Whether the command exited successfully.
    pub success: bool,
}

/// Abstraction over process creation.
///
/// This is the seam that lets tests substitute a spy and verify that blocked
/// commands never reach process creation, mirroring how collectors read
/// through the `FileSystem` trait instead of `std::fs`.
pub trait CommandInvoker: Send + Sync {
    /// Spawns `command` with `args`, waits for it, and captures stdout.
    fn invoke(&self, command: &str, args: &[&str]) -> io::Result<Captured>;
}

impl<I: CommandInvoker + ?Sized> CommandInvoker for std::sync::Arc<I> {
    fn invoke(&self, command: &str, args: &[&str]) -> io::Result<Captured> {
        (**self).invoke(command, args)
    }
}

/// Real invoker that delegates to `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealInvoker;

impl RealInvoker {
    /// Creates a new `RealInvoker` instance.
    pub fn new() -> Self {
        Self
    }
}

impl CommandInvoker for RealInvoker {
    fn invoke(&self, command: &str, args: &[&str]) -> io::Result<Captured> {
        let output = Command::new(command).args(args).output()?;
        Ok(Captured {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            success: output.status.success(),
        })
    }
}

/// Runs external commands on behalf of collectors.
///
/// Every run consults the execution gate first; a blocked command returns
/// `None` without any process creation. Captured output is returned verbatim,
/// trailing newlines included, since call sites expect the raw text.
pub struct CommandRunner<I: CommandInvoker> {
    invoker: I,
}

impl<I: CommandInvoker> CommandRunner<I> {
    /// Creates a runner around the given invoker.
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    /// Executes `command` if the policy permits it.
    ///
    /// Returns `None` when the gate blocks the command, when the binary
    /// cannot be spawned, or when it exits with a non-zero status. Absence
    /// is never an error: callers treat it as "value unavailable".
    pub fn run(&self, policy: &ExecPolicy, command: &str, args: &[&str]) -> Option<String> {
        if !policy.permits(command) {
            debug!(command, "command blocked by execution policy");
            return None;
        }
        match self.invoker.invoke(command, args) {
            Ok(captured) if captured.success => Some(captured.stdout),
            Ok(_) => {
                debug!(command, "command exited with failure status");
                None
            }
            Err(e) => {
                debug!(command, error = %e, "command could not be executed");
                None
            }
        }
    }
}
