//! Scriptable spy invoker for testing command execution without processes.

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::exec::{Captured, CommandInvoker};

/// In-memory command invoker.
///
/// Returns scripted output per command name and counts every invocation
/// attempt, so tests can assert that blocked commands never reach process
/// creation. Commands without a script behave like a missing binary.
#[derive(Debug, Default)]
pub struct SpyInvoker {
    outputs: HashMap<String, Captured>,
    calls: AtomicUsize,
}

impl SpyInvoker {
    /// Creates a spy with no scripted commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts successful stdout for `command`.
    pub fn with_output(mut self, command: &str, stdout: &str) -> Self {
        self.outputs.insert(
            command.to_string(),
            Captured {
                stdout: stdout.to_string(),
                success: true,
            },
        );
        self
    }

    /// Scripts a non-zero exit for `command`.
    pub fn with_failure(mut self, command: &str) -> Self {
        self.outputs.insert(
            command.to_string(),
            Captured {
                stdout: String::new(),
                success: false,
            },
        );
        self
    }

    /// Number of invocation attempts observed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CommandInvoker for SpyInvoker {
    fn invoke(&self, command: &str, _args: &[&str]) -> io::Result<Captured> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outputs.get(command).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such command: {command}"),
            )
        })
    }
}
