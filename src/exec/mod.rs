//! Execution gate and shell-command runner.
//!
//! Some host characteristics are not exposed through `/proc` and have to be
//! asked from external tools (`lsb_release`, `getconf`, `uptime`). Every such
//! invocation goes through [`CommandRunner`], which consults an [`ExecPolicy`]
//! first; a blocked or failed command resolves to absence, never an error.

mod policy;
mod runner;

pub use policy::{DISABLED_COMMANDS_ENV, ExecPolicy, RESTRICTED_ENV};
pub use runner::{Captured, CommandInvoker, CommandRunner, RealInvoker};
