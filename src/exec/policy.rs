//! Execution policy governing which external commands may be invoked.

use std::env;

/// Environment variable enabling restricted mode, which blocks all commands.
pub const RESTRICTED_ENV: &str = "SYSQUERY_RESTRICTED";

/// Environment variable holding a comma-separated denylist of command names.
pub const DISABLED_COMMANDS_ENV: &str = "SYSQUERY_DISABLED_COMMANDS";

/// Decides, per named command, whether invocation is currently permitted.
///
/// The policy is an explicit value passed to collectors rather than hidden
/// global state, so collection logic is testable without mutating the real
/// process environment. [`ExecPolicy::from_env`] builds one from the
/// process-wide signals for production use.
#[derive(Debug, Clone, Default)]
pub struct ExecPolicy {
    /// When set, every command is blocked unconditionally.
    pub restricted: bool,
    /// Comma-separated names of disabled commands.
    pub disabled: Option<String>,
}

impl ExecPolicy {
    /// Policy that permits everything.
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Builds a policy from the process environment signals.
    ///
    /// The environment can be reconfigured during the process lifetime;
    /// callers wanting fresh signals per query call this again.
    pub fn from_env() -> Self {
        Self {
            restricted: env::var(RESTRICTED_ENV)
                .map(|v| is_truthy(&v))
                .unwrap_or(false),
            disabled: env::var(DISABLED_COMMANDS_ENV).ok(),
        }
    }

    /// Returns whether `command` may be invoked.
    ///
    /// Evaluated fresh on every call: restricted mode blocks everything;
    /// otherwise the denylist is split on commas, entries are trimmed, and an
    /// exact name match blocks the command. An empty or unset denylist
    /// permits everything.
    pub fn permits(&self, command: &str) -> bool {
        if self.restricted {
            return false;
        }
        match &self.disabled {
            Some(list) => !list.split(',').map(str::trim).any(|entry| entry == command),
            None => true,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
