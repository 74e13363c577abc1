//! sysquery — host characteristics query library.
//!
//! Provides:
//! - `info` — the `HostInfo` capability trait and the `HostReport` snapshot
//! - `collector` — platform collectors and `/proc` parsers
//! - `exec` — the execution gate and the shell-command runner
//!
//! Callers program against `info::HostInfo` only; the concrete platform
//! variant (currently `collector::linux::LinuxInfo`) is chosen at startup.

pub mod collector;
pub mod exec;
pub mod info;
