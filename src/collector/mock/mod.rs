//! In-memory test doubles for the collection seams.
//!
//! `MockFs` simulates the `/proc` and `/sys` trees so collector tests run on
//! any host; `SpyInvoker` scripts command output and counts invocation
//! attempts so tests can prove that blocked commands never spawn a process.

mod filesystem;
mod runner;
mod scenarios;

pub use filesystem::MockFs;
pub use runner::SpyInvoker;
