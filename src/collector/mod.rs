//! Platform collectors for host characteristics.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  info::HostInfo (trait)                  │
//! │                           │                              │
//! │                    ┌──────▼──────┐                       │
//! │                    │  LinuxInfo  │  (one impl/platform)  │
//! │                    └──────┬──────┘                       │
//! │            ┌──────────────┼─────────────────┐            │
//! │     ┌──────▼──────┐ ┌─────▼────────┐ ┌──────▼─────────┐  │
//! │     │  FileSystem │ │ procfs       │ │ CommandRunner  │  │
//! │     │  (trait)    │ │ parsers      │ │ + ExecPolicy   │  │
//! │     └──────┬──────┘ └──────────────┘ └──────┬─────────┘  │
//! └────────────┼────────────────────────────────┼────────────┘
//!       ┌──────┴──────┐                  ┌──────┴───────┐
//!   ┌───▼───┐     ┌───▼────┐        ┌───▼────┐    ┌────▼─────┐
//!   │RealFs │     │ MockFs │        │ Real   │    │ Spy      │
//!   │(Linux)│     │(tests) │        │Invoker │    │ Invoker  │
//!   └───────┘     └────────┘        └────────┘    └──────────┘
//! ```
//!
//! # Usage
//!
//! ## Production (Linux)
//!
//! ```ignore
//! use sysquery::collector::{RealFs, linux::LinuxInfo};
//! use sysquery::exec::{ExecPolicy, RealInvoker};
//! use sysquery::info::HostReport;
//!
//! let collector =
//!     LinuxInfo::with_default_roots(RealFs::new(), RealInvoker::new(), ExecPolicy::from_env())?;
//! let report = HostReport::gather(&collector);
//! ```
//!
//! ## Testing (with mocks)
//!
//! ```
//! use sysquery::collector::{linux::LinuxInfo, mock::{MockFs, SpyInvoker}};
//! use sysquery::exec::ExecPolicy;
//! use sysquery::info::HostInfo;
//!
//! let fs = MockFs::typical_x86();
//! let collector =
//!     LinuxInfo::new(fs, SpyInvoker::new(), ExecPolicy::allow_all(), "/proc", "/sys").unwrap();
//! assert!(collector.cpu_model().is_some());
//! ```

pub mod linux;
pub mod mock;
pub mod procfs;
pub mod traits;

pub use linux::{LinuxInfo, SetupError};
pub use traits::{FileSystem, RealFs};
