//! Linux platform collector reading `/proc` with gated shell fallbacks.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::collector::procfs::parser::{
    CpuInfo, parse_cpuinfo, parse_loadavg, parse_total_memory_bytes,
};
use crate::collector::traits::FileSystem;
use crate::exec::{CommandInvoker, CommandRunner, ExecPolicy};
use crate::info::HostInfo;

/// Error raised when this variant cannot run on the host.
#[derive(Debug)]
pub enum SetupError {
    /// A required kernel interface root is missing or not a directory.
    MissingRoot(PathBuf),
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::MissingRoot(path) => {
                write!(f, "kernel interface {} is not accessible", path.display())
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// Collects host characteristics from the Linux kernel pseudo-files, falling
/// back to external commands for values the files do not expose.
///
/// Owns no mutable state: every accessor re-reads its source, so each call
/// is a fresh snapshot. Accessors degrade independently; one unavailable
/// source never prevents another metric from resolving.
pub struct LinuxInfo<F: FileSystem, I: CommandInvoker> {
    fs: F,
    runner: CommandRunner<I>,
    policy: ExecPolicy,
    proc_path: String,
}

impl<F: FileSystem, I: CommandInvoker> LinuxInfo<F, I> {
    /// Creates the collector after verifying the kernel interfaces exist.
    ///
    /// Both `proc_path` and `sys_path` must be accessible directories;
    /// otherwise this variant cannot run on the host and construction fails
    /// without performing any further reads. Callers treat the failure as
    /// fatal for this variant and pick another one or abort.
    pub fn new(
        fs: F,
        invoker: I,
        policy: ExecPolicy,
        proc_path: impl Into<String>,
        sys_path: impl Into<String>,
    ) -> Result<Self, SetupError> {
        let proc_path = proc_path.into();
        let sys_path = sys_path.into();

        for root in [&proc_path, &sys_path] {
            if !fs.is_dir(Path::new(root.as_str())) {
                return Err(SetupError::MissingRoot(PathBuf::from(root)));
            }
        }

        Ok(Self {
            fs,
            runner: CommandRunner::new(invoker),
            policy,
            proc_path,
        })
    }

    /// Convenience constructor for the default `/proc` and `/sys` roots.
    pub fn with_default_roots(fs: F, invoker: I, policy: ExecPolicy) -> Result<Self, SetupError> {
        Self::new(fs, invoker, policy, "/proc", "/sys")
    }

    /// One fresh parse of `{proc}/cpuinfo`.
    ///
    /// The file is re-read on every call; it is small and queries are
    /// infrequent. An unreadable source yields the degraded
    /// [`CpuInfo::unknown`] record rather than an empty one, so callers can
    /// tell "source missing" from "key missing".
    fn cpu_info(&self) -> CpuInfo {
        let path = format!("{}/cpuinfo", self.proc_path);
        match self.fs.read_to_string(Path::new(&path)) {
            Ok(content) => parse_cpuinfo(&content),
            Err(e) => {
                debug!(path = %path, error = %e, "cpuinfo unreadable, reporting Unknown");
                CpuInfo::unknown()
            }
        }
    }

    fn read_proc(&self, name: &str) -> Option<String> {
        let path = format!("{}/{}", self.proc_path, name);
        match self.fs.read_to_string(Path::new(&path)) {
            Ok(content) => Some(content),
            Err(e) => {
                debug!(path = %path, error = %e, "descriptor file unreadable");
                None
            }
        }
    }
}

impl<F: FileSystem, I: CommandInvoker> HostInfo for LinuxInfo<F, I> {
    fn os_name(&self) -> &'static str {
        "Linux"
    }

    fn kernel_version(&self) -> Option<String> {
        self.runner.run(&self.policy, "lsb_release", &["-ds"])
    }

    fn cpu_model(&self) -> Option<String> {
        self.cpu_info().model
    }

    fn cpu_vendor(&self) -> Option<String> {
        self.cpu_info().vendor
    }

    fn cpu_frequency_mhz(&self) -> Option<f64> {
        self.cpu_info().mhz
    }

    fn cpu_cores(&self) -> Option<u32> {
        self.cpu_info().cores
    }

    fn cpu_architecture(&self) -> Option<String> {
        // Output is kept verbatim, newline included, before the suffix.
        self.runner
            .run(&self.policy, "getconf", &["LONG_BIT"])
            .map(|bits| format!("{bits}Bit"))
    }

    fn load_average(&self) -> Option<f64> {
        let content = self.read_proc("loadavg")?;
        let load = match parse_loadavg(&content) {
            Ok(load) => load,
            Err(e) => {
                debug!(error = %e, "loadavg unparseable");
                return None;
            }
        };
        let mean = (load.load1 + load.load5 + load.load15) / 3.0;
        Some((mean * 100.0).round() / 100.0)
    }

    fn uptime(&self) -> Option<String> {
        self.runner.run(&self.policy, "uptime", &["-p"])
    }

    fn total_memory_bytes(&self) -> Option<u64> {
        let content = self.read_proc("meminfo")?;
        parse_total_memory_bytes(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::{MockFs, SpyInvoker};
    use std::sync::Arc;

    fn collector(
        fs: MockFs,
        spy: &Arc<SpyInvoker>,
        policy: ExecPolicy,
    ) -> LinuxInfo<MockFs, Arc<SpyInvoker>> {
        LinuxInfo::new(fs, Arc::clone(spy), policy, "/proc", "/sys").unwrap()
    }

    #[test]
    fn test_construction_requires_both_roots() {
        let mut fs = MockFs::new();
        fs.add_dir("/proc");
        // No /sys.
        let spy = Arc::new(SpyInvoker::new());

        let err = LinuxInfo::new(fs, Arc::clone(&spy), ExecPolicy::allow_all(), "/proc", "/sys")
            .err()
            .expect("construction must fail without /sys");

        let SetupError::MissingRoot(path) = err;
        assert_eq!(path, PathBuf::from("/sys"));
        // No reads or invocations happen on failure.
        assert_eq!(spy.calls(), 0);
    }

    #[test]
    fn test_construction_requires_proc() {
        let mut fs = MockFs::new();
        fs.add_dir("/sys");
        let spy = Arc::new(SpyInvoker::new());

        assert!(
            LinuxInfo::new(fs, Arc::clone(&spy), ExecPolicy::allow_all(), "/proc", "/sys").is_err()
        );
    }

    #[test]
    fn test_construction_on_real_fs_without_roots() {
        // An empty temp dir stands in for a host without the interfaces.
        let dir = tempfile::tempdir().unwrap();
        let proc_path = dir.path().join("proc");
        let sys_path = dir.path().join("sys");

        let result = LinuxInfo::new(
            crate::collector::RealFs::new(),
            SpyInvoker::new(),
            ExecPolicy::allow_all(),
            proc_path.to_string_lossy().into_owned(),
            sys_path.to_string_lossy().into_owned(),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_os_name_is_fixed_literal() {
        let spy = Arc::new(SpyInvoker::new());
        let info = collector(MockFs::bare_roots(), &spy, ExecPolicy::allow_all());
        assert_eq!(info.os_name(), "Linux");
    }

    #[test]
    fn test_cpu_fields_from_typical_x86() {
        let spy = Arc::new(SpyInvoker::new());
        let info = collector(MockFs::typical_x86(), &spy, ExecPolicy::allow_all());

        assert_eq!(
            info.cpu_model().as_deref(),
            Some("Intel(R) Xeon(R) CPU E5-2680 v4 @ 2.40GHz")
        );
        assert_eq!(info.cpu_vendor().as_deref(), Some("GenuineIntel"));
        // Last processor entry wins.
        assert_eq!(info.cpu_frequency_mhz(), Some(2399.998));
        assert_eq!(info.cpu_cores(), Some(4));
    }

    #[test]
    fn test_cpu_fields_from_sparc_legacy() {
        let spy = Arc::new(SpyInvoker::new());
        let info = collector(MockFs::sparc_legacy(), &spy, ExecPolicy::allow_all());

        assert_eq!(info.cpu_model().as_deref(), Some("TI UltraSparc IIi (Sabre)"));
        assert_eq!(info.cpu_frequency_mhz(), Some(2000.0));
        assert_eq!(info.cpu_vendor(), None);
    }

    #[test]
    fn test_cpu_fields_from_arm_board() {
        let spy = Arc::new(SpyInvoker::new());
        let info = collector(MockFs::arm_board(), &spy, ExecPolicy::allow_all());

        assert_eq!(
            info.cpu_model().as_deref(),
            Some("ARMv7 Processor rev 4 (v7l)")
        );
        assert_eq!(info.cpu_vendor(), None);
        assert_eq!(info.cpu_cores(), None);
        assert_eq!(info.total_memory_bytes(), Some(948_304 * 1024));
    }

    #[test]
    fn test_cpu_degraded_reports_unknown() {
        let spy = Arc::new(SpyInvoker::new());
        let info = collector(MockFs::bare_roots(), &spy, ExecPolicy::allow_all());

        assert_eq!(info.cpu_model().as_deref(), Some("Unknown"));
        assert_eq!(info.cpu_vendor().as_deref(), Some("Unknown"));
        assert_eq!(info.cpu_frequency_mhz(), None);
        assert_eq!(info.cpu_cores(), None);
    }

    #[test]
    fn test_kernel_version_via_runner() {
        let spy = Arc::new(SpyInvoker::new().with_output("lsb_release", "Ubuntu 22.04.4 LTS\n"));
        let info = collector(MockFs::typical_x86(), &spy, ExecPolicy::allow_all());

        assert_eq!(info.kernel_version().as_deref(), Some("Ubuntu 22.04.4 LTS\n"));
    }

    #[test]
    fn test_cpu_architecture_appends_bit_suffix() {
        let spy = Arc::new(SpyInvoker::new().with_output("getconf", "64\n"));
        let info = collector(MockFs::typical_x86(), &spy, ExecPolicy::allow_all());

        // Output is verbatim; the suffix follows the captured newline.
        assert_eq!(info.cpu_architecture().as_deref(), Some("64\nBit"));
    }

    #[test]
    fn test_blocked_commands_resolve_to_absence_without_spawn() {
        let spy = Arc::new(
            SpyInvoker::new()
                .with_output("lsb_release", "Ubuntu 22.04.4 LTS\n")
                .with_output("getconf", "64\n")
                .with_output("uptime", "up 2 days\n"),
        );
        let policy = ExecPolicy {
            restricted: true,
            disabled: None,
        };
        let info = collector(MockFs::typical_x86(), &spy, policy);

        assert_eq!(info.kernel_version(), None);
        assert_eq!(info.cpu_architecture(), None);
        assert_eq!(info.uptime(), None);
        assert_eq!(spy.calls(), 0);
    }

    #[test]
    fn test_denylist_blocks_single_command_only() {
        let spy = Arc::new(
            SpyInvoker::new()
                .with_output("getconf", "64\n")
                .with_output("uptime", "up 2 days\n"),
        );
        let policy = ExecPolicy {
            restricted: false,
            disabled: Some(" uptime , lsb_release".to_string()),
        };
        let info = collector(MockFs::typical_x86(), &spy, policy);

        assert_eq!(info.uptime(), None);
        assert_eq!(info.kernel_version(), None);
        assert_eq!(info.cpu_architecture().as_deref(), Some("64\nBit"));
        // Only getconf was actually spawned.
        assert_eq!(spy.calls(), 1);
    }

    #[test]
    fn test_load_average_mean_rounded() {
        let spy = Arc::new(SpyInvoker::new());
        let info = collector(MockFs::typical_x86(), &spy, ExecPolicy::allow_all());

        // (0.10 + 0.25 + 0.05) / 3 = 0.1333... -> 0.13
        assert_eq!(info.load_average(), Some(0.13));
    }

    #[test]
    fn test_load_average_rounds_half_away_from_zero() {
        let mut fs = MockFs::bare_roots();
        // Mean is exactly 0.125.
        fs.add_file("/proc/loadavg", "0.100 0.200 0.075 1/10 99\n");
        let spy = Arc::new(SpyInvoker::new());
        let info = collector(fs, &spy, ExecPolicy::allow_all());

        assert_eq!(info.load_average(), Some(0.13));
    }

    #[test]
    fn test_total_memory_bytes() {
        let spy = Arc::new(SpyInvoker::new());
        let info = collector(MockFs::typical_x86(), &spy, ExecPolicy::allow_all());

        assert_eq!(info.total_memory_bytes(), Some(8_346_030_080));
    }

    #[test]
    fn test_accessors_degrade_independently() {
        // Only meminfo is present; every other metric resolves or degrades
        // on its own.
        let mut fs = MockFs::bare_roots();
        fs.add_file("/proc/meminfo", "MemTotal:       8150420 kB\n");
        let spy = Arc::new(SpyInvoker::new().with_output("uptime", "up 5 minutes\n"));
        let info = collector(fs, &spy, ExecPolicy::allow_all());

        assert_eq!(info.total_memory_bytes(), Some(8_346_030_080));
        assert_eq!(info.uptime().as_deref(), Some("up 5 minutes\n"));
        assert_eq!(info.load_average(), None);
        assert_eq!(info.cpu_model().as_deref(), Some("Unknown"));
        assert_eq!(info.kernel_version(), None); // binary missing
    }
}
