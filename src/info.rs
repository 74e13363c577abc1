//! The host-information capability contract and the report snapshot.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Capability set every platform collector implements.
///
/// Callers program against this trait only, so platform variants can be
/// substituted without call-site changes. Environment-dependent values
/// follow an absence-over-exception policy: a metric that cannot be
/// determined is `None`, never an error, and one metric's absence never
/// affects another.
pub trait HostInfo {
    /// Operating system name, a fixed literal per variant.
    fn os_name(&self) -> &'static str;

    /// Distribution release description.
    fn kernel_version(&self) -> Option<String>;

    /// Human-readable processor name.
    fn cpu_model(&self) -> Option<String>;

    /// Processor vendor identifier.
    fn cpu_vendor(&self) -> Option<String>;

    /// Processor clock frequency in MHz.
    fn cpu_frequency_mhz(&self) -> Option<f64>;

    /// Cores per processor entry.
    fn cpu_cores(&self) -> Option<u32>;

    /// Addressing width with the fixed `Bit` suffix.
    fn cpu_architecture(&self) -> Option<String>;

    /// Arithmetic mean of the load-average triplet, rounded to 2 decimals.
    fn load_average(&self) -> Option<f64>;

    /// Human-readable uptime.
    fn uptime(&self) -> Option<String>;

    /// Total physical memory in bytes.
    fn total_memory_bytes(&self) -> Option<u64>;

    /// Host name, a direct environment lookup shared by all variants.
    fn hostname(&self) -> Option<String> {
        hostname::get()
            .ok()
            .map(|h| h.to_string_lossy().into_owned())
    }
}

/// Placeholder rendered for metrics that resolved to absence.
pub const UNAVAILABLE: &str = "unavailable";

/// One complete snapshot of every facade metric.
///
/// Always presented in full: absent metrics show the [`UNAVAILABLE`]
/// placeholder instead of the report being trimmed or omitted.
#[derive(Debug, Clone, Serialize)]
pub struct HostReport {
    pub collected_at: DateTime<Utc>,
    pub os: String,
    pub hostname: Option<String>,
    pub kernel_version: Option<String>,
    pub cpu_model: Option<String>,
    pub cpu_vendor: Option<String>,
    pub cpu_frequency_mhz: Option<f64>,
    pub cpu_cores: Option<u32>,
    pub cpu_architecture: Option<String>,
    pub load_average: Option<f64>,
    pub uptime: Option<String>,
    pub total_memory_bytes: Option<u64>,
}

impl HostReport {
    /// Queries every metric once.
    ///
    /// Each accessor tolerates its own source being unavailable, so a
    /// partial report is the expected steady state on constrained hosts.
    pub fn gather(info: &impl HostInfo) -> Self {
        Self {
            collected_at: Utc::now(),
            os: info.os_name().to_string(),
            hostname: info.hostname(),
            kernel_version: info.kernel_version(),
            cpu_model: info.cpu_model(),
            cpu_vendor: info.cpu_vendor(),
            cpu_frequency_mhz: info.cpu_frequency_mhz(),
            cpu_cores: info.cpu_cores(),
            cpu_architecture: info.cpu_architecture(),
            load_average: info.load_average(),
            uptime: info.uptime(),
            total_memory_bytes: info.total_memory_bytes(),
        }
    }
}

/// Formats an optional metric, collapsing whitespace runs captured verbatim
/// from command output. The stored value is untouched; only presentation
/// normalizes.
fn line(f: &mut fmt::Formatter<'_>, label: &str, value: Option<&str>) -> fmt::Result {
    match value {
        Some(v) => {
            let v = v.split_whitespace().collect::<Vec<_>>().join(" ");
            writeln!(f, "{label:<18} {v}")
        }
        None => writeln!(f, "{label:<18} {UNAVAILABLE}"),
    }
}

impl fmt::Display for HostReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        line(f, "os:", Some(&self.os))?;
        line(f, "hostname:", self.hostname.as_deref())?;
        line(f, "kernel:", self.kernel_version.as_deref())?;
        line(f, "cpu model:", self.cpu_model.as_deref())?;
        line(f, "cpu vendor:", self.cpu_vendor.as_deref())?;
        line(
            f,
            "cpu frequency:",
            self.cpu_frequency_mhz
                .map(|m| format!("{m} MHz"))
                .as_deref(),
        )?;
        line(
            f,
            "cpu cores:",
            self.cpu_cores.map(|c| c.to_string()).as_deref(),
        )?;
        line(f, "cpu architecture:", self.cpu_architecture.as_deref())?;
        line(
            f,
            "load average:",
            self.load_average.map(|l| format!("{l:.2}")).as_deref(),
        )?;
        line(f, "uptime:", self.uptime.as_deref())?;
        line(
            f,
            "total memory:",
            self.total_memory_bytes
                .map(|b| format!("{b} bytes"))
                .as_deref(),
        )
    }
}
