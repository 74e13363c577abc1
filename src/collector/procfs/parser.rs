//! Parsers for the CPU, memory and load-average descriptor files.

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Marker value carried by a degraded [`CpuInfo`] when the descriptor source
/// itself could not be read.
pub const UNKNOWN: &str = "Unknown";

/// Processor record built from `/proc/cpuinfo`.
///
/// A field absent from the source stays `None`; callers treat that as "value
/// cannot be determined", not as an error. When the file holds several
/// processor entries the last occurrence of a key wins: the parser keeps one
/// running record and does not aggregate per-processor arrays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuInfo {
    /// Human-readable processor name.
    pub model: Option<String>,
    /// Vendor identifier, e.g. `GenuineIntel`.
    pub vendor: Option<String>,
    /// Clock frequency in MHz.
    pub mhz: Option<f64>,
    /// Cores per processor entry.
    pub cores: Option<u32>,
}

impl CpuInfo {
    /// Degraded-mode record substituted when the source is unreadable.
    ///
    /// The string fields carry the literal [`UNKNOWN`] marker so callers can
    /// distinguish "source missing" from a per-field gap (`None`). The
    /// numeric fields stay `None` since they cannot carry the marker.
    pub fn unknown() -> Self {
        Self {
            model: Some(UNKNOWN.to_string()),
            vendor: Some(UNKNOWN.to_string()),
            mhz: None,
            cores: None,
        }
    }

    /// Returns whether this is the degraded marker record.
    pub fn is_unknown(&self) -> bool {
        self.model.as_deref() == Some(UNKNOWN) && self.vendor.as_deref() == Some(UNKNOWN)
    }
}

/// Parses `/proc/cpuinfo` content.
///
/// Each line is `key : value` or unrelated/blank. The split is on the first
/// colon only since values may themselves contain colons; lines without a
/// colon and unrecognized keys are skipped. Key and value are trimmed.
pub fn parse_cpuinfo(content: &str) -> CpuInfo {
    let mut info = CpuInfo::default();

    for line in content.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        match key {
            "model name" | "cpu" | "Processor" => info.model = Some(value.to_string()),
            "cpu MHz" => {
                if let Ok(mhz) = value.parse::<f64>() {
                    info.mhz = Some(mhz);
                }
            }
            // Old Sun boxes expose the clock as a hexadecimal tick rate.
            "Cpu0ClkTck" => {
                if let Ok(ticks) = u64::from_str_radix(value, 16) {
                    info.mhz = Some(ticks as f64 / 1_000_000.0);
                }
            }
            "vendor_id" => info.vendor = Some(value.to_string()),
            "cpu cores" => {
                if let Ok(cores) = value.parse::<u32>() {
                    info.cores = Some(cores);
                }
            }
            _ => {}
        }
    }

    info
}

/// Extracts total physical memory in bytes from `/proc/meminfo` content.
///
/// By format convention the first line holds `MemTotal`; the first maximal
/// run of decimal digits found anywhere on that line is the kilobyte
/// quantity, multiplied by 1024 to produce bytes. `None` if the first line
/// carries no digit run.
pub fn parse_total_memory_bytes(content: &str) -> Option<u64> {
    let first = content.lines().next()?;
    let digits = first_digit_run(first)?;
    digits.parse::<u64>().ok().map(|kb| kb * 1024)
}

fn first_digit_run(line: &str) -> Option<&str> {
    let start = line.find(|c: char| c.is_ascii_digit())?;
    let rest = &line[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Load-average triplet from `/proc/loadavg`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoadAvg {
    pub load1: f64,
    pub load5: f64,
    pub load15: f64,
}

/// Parses `/proc/loadavg` content.
pub fn parse_loadavg(content: &str) -> Result<LoadAvg, ParseError> {
    let parts: Vec<&str> = content.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(ParseError::new("invalid loadavg format"));
    }

    let load1 = parts[0]
        .parse()
        .map_err(|_| ParseError::new("invalid load1"))?;
    let load5 = parts[1]
        .parse()
        .map_err(|_| ParseError::new("invalid load5"))?;
    let load15 = parts[2]
        .parse()
        .map_err(|_| ParseError::new("invalid load15"))?;

    Ok(LoadAvg {
        load1,
        load5,
        load15,
    })
}
