//! Canned host scenarios for collector tests.

use super::MockFs;

impl MockFs {
    /// Typical x86_64 host: two processor entries, ~8 GiB of memory, idle
    /// load. The second cpuinfo entry carries a different clock so tests can
    /// observe last-entry-wins behavior.
    pub fn typical_x86() -> Self {
        let mut fs = Self::new();
        fs.add_dir("/proc");
        fs.add_dir("/sys");
        fs.add_file(
            "/proc/cpuinfo",
            "\
processor\t: 0
vendor_id\t: GenuineIntel
model name\t: Intel(R) Xeon(R) CPU E5-2680 v4 @ 2.40GHz
cpu MHz\t\t: 2397.222
cpu cores\t: 4
cache size\t: 35840 KB

processor\t: 1
vendor_id\t: GenuineIntel
model name\t: Intel(R) Xeon(R) CPU E5-2680 v4 @ 2.40GHz
cpu MHz\t\t: 2399.998
cpu cores\t: 4
cache size\t: 35840 KB
",
        );
        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:        8150420 kB
MemFree:         2048000 kB
MemAvailable:    4096000 kB
Buffers:          512000 kB
Cached:          1024000 kB
",
        );
        fs.add_file("/proc/loadavg", "0.10 0.25 0.05 1/150 1234\n");
        fs
    }

    /// Legacy SPARC host where the clock is exposed as a hex `Cpu0ClkTck`
    /// and the model under the bare `cpu` key.
    pub fn sparc_legacy() -> Self {
        let mut fs = Self::new();
        fs.add_dir("/proc");
        fs.add_dir("/sys");
        fs.add_file(
            "/proc/cpuinfo",
            "\
cpu\t\t: TI UltraSparc IIi (Sabre)
fpu\t\t: UltraSparc IIi integrated FPU
Cpu0ClkTck\t: 77359400
",
        );
        fs.add_file("/proc/meminfo", "MemTotal:         262144 kB\n");
        fs.add_file("/proc/loadavg", "0.00 0.01 0.05 1/42 321\n");
        fs
    }

    /// ARM board with the `Processor` key and no vendor or core count.
    pub fn arm_board() -> Self {
        let mut fs = Self::new();
        fs.add_dir("/proc");
        fs.add_dir("/sys");
        fs.add_file(
            "/proc/cpuinfo",
            "\
Processor\t: ARMv7 Processor rev 4 (v7l)
BogoMIPS\t: 38.40
Hardware\t: BCM2835
",
        );
        fs.add_file("/proc/meminfo", "MemTotal:         948304 kB\n");
        fs.add_file("/proc/loadavg", "0.35 0.20 0.15 2/120 999\n");
        fs
    }

    /// Constrained host: the kernel roots exist but no descriptor file is
    /// readable, so every file-backed metric degrades.
    pub fn bare_roots() -> Self {
        let mut fs = Self::new();
        fs.add_dir("/proc");
        fs.add_dir("/sys");
        fs
    }
}
