//! sysquery - one-shot host characteristics reporter.
//!
//! Queries the platform collector and prints the full report; metrics whose
//! sources are unavailable render as placeholders rather than being omitted.

use clap::Parser;
use tracing::{Level, debug, error};
use tracing_subscriber::EnvFilter;

use sysquery::collector::{LinuxInfo, RealFs};
use sysquery::exec::{ExecPolicy, RealInvoker};
use sysquery::info::HostReport;

/// Host characteristics reporter.
#[derive(Parser)]
#[command(name = "sysquery", about = "Report host characteristics", version)]
struct Args {
    /// Path to the proc filesystem (for testing/mocking).
    #[arg(long, default_value = "/proc")]
    proc_path: String,

    /// Path to the sys filesystem (for testing/mocking).
    #[arg(long, default_value = "/sys")]
    sys_path: String,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber with the appropriate log level.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("sysquery={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    debug!(
        "sysquery {} querying proc={} sys={}",
        env!("CARGO_PKG_VERSION"),
        args.proc_path,
        args.sys_path
    );

    // The environment signals are read fresh for this query.
    let policy = ExecPolicy::from_env();

    let collector = match LinuxInfo::new(
        RealFs::new(),
        RealInvoker::new(),
        policy,
        args.proc_path.as_str(),
        args.sys_path.as_str(),
    ) {
        Ok(collector) => collector,
        Err(e) => {
            error!("this host cannot be queried: {}", e);
            std::process::exit(1);
        }
    };

    let report = HostReport::gather(&collector);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{report}");
    }
}
