//! Parsers for Linux `/proc` descriptor files.
//!
//! Pure functions over string input, testable without a Linux host;
//! collectors feed them file contents read through the `FileSystem`
//! abstraction.

pub mod parser;

pub use parser::{CpuInfo, LoadAvg, ParseError, UNKNOWN};
