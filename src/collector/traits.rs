//! Abstractions for filesystem access to enable testing and mocking.
//!
//! The `FileSystem` trait allows collectors to read the real `/proc` and
//! `/sys` trees on Linux or an in-memory mock in tests and on other hosts.

use std::io;
use std::path::Path;

/// Abstraction for the filesystem operations collectors need.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Checks whether a path exists and is an accessible directory.
    ///
    /// Used for the construction precondition on the kernel interface roots.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Real filesystem implementation that delegates to `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    /// Creates a new `RealFs` instance.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_real_fs_read_to_string() {
        let fs = RealFs::new();
        let cargo_toml = env::current_dir().unwrap().join("Cargo.toml");
        let content = fs.read_to_string(&cargo_toml).unwrap();
        assert!(content.contains("[package]"));
    }

    #[test]
    fn test_real_fs_is_dir() {
        let fs = RealFs::new();
        let src = env::current_dir().unwrap().join("src");
        assert!(fs.is_dir(&src));
        assert!(!fs.is_dir(Path::new("/nonexistent/path/12345")));
        // A file is not a directory.
        assert!(!fs.is_dir(&env::current_dir().unwrap().join("Cargo.toml")));
    }
}
