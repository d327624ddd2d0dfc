//! Configuration constants for anticycle
//!
//! This module contains the constants used throughout the application. The
//! user-facing ones can be overridden through command-line flags,
//! environment variables or the project configuration file.

use std::time::Duration;

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames
    pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "text";

    /// Default result view when not specified
    pub const DEFAULT_VIEW: &str = "affected";

    /// Separator between package names in a rendered cycle chain
    pub const CHAIN_SEPARATOR: &str = " -> ";
}

/// Cycle detection tuning
pub mod detection {
    /// Graphs with at least this many packages relax closure rows in parallel
    pub const PARALLEL_THRESHOLD: usize = 64;
}

/// Source tree scanning configuration
pub mod scan {
    /// Directory names skipped unless the default list is overridden
    pub const DEFAULT_EXCLUDED: &[&str] = &[
        ".git", ".idea", ".vscode", "bin", "dist", "testdata", "vendor",
    ];

    /// Extension of the source files that are parsed
    pub const SOURCE_EXTENSION: &str = "go";

    /// Suffix of external test package names
    pub const EXTERNAL_TEST_SUFFIX: &str = "_test";

    /// Module file whose `module` directive prefixes package paths
    pub const GO_MOD_FILE: &str = "go.mod";

    /// Optional per-project configuration file, looked up at the scan root
    pub const PROJECT_CONFIG_FILE: &str = "anticycle.toml";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.len(), 4);
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "text");
        assert_eq!(output::DEFAULT_VIEW, "affected");
    }

    #[test]
    fn test_default_excluded_is_sorted() {
        let mut sorted = scan::DEFAULT_EXCLUDED.to_vec();
        sorted.sort();
        assert_eq!(sorted, scan::DEFAULT_EXCLUDED);
    }
}
