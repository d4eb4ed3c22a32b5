#![deny(missing_docs)]
//! Shared logging utilities for the docs parser workspace.
//!
//! This crate provides the `docs_*` logging macros used across the codebase,
//! the line format used by every logger, and a minimal test initializer for
//! the global logger.

use simplelog::{Config, ConfigBuilder};

/// Name of the log file written under the logs directory.
pub const LOG_FILE_NAME: &str = "parser.log";

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! docs_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! docs_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! docs_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! docs_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! docs_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Builds the shared logger configuration: RFC 3339 timestamps, no module
/// targets below error level.
pub fn line_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(log::LevelFilter::Error)
        .build()
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        line_config(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
