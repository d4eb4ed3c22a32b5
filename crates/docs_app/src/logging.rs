//! Logger setup for the `docs_parser` binary.
//!
//! Every record goes to the terminal and is appended to
//! `<root>/logs/parser.log`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use docs_logging::{line_config, LOG_FILE_NAME};
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger};

/// Installs the global logger. If the log file cannot be opened the run
/// continues with terminal logging only.
pub fn initialize(logs_dir: &Path) {
    let level = LevelFilter::Info;

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        line_config(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    match open_log_file(logs_dir) {
        Ok(file) => loggers.push(WriteLogger::new(level, line_config(), file)),
        Err(err) => eprintln!(
            "Warning: Could not open log file in {:?}: {}",
            logs_dir, err
        ),
    }

    let _ = CombinedLogger::init(loggers);
}

pub fn log_file_path(logs_dir: &Path) -> PathBuf {
    logs_dir.join(LOG_FILE_NAME)
}

/// Opens the log file for appending, creating `logs_dir` first.
fn open_log_file(logs_dir: &Path) -> io::Result<File> {
    fs::create_dir_all(logs_dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path(logs_dir))
}
