use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} {value:?}, expected one of: {expected}")]
pub struct ParseModeError {
    kind: &'static str,
    value: String,
    expected: String,
}

impl ParseModeError {
    fn new(kind: &'static str, value: &str, names: &[&str]) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: names.join(", "),
        }
    }
}

/// Which extraction routine a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    WhatsNew,
    LatestVersions,
    Download,
    Pep,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::WhatsNew, Mode::LatestVersions, Mode::Download, Mode::Pep];
    pub const NAMES: [&'static str; 4] = ["whats-new", "latest-versions", "download", "pep"];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::WhatsNew => "whats-new",
            Mode::LatestVersions => "latest-versions",
            Mode::Download => "download",
            Mode::Pep => "pep",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseModeError::new("mode", s, &Mode::NAMES))
    }
}

/// How a result table is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Bordered console table.
    Pretty,
    /// CSV file under the results directory.
    File,
}

impl OutputMode {
    pub const NAMES: [&'static str; 2] = ["pretty", "file"];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputMode::Pretty => "pretty",
            OutputMode::File => "file",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pretty" => Ok(OutputMode::Pretty),
            "file" => Ok(OutputMode::File),
            other => Err(ParseModeError::new("output mode", other, &OutputMode::NAMES)),
        }
    }
}
