//! Command-line interface of `docs_parser`.

use std::path::PathBuf;
use std::time::Duration;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::Parser;
use docs_core::{Mode, OutputMode};
use docs_engine::FetchSettings;

/// Scrapes the Python documentation and PEP index.
///
/// ```sh
/// # release notes, printed as plain rows
/// docs_parser whats-new
///
/// # PEP status summary saved to results/pep_<timestamp>.csv
/// docs_parser pep --output file
///
/// # fresh download of the A4 PDF archive
/// docs_parser download --clear-cache
/// ```
#[derive(Parser, Debug)]
#[command(name = "docs_parser", version, about)]
pub struct Cli {
    /// Parser mode
    #[arg(value_parser = PossibleValuesParser::new(Mode::NAMES).try_map(|s| s.parse::<Mode>()))]
    pub mode: Mode,

    /// Clear the response cache before running
    #[arg(short, long)]
    pub clear_cache: bool,

    /// Extra output: a bordered table or a CSV file under results/
    #[arg(
        short,
        long,
        value_parser = PossibleValuesParser::new(OutputMode::NAMES).try_map(|s| s.parse::<OutputMode>())
    )]
    pub output: Option<OutputMode>,

    /// Whole-request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Directory holding downloads/, results/, logs/ and the cache
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Always hit the network and store nothing
    #[arg(long)]
    pub no_cache: bool,
}

impl Cli {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            request_timeout: Duration::from_secs(self.timeout),
            ..FetchSettings::default()
        }
    }
}
