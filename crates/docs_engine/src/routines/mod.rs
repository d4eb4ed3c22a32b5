//! The four extraction routines and what they share.
mod download;
mod latest_versions;
mod pep;
mod whats_new;

use docs_core::{OutputLayout, SiteConfig};
use regex::Regex;

use crate::fetch::{Fetcher, ProgressSink};
use crate::page::PageLoader;
use crate::ParserError;

pub use download::{download, find_pdf_a4_link};
pub use latest_versions::{latest_versions, parse_version_list, VersionEntry};
pub use pep::{collect_pep_rows, pep, pep_ledger, read_pep_status, PepReport, PepRow};
pub use whats_new::{collect_whats_new_links, read_whats_new_page, whats_new};

pub const PATTERN_PYTHON: &str = r"Python (?P<version>\d\.\d+) \((?P<status>.*)\)";
pub const PATTERN_PDF_A4: &str = r".+pdf-a4\.zip$";

/// Regexes compiled once per run.
#[derive(Debug, Clone)]
pub struct ExtractionPatterns {
    pub python_version: Regex,
    pub pdf_a4: Regex,
}

impl ExtractionPatterns {
    pub fn compile() -> Result<Self, ParserError> {
        Ok(Self {
            python_version: Regex::new(PATTERN_PYTHON)?,
            pdf_a4: Regex::new(PATTERN_PDF_A4)?,
        })
    }
}

/// Everything a routine needs, borrowed for the run.
pub struct ScrapeContext<'a> {
    pub fetcher: &'a dyn Fetcher,
    pub site: &'a SiteConfig,
    pub patterns: &'a ExtractionPatterns,
    pub layout: &'a OutputLayout,
    pub progress: &'a dyn ProgressSink,
}

impl<'a> ScrapeContext<'a> {
    pub fn loader(&self) -> PageLoader<'a> {
        PageLoader::new(self.fetcher)
    }
}

/// The `href` of an anchor; an anchor without one counts as missing.
fn href_of<'a>(anchor: scraper::ElementRef<'a>) -> Result<&'a str, crate::TagNotFound> {
    anchor
        .value()
        .attr("href")
        .ok_or_else(|| crate::TagNotFound {
            tag: "a".to_string(),
            filter: "[href]".to_string(),
        })
}
