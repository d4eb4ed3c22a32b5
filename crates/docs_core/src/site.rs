use std::path::{Path, PathBuf};

use url::Url;

use crate::status::ExpectedStatusMap;

pub const MAIN_DOC_URL: &str = "https://docs.python.org/3/";
pub const PEP_INDEX_URL: &str = "https://peps.python.org/";

pub const DOWNLOAD_DIR: &str = "downloads";
pub const RESULTS_DIR: &str = "results";
pub const LOG_DIR: &str = "logs";
pub const CACHE_DIR: &str = "http_cache";

/// Sites the parser reads from, plus the PEP status table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub docs_url: Url,
    pub peps_url: Url,
    pub expected_status: ExpectedStatusMap,
}

impl SiteConfig {
    pub fn new(docs_url: &str, peps_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            docs_url: Url::parse(docs_url)?,
            peps_url: Url::parse(peps_url)?,
            expected_status: ExpectedStatusMap::peps(),
        })
    }

    pub fn python_org() -> Result<Self, url::ParseError> {
        Self::new(MAIN_DOC_URL, PEP_INDEX_URL)
    }
}

/// Fixed directory layout below a root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn downloads_dir(&self) -> PathBuf {
        self.root.join(DOWNLOAD_DIR)
    }

    pub fn results_dir(&self) -> PathBuf {
        self.root.join(RESULTS_DIR)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join(LOG_DIR)
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.root.join(CACHE_DIR)
    }
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(".")
    }
}
