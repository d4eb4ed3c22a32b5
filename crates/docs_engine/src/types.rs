use std::fmt;

use docs_core::{Mode, TableError};
use thiserror::Error;

use crate::find::TagNotFound;
use crate::persist::PersistError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub url: String,
    pub final_url: String,
    pub content_type: Option<String>,
    pub byte_len: u64,
    pub from_cache: bool,
}

/// Transport-level failure for one URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} ({message})")]
pub struct FetchError {
    pub url: String,
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(url: impl Into<String>, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Everything that can abort an extraction routine.
#[derive(Debug, Error)]
pub enum ParserError {
    #[error("failed to load {url}: {source}")]
    ConnectionFailure {
        url: String,
        #[source]
        source: FetchError,
    },
    #[error(transparent)]
    TagNotFound(#[from] TagNotFound),
    #[error("python version list not found in the sidebar")]
    VersionListNotFound,
    #[error("status code {0:?} on the PEP index has no expected statuses")]
    UnknownStatusCode(String),
    #[error("cannot resolve link {href:?} against {base}: {source}")]
    InvalidLink {
        href: String,
        base: String,
        #[source]
        source: url::ParseError,
    },
    #[error("link {0} has no file name")]
    MissingFileName(String),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl From<FetchError> for ParserError {
    fn from(source: FetchError) -> Self {
        ParserError::ConnectionFailure {
            url: source.url.clone(),
            source,
        }
    }
}

/// Loop progress reported by the routines that walk many pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    pub mode: Mode,
    pub done: usize,
    pub total: usize,
}
