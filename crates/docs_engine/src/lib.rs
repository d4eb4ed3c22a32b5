//! Docs engine: fetching, tag lookup and the extraction routines.
mod cache;
mod decode;
mod dispatch;
mod fetch;
mod filename;
mod find;
mod output;
mod page;
mod persist;
pub mod routines;
mod types;

pub use cache::ResponseCache;
pub use decode::{decode_utf8, DecodedHtml};
pub use dispatch::run_mode;
pub use fetch::{FetchSettings, Fetcher, LogProgressSink, NoProgress, ProgressSink, ReqwestFetcher};
pub use filename::{archive_filename, results_filename, DATETIME_FORMAT};
pub use find::{
    element_text, find_all_tags, find_tag, has_own_text, next_sibling_tag, AttrFilter, AttrMatch,
    TagNotFound,
};
pub use output::{control_output, render_plain, render_pretty, write_csv, OutputError};
pub use page::{join_url, Document, PageLoader};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use routines::{ExtractionPatterns, ScrapeContext};
pub use types::{
    FailureKind, FetchError, FetchMetadata, FetchOutput, ParserError, ProgressEvent,
};
