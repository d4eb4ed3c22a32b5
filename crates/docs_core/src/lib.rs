//! Docs core: pure table, ledger and configuration types shared by the
//! engine and the command-line app.
mod ledger;
mod mode;
mod site;
mod status;
mod table;

pub use ledger::{StatusLedger, StatusMismatch, TOTAL_LABEL};
pub use mode::{Mode, OutputMode, ParseModeError};
pub use site::{
    OutputLayout, SiteConfig, CACHE_DIR, DOWNLOAD_DIR, LOG_DIR, MAIN_DOC_URL, PEP_INDEX_URL,
    RESULTS_DIR,
};
pub use status::ExpectedStatusMap;
pub use table::{ResultTable, TableError};
