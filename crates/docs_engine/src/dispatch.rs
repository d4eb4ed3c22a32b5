use docs_core::{Mode, ResultTable};

use crate::routines::{download, latest_versions, pep, whats_new, ScrapeContext};
use crate::ParserError;

/// Runs the routine for `mode`. `download` yields no table.
pub async fn run_mode(
    mode: Mode,
    ctx: &ScrapeContext<'_>,
) -> Result<Option<ResultTable>, ParserError> {
    match mode {
        Mode::WhatsNew => whats_new(ctx).await.map(Some),
        Mode::LatestVersions => latest_versions(ctx).await.map(Some),
        Mode::Download => download(ctx).await.map(|_| None),
        Mode::Pep => pep(ctx).await.map(Some),
    }
}
