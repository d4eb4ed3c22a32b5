use docs_core::{Mode, ResultTable, StatusLedger, StatusMismatch};
use docs_logging::docs_info;
use url::Url;

use super::{href_of, ScrapeContext};
use crate::find::{element_text, find_all_tags, find_tag, has_own_text, next_sibling_tag, AttrFilter};
use crate::page::Document;
use crate::{ParserError, ProgressEvent, TagNotFound};

const STATUS_TERM: &str = "Status";

/// One row of the numerical index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PepRow {
    /// Status letter as rendered on the index; empty for drafts.
    pub code: String,
    pub link: Url,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PepReport {
    pub ledger: StatusLedger,
    pub mismatches: Vec<StatusMismatch>,
}

/// `(Status, Count)` over every PEP, closed by a `Total` row.
pub async fn pep(ctx: &ScrapeContext<'_>) -> Result<ResultTable, ParserError> {
    let report = pep_ledger(ctx).await?;
    Ok(report.ledger.into_table()?)
}

/// Visits every PEP page once, in index order, counting its status.
pub async fn pep_ledger(ctx: &ScrapeContext<'_>) -> Result<PepReport, ParserError> {
    let loader = ctx.loader();
    let rows = {
        let index = loader.load(&ctx.site.peps_url).await?;
        collect_pep_rows(&index)?
    };

    let mut ledger = StatusLedger::new();
    let mut mismatches = Vec::new();
    let total = rows.len();
    for (done, row) in rows.into_iter().enumerate() {
        let expected = ctx
            .site
            .expected_status
            .expected(&row.code)
            .ok_or_else(|| ParserError::UnknownStatusCode(row.code.clone()))?;
        let actual = {
            let page = loader.load(&row.link).await?;
            read_pep_status(&page)?
        };

        if let Some(mismatch) = ledger.record(row.link.as_str(), &actual, expected) {
            docs_info!(
                "Mismatched status: {}; status on page: {}; expected: {}",
                mismatch.page_url,
                mismatch.actual,
                mismatch.expected.join(", ")
            );
            mismatches.push(mismatch);
        }
        ctx.progress.emit(ProgressEvent {
            mode: Mode::Pep,
            done: done + 1,
            total,
        });
    }
    Ok(PepReport { ledger, mismatches })
}

pub fn collect_pep_rows(index: &Document) -> Result<Vec<PepRow>, ParserError> {
    let section = find_tag(
        index.root(),
        "section",
        &AttrFilter::any().exact("id", "numerical-index"),
    )?;
    let body = find_tag(section, "tbody", &AttrFilter::any())?;
    find_all_tags(body, "tr", &AttrFilter::any())
        .into_iter()
        .map(|tr| -> Result<PepRow, ParserError> {
            let marker = find_tag(tr, "abbr", &AttrFilter::any())?;
            // The first character is the PEP type; the rest is the status code.
            let code = element_text(marker).trim().chars().skip(1).collect();
            let anchor = find_tag(tr, "a", &AttrFilter::any())?;
            let link = index.join(href_of(anchor)?)?;
            Ok(PepRow { code, link })
        })
        .collect()
}

/// Text of the definition following the `Status` term on a PEP page.
pub fn read_pep_status(page: &Document) -> Result<String, ParserError> {
    let fields = find_tag(page.root(), "dl", &AttrFilter::any())?;
    let term = find_all_tags(fields, "dt", &AttrFilter::any())
        .into_iter()
        .find(|dt| has_own_text(**dt, STATUS_TERM))
        .ok_or_else(|| TagNotFound {
            tag: "dt".to_string(),
            filter: format!("[text={STATUS_TERM:?}]"),
        })?;
    let value = next_sibling_tag(term, "dd").ok_or_else(|| TagNotFound {
        tag: "dd".to_string(),
        filter: format!("[after {STATUS_TERM:?}]"),
    })?;
    Ok(element_text(value).trim().to_string())
}
