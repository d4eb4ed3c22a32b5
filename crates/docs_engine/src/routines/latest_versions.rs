use docs_core::ResultTable;
use regex::Regex;

use super::{href_of, ScrapeContext};
use crate::find::{element_text, find_all_tags, find_tag, AttrFilter};
use crate::page::Document;
use crate::ParserError;

const ALL_VERSIONS_MARKER: &str = "All versions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    pub link: String,
    pub version: String,
    pub status: String,
}

pub async fn latest_versions(ctx: &ScrapeContext<'_>) -> Result<ResultTable, ParserError> {
    let entries = {
        let main = ctx.loader().load(&ctx.site.docs_url).await?;
        parse_version_list(&main, &ctx.patterns.python_version)?
    };

    let mut table = ResultTable::new(["Link", "Version", "Status"]);
    for entry in entries {
        table.push_row([entry.link, entry.version, entry.status])?;
    }
    Ok(table)
}

/// Reads the sidebar list group mentioning "All versions".
///
/// Every group is scanned; only when none carries the marker is the list
/// reported missing.
pub fn parse_version_list(
    page: &Document,
    pattern: &Regex,
) -> Result<Vec<VersionEntry>, ParserError> {
    let sidebar = find_tag(
        page.root(),
        "div",
        &AttrFilter::any().exact("class", "sphinxsidebarwrapper"),
    )?;
    let group = find_all_tags(sidebar, "ul", &AttrFilter::any())
        .into_iter()
        .find(|ul| element_text(*ul).contains(ALL_VERSIONS_MARKER))
        .ok_or(ParserError::VersionListNotFound)?;

    find_all_tags(group, "a", &AttrFilter::any())
        .into_iter()
        .map(|anchor| -> Result<VersionEntry, ParserError> {
            let link = href_of(anchor)?.to_string();
            let text = element_text(anchor);
            let (version, status) = match pattern.captures(&text) {
                Some(caps) => (caps["version"].to_string(), caps["status"].to_string()),
                None => (text.trim().to_string(), String::new()),
            };
            Ok(VersionEntry {
                link,
                version,
                status,
            })
        })
        .collect()
}
