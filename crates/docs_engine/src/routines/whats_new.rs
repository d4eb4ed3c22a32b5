use docs_core::{Mode, ResultTable};
use url::Url;

use super::{href_of, ScrapeContext};
use crate::find::{element_text, find_all_tags, find_tag, AttrFilter};
use crate::page::{join_url, Document};
use crate::{ParserError, ProgressEvent};

const WHATS_NEW_PATH: &str = "whatsnew/";

/// One row per release: `(Link, Title, Editor/Author)`.
///
/// A release page that fails to load aborts the whole table.
pub async fn whats_new(ctx: &ScrapeContext<'_>) -> Result<ResultTable, ParserError> {
    let loader = ctx.loader();
    let index_url = join_url(&ctx.site.docs_url, WHATS_NEW_PATH)?;
    let links = {
        let index = loader.load(&index_url).await?;
        collect_whats_new_links(&index)?
    };

    let mut table = ResultTable::new(["Link", "Title", "Editor/Author"]);
    let total = links.len();
    for (done, link) in links.into_iter().enumerate() {
        let (title, summary) = {
            let page = loader.load(&link).await?;
            read_whats_new_page(&page)?
        };
        table.push_row([link.to_string(), title, summary])?;
        ctx.progress.emit(ProgressEvent {
            mode: Mode::WhatsNew,
            done: done + 1,
            total,
        });
    }
    Ok(table)
}

/// Absolute links of every release listed in the what's-new index.
pub fn collect_whats_new_links(index: &Document) -> Result<Vec<Url>, ParserError> {
    let wrapper = find_tag(
        index.root(),
        "div",
        &AttrFilter::any().exact("class", "toctree-wrapper"),
    )?;
    find_all_tags(wrapper, "li", &AttrFilter::any().exact("class", "toctree-l1"))
        .into_iter()
        .map(|section| -> Result<Url, ParserError> {
            let anchor = find_tag(section, "a", &AttrFilter::any())?;
            index.join(href_of(anchor)?)
        })
        .collect()
}

/// First heading and the first definition list, newlines flattened.
pub fn read_whats_new_page(page: &Document) -> Result<(String, String), ParserError> {
    let heading = find_tag(page.root(), "h1", &AttrFilter::any())?;
    let summary = find_tag(page.root(), "dl", &AttrFilter::any())?;
    Ok((
        element_text(heading).trim().to_string(),
        element_text(summary).replace('\n', " ").trim().to_string(),
    ))
}
