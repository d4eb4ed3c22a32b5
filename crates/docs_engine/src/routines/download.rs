use std::path::PathBuf;

use docs_logging::docs_info;
use regex::Regex;
use url::Url;

use super::{href_of, ScrapeContext};
use crate::filename::archive_filename;
use crate::find::{find_tag, AttrFilter};
use crate::page::{join_url, Document};
use crate::persist::{ensure_output_dir, AtomicFileWriter};
use crate::ParserError;

const DOWNLOAD_PAGE: &str = "download.html";

/// Saves the A4 PDF documentation archive under `downloads/`, replacing a
/// previous copy. Returns the saved path.
pub async fn download(ctx: &ScrapeContext<'_>) -> Result<PathBuf, ParserError> {
    let loader = ctx.loader();
    let downloads_url = join_url(&ctx.site.docs_url, DOWNLOAD_PAGE)?;
    let archive_url = {
        let page = loader.load(&downloads_url).await?;
        find_pdf_a4_link(&page, &ctx.patterns.pdf_a4)?
    };
    let filename = archive_filename(&archive_url)
        .ok_or_else(|| ParserError::MissingFileName(archive_url.to_string()))?;

    let downloads_dir = ctx.layout.downloads_dir();
    ensure_output_dir(&downloads_dir)?;
    let body = loader.load_bytes(&archive_url).await?;
    let path = AtomicFileWriter::new(downloads_dir).write_bytes(&filename, &body)?;
    docs_info!("Archive downloaded and saved to {}", path.display());
    Ok(path)
}

/// Absolute URL of the archive link in the downloads table.
pub fn find_pdf_a4_link(page: &Document, pattern: &Regex) -> Result<Url, ParserError> {
    let main = find_tag(page.root(), "div", &AttrFilter::any().exact("role", "main"))?;
    let table = find_tag(main, "table", &AttrFilter::any().exact("class", "docutils"))?;
    let anchor = find_tag(
        table,
        "a",
        &AttrFilter::any().pattern("href", pattern.clone()),
    )?;
    page.join(href_of(anchor)?)
}
