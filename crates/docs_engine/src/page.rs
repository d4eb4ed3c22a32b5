use scraper::{ElementRef, Html};
use url::Url;

use crate::decode::decode_utf8;
use crate::fetch::Fetcher;
use crate::ParserError;

/// One parsed page and the URL it was loaded from.
pub struct Document {
    url: Url,
    html: Html,
}

impl Document {
    pub fn parse(url: Url, html: &str) -> Self {
        Self {
            url,
            html: Html::parse_document(html),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// Resolves `href` against this page's URL.
    pub fn join(&self, href: &str) -> Result<Url, ParserError> {
        join_url(&self.url, href)
    }
}

pub fn join_url(base: &Url, href: &str) -> Result<Url, ParserError> {
    base.join(href.trim()).map_err(|source| ParserError::InvalidLink {
        href: href.to_string(),
        base: base.to_string(),
        source,
    })
}

/// Fetch + parse.
pub struct PageLoader<'a> {
    fetcher: &'a dyn Fetcher,
}

impl<'a> PageLoader<'a> {
    pub fn new(fetcher: &'a dyn Fetcher) -> Self {
        Self { fetcher }
    }

    /// Transport failures surface as [`ParserError::ConnectionFailure`].
    pub async fn load(&self, url: &Url) -> Result<Document, ParserError> {
        let output = self.fetcher.fetch(url).await?;
        let decoded = decode_utf8(&output.bytes);
        Ok(Document::parse(url.clone(), &decoded.html))
    }

    pub async fn load_bytes(&self, url: &Url) -> Result<Vec<u8>, ParserError> {
        Ok(self.fetcher.fetch(url).await?.bytes)
    }
}
