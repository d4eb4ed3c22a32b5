#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};

use docs_core::{OutputLayout, SiteConfig};
use docs_engine::{
    ExtractionPatterns, FailureKind, FetchError, FetchMetadata, FetchOutput, Fetcher,
    ProgressEvent, ProgressSink, ScrapeContext,
};
use url::Url;

pub const DOCS_URL: &str = "https://docs.example.org/3/";
pub const PEPS_URL: &str = "https://peps.example.org/";

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(docs_logging::initialize_for_tests);
}

/// Serves canned bodies by exact URL; anything else is a network failure.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.pages.insert(url.to_string(), body.into());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchOutput, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.pages.get(url.as_str()) {
            Some(bytes) => Ok(FetchOutput {
                bytes: bytes.clone(),
                metadata: FetchMetadata {
                    url: url.to_string(),
                    final_url: url.to_string(),
                    content_type: Some("text/html; charset=utf-8".to_string()),
                    byte_len: bytes.len() as u64,
                    from_cache: false,
                },
            }),
            None => Err(FetchError {
                url: url.to_string(),
                kind: FailureKind::Network,
                message: "connection refused".to_string(),
            }),
        }
    }
}

#[derive(Default, Clone)]
pub struct CollectingSink {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl CollectingSink {
    pub fn take(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ProgressSink for CollectingSink {
    fn emit(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub struct Harness {
    pub fetcher: StubFetcher,
    pub site: SiteConfig,
    pub patterns: ExtractionPatterns,
    pub layout: OutputLayout,
    pub progress: CollectingSink,
}

impl Harness {
    pub fn new(fetcher: StubFetcher, layout: OutputLayout) -> Self {
        init_logging();
        Self {
            fetcher,
            site: SiteConfig::new(DOCS_URL, PEPS_URL).unwrap(),
            patterns: ExtractionPatterns::compile().unwrap(),
            layout,
            progress: CollectingSink::default(),
        }
    }

    pub fn ctx(&self) -> ScrapeContext<'_> {
        ScrapeContext {
            fetcher: &self.fetcher,
            site: &self.site,
            patterns: &self.patterns,
            layout: &self.layout,
            progress: &self.progress,
        }
    }
}

pub fn pep_index(rows: &[(&str, &str)]) -> String {
    let body: String = rows
        .iter()
        .map(|(marker, href)| {
            format!(
                "<tr><td><abbr title=\"status\">{marker}</abbr></td>\
                 <td><a class=\"pep reference internal\" href=\"{href}\">{href}</a></td></tr>\n"
            )
        })
        .collect();
    format!(
        "<html><body><section id=\"index-by-category\"><table><tbody>\
         <tr><td><abbr>XX</abbr></td><td><a href=\"ignored/\">0</a></td></tr>\
         </tbody></table></section>\
         <section id=\"numerical-index\"><table><thead><tr><th>PEP</th></tr></thead>\
         <tbody>\n{body}</tbody></table></section></body></html>"
    )
}

pub fn pep_page(status: &str) -> String {
    format!(
        "<html><body><article><h1>PEP</h1>\
         <dl class=\"rfc2822 field-list simple\">\n\
         <dt class=\"field-odd\">Author<span class=\"colon\">:</span></dt>\n\
         <dd class=\"field-odd\">Someone</dd>\n\
         <dt class=\"field-even\">Status<span class=\"colon\">:</span></dt>\n\
         <dd class=\"field-even\"><abbr title=\"lifecycle\">{status}</abbr>\n</dd>\n\
         <dt class=\"field-odd\">Type<span class=\"colon\">:</span></dt>\n\
         <dd class=\"field-odd\">Process</dd>\n\
         </dl></article></body></html>"
    )
}
