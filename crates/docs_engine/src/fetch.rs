use std::time::Duration;

use docs_logging::{docs_debug, docs_info, docs_warn};
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::cache::ResponseCache;
use crate::{FailureKind, FetchError, FetchMetadata, FetchOutput, ProgressEvent};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 256 * 1024 * 1024,
        }
    }
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: ProgressEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn emit(&self, _event: ProgressEvent) {}
}

/// Writes each event to the log at info level, the binary's default.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn emit(&self, event: ProgressEvent) {
        docs_info!("{}: {}/{}", event.mode, event.done, event.total);
    }
}

/// HTTP GET of a single URL.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchOutput, FetchError>;
}

/// The run's HTTP session: one reqwest client plus an optional response cache.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
    settings: FetchSettings,
    cache: Option<ResponseCache>,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .build()
            .map_err(|err| FetchError::new("", FailureKind::Network, err.to_string()))?;
        Ok(Self {
            client,
            settings,
            cache: None,
        })
    }

    pub fn with_cache(mut self, cache: ResponseCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn cache(&self) -> Option<&ResponseCache> {
        self.cache.as_ref()
    }

    /// Empties the response cache, if one is attached.
    pub async fn clear_cache(&self) -> Result<(), cacache::Error> {
        match &self.cache {
            Some(cache) => cache.clear().await,
            None => Ok(()),
        }
    }

    async fn fetch_remote(&self, url: &Url) -> Result<FetchOutput, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| map_reqwest_error(url, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                url.as_str(),
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    url.as_str(),
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|err| map_reqwest_error(url, err))?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    url.as_str(),
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        let metadata = FetchMetadata {
            url: url.to_string(),
            final_url,
            content_type,
            byte_len: bytes.len() as u64,
            from_cache: false,
        };
        Ok(FetchOutput { bytes, metadata })
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchOutput, FetchError> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::new(
                url.as_str(),
                FailureKind::InvalidUrl,
                format!("unsupported scheme {}", url.scheme()),
            ));
        }

        if let Some(cache) = &self.cache {
            if let Some(bytes) = cache.get(url.as_str()).await {
                docs_debug!("cache hit {}", url);
                let byte_len = bytes.len() as u64;
                return Ok(FetchOutput {
                    bytes,
                    metadata: FetchMetadata {
                        url: url.to_string(),
                        final_url: url.to_string(),
                        content_type: None,
                        byte_len,
                        from_cache: true,
                    },
                });
            }
        }

        docs_debug!("GET {}", url);
        let output = self.fetch_remote(url).await?;

        if let Some(cache) = &self.cache {
            if let Err(err) = cache.put(url.as_str(), &output.bytes).await {
                docs_warn!("Failed to cache response for {}: {}", url, err);
            }
        }
        Ok(output)
    }
}

fn map_reqwest_error(url: &Url, err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(url.as_str(), FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(
            url.as_str(),
            FailureKind::RedirectLimitExceeded,
            err.to_string(),
        );
    }
    FetchError::new(url.as_str(), FailureKind::Network, err.to_string())
}
