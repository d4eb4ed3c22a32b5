use std::path::{Path, PathBuf};

use docs_logging::docs_warn;

/// On-disk response bodies keyed by URL, stored with `cacache`.
///
/// Entries never expire; `clear` is the only invalidation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseCache {
    dir: PathBuf,
}

impl ResponseCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Cached body for `url`. Misses and unreadable entries both yield `None`.
    pub async fn get(&self, url: &str) -> Option<Vec<u8>> {
        match cacache::read(&self.dir, url).await {
            Ok(bytes) => Some(bytes),
            Err(cacache::Error::EntryNotFound(..)) => None,
            Err(err) => {
                docs_warn!("Ignoring unreadable cache entry for {}: {}", url, err);
                None
            }
        }
    }

    pub async fn put(&self, url: &str, body: &[u8]) -> Result<(), cacache::Error> {
        cacache::write(&self.dir, url, body).await.map(|_| ())
    }

    pub async fn clear(&self) -> Result<(), cacache::Error> {
        if !self.dir.exists() {
            return Ok(());
        }
        cacache::clear(&self.dir).await
    }
}
