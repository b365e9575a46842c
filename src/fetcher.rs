use std::path::{Path, PathBuf};

use anyhow::Context as _;
use url::Url;

use crate::feed::LatestFeed;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("GET {url} failed")]
    Network {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("GET {url} failed with status {status}")]
    Status {
        url: Url,
        status: reqwest::StatusCode,
    },
    #[error("read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse latest feed")]
    Parse(#[from] serde_json::Error),
}

/// Where the feed body comes from.
#[derive(Debug, Clone)]
pub enum FeedSource {
    Remote(Url),
    Local(PathBuf),
}

impl std::fmt::Display for FeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedSource::Remote(url) => write!(f, "{url}"),
            FeedSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(user_agent: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .context("build reqwest client")?;
        Ok(Self { client })
    }

    /// One request, no retry.
    pub async fn fetch_feed(&self, source: &FeedSource) -> Result<LatestFeed, FetchError> {
        let bytes = match source {
            FeedSource::Remote(url) => self.get_bytes(url).await?,
            FeedSource::Local(path) => read_local(path).await?,
        };
        tracing::debug!(%source, bytes = bytes.len(), "feed body received");
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get_bytes(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        let network = |source: reqwest::Error| FetchError::Network {
            url: url.clone(),
            source,
        };

        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(network)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.clone(),
                status,
            });
        }

        let bytes = resp.bytes().await.map_err(network)?;
        Ok(bytes.to_vec())
    }
}

async fn read_local(path: &Path) -> Result<Vec<u8>, FetchError> {
    tokio::fs::read(path).await.map_err(|source| FetchError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_local_file_is_a_read_error() {
        let fetcher = Fetcher::new("test-agent").unwrap();
        let source = FeedSource::Local(PathBuf::from("/definitely/not/here/latest.json"));
        let err = fetcher.fetch_feed(&source).await.unwrap_err();
        assert!(matches!(err, FetchError::Read { .. }));
    }

    #[tokio::test]
    async fn malformed_local_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latest.json");
        std::fs::write(&path, r#"{"topic_list": {"topics": "nope"}}"#).unwrap();

        let fetcher = Fetcher::new("test-agent").unwrap();
        let err = fetcher
            .fetch_feed(&FeedSource::Local(path))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn source_display() {
        let url = Url::parse("https://cdn.example.com/latest.json").unwrap();
        assert_eq!(
            FeedSource::Remote(url).to_string(),
            "https://cdn.example.com/latest.json"
        );
    }
}
