//! Feed transport
//!
//! The decoding core only ever sees a finished byte buffer. `Fetcher` is the
//! seam where those bytes come from; `HttpFetcher` is the default
//! implementation that downloads the weekly feed over HTTPS.

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use std::time::Duration;
use thiserror::Error;

use crate::config::FeedConfig;
use crate::decode::decode_calendar;
use crate::error::{Error, Result};
use crate::models::Event;

/// Longest response body kept in a status error message
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Failure obtaining the feed bytes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Remote answered outside the 2xx range
    #[error("Feed returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Remote answered, but not with something that can hold a feed
    #[error("Unexpected feed response: {0}")]
    UnexpectedResponse(String),

    #[error("Feed request timed out: {0}")]
    Timeout(String),

    #[error("Feed request failed: {0}")]
    Request(String),
}

impl TransportError {
    /// HTTP status code, when the remote answered
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Request(format!("Connection failed: {}", err))
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

/// Source of raw feed documents
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch one complete feed document
    async fn fetch(&self) -> std::result::Result<Vec<u8>, TransportError>;
}

/// Downloads the feed with a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    url: String,
}

impl HttpFetcher {
    /// Create a fetcher for `url`
    pub fn new(url: impl Into<String>, timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Create a fetcher from feed configuration
    pub fn from_config(config: &FeedConfig) -> Result<Self> {
        Self::new(&config.url, config.timeout(), &config.user_agent)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self) -> std::result::Result<Vec<u8>, TransportError> {
        tracing::debug!(url = %self.url, "Fetching calendar feed");

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect()
            };
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        if let Some(content_type) = response.headers().get(CONTENT_TYPE) {
            let content_type = content_type
                .to_str()
                .unwrap_or_default()
                .to_ascii_lowercase();
            if !is_feed_content_type(&content_type) {
                return Err(TransportError::UnexpectedResponse(format!(
                    "content type '{}'",
                    content_type
                )));
            }
        }

        let bytes = response.bytes().await?;
        tracing::debug!(bytes = bytes.len(), "Calendar feed fetched");
        Ok(bytes.to_vec())
    }
}

/// JSON or any text type; servers often mislabel JSON as text/plain or text/html
fn is_feed_content_type(content_type: &str) -> bool {
    content_type.contains("json") || content_type.starts_with("text/")
}

/// Fetch a feed document and decode it
///
/// Transport failures come back as `Error::Transport` unchanged; decode
/// failures as `Error::Decode`.
pub async fn fetch_calendar<F>(fetcher: &F) -> Result<Vec<Event>>
where
    F: Fetcher + ?Sized,
{
    let document = fetcher.fetch().await?;
    let events = decode_calendar(&document)?;
    tracing::info!(events = events.len(), "Calendar loaded");
    Ok(events)
}
