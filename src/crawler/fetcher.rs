//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with the configured headers and timeout
//! - GET requests to fetch page content
//! - Outcome classification (success, HTTP error, network error)
//!
//! Every fetch of a crawl, the seed included, goes through one [`PageFetcher`].

use crate::config::{CrawlerConfig, RequestConfig};
use crate::PageError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// Server answered 200 OK
    Success {
        /// The requested URL
        url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Server answered with any status other than 200, redirects included
    HttpError {
        /// The requested URL
        url: String,
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, DNS failure, timeout, broken body)
    NetworkError {
        /// The requested URL
        url: String,
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// The URL that was requested
    pub fn url(&self) -> &str {
        match self {
            Self::Success { url, .. }
            | Self::HttpError { url, .. }
            | Self::NetworkError { url, .. } => url,
        }
    }

    /// Splits the result into the page body or the failure to report
    pub fn into_body(self) -> Result<String, PageError> {
        match self {
            Self::Success { body, .. } => Ok(body),
            Self::HttpError { url, status_code } => Err(PageError::Http { url, status_code }),
            Self::NetworkError { url, error } => Err(PageError::Network {
                url,
                message: error,
            }),
        }
    }
}

/// Source of page content for the crawl controller
///
/// Implementations never fail with an error: every problem is classified
/// into a [`FetchResult`] variant so that the crawl can carry on.
#[async_trait]
pub trait PageFetcher {
    /// Fetches a single URL with a GET request
    async fn fetch(&self, url: &str) -> FetchResult;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `request` - Headers sent with every request
/// * `timeout` - Upper bound for one whole request
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(
    request: &RequestConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    if let Ok(accept) = HeaderValue::from_str(&request.accept) {
        headers.insert(ACCEPT, accept);
    } else {
        tracing::warn!("Ignoring invalid Accept header value: {}", request.accept);
    }

    Client::builder()
        .user_agent(request.user_agent.clone())
        .default_headers(headers)
        .timeout(timeout)
        .connect_timeout(timeout)
        .redirect(Policy::none()) // Redirects count as failures
        .gzip(true)
        .brotli(true)
        .build()
}

/// reqwest-backed fetcher used for real crawls
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher from the crawler and request configuration
    pub fn new(crawler: &CrawlerConfig, request: &RequestConfig) -> Result<Self, reqwest::Error> {
        let client = build_http_client(request, Duration::from_secs(crawler.timeout_secs))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        fetch_url(&self.client, url).await
    }
}

/// Fetches a URL and classifies the outcome
///
/// # Classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 200 | Success |
/// | Any other status (3xx included) | HttpError |
/// | Timeout | NetworkError |
/// | Connection refused / DNS failure | NetworkError |
/// | Body could not be read | NetworkError |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();

            if status != StatusCode::OK {
                return FetchResult::HttpError {
                    url: url.to_string(),
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success {
                    url: url.to_string(),
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => FetchResult::NetworkError {
                    url: url.to_string(),
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                e.to_string()
            };

            FetchResult::NetworkError {
                url: url.to_string(),
                error,
            }
        }
    }
}
