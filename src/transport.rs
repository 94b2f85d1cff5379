//! Single-shot HTTP GET against the TCGdex REST API.
//!
//! Every call builds a fresh request from the configured base path; nothing is
//! cached or retried, and no state is shared between calls beyond the
//! connection pool inside [`reqwest::Client`].

use reqwest::{Client, StatusCode, Url};

use crate::error::{Result, TcgDexError};

/// Outcome of a GET that reached the upstream and got an answer it understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    /// 2xx response body.
    Found(Vec<u8>),
    /// HTTP 404.
    NotFound,
}

#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    base: Url,
}

impl Transport {
    /// Create a transport rooted at `base` (e.g. `https://api.tcgdex.net/v2/en`).
    ///
    /// Fails with [`TcgDexError::InvalidRequest`] unless `base` is an absolute
    /// `http`/`https` URL that can carry a path.
    pub fn new(client: Client, base: &str) -> Result<Self> {
        let trimmed = base.trim_end_matches('/');
        let base = Url::parse(trimmed)
            .map_err(|e| TcgDexError::InvalidRequest(format!("Invalid base URL '{}': {}", trimmed, e)))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(TcgDexError::InvalidRequest(format!(
                "Unsupported URL scheme '{}' in '{}'",
                base.scheme(),
                base
            )));
        }
        if base.cannot_be_a_base() {
            return Err(TcgDexError::InvalidRequest(format!(
                "Base URL '{}' cannot carry a path",
                base
            )));
        }
        Ok(Self { client, base })
    }

    pub fn base(&self) -> &str {
        self.base.as_str()
    }

    /// Resolve an endpoint, given as path segments, against the base path.
    ///
    /// Each segment is percent-encoded on its own, so an id can never
    /// introduce extra path components or a query string. `.` and `..` are
    /// rejected since URL normalisation would fold them into the parent path.
    pub fn url_for(&self, segments: &[&str]) -> Result<Url> {
        if let Some(empty) = segments.iter().position(|s| s.trim().is_empty()) {
            return Err(TcgDexError::InvalidRequest(format!(
                "Empty path segment at position {} in {:?}",
                empty, segments
            )));
        }
        if let Some(dot) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(TcgDexError::InvalidRequest(format!(
                "Path segment '{}' is not a valid id",
                dot
            )));
        }

        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| TcgDexError::InvalidRequest(format!("Base URL '{}' cannot carry a path", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue one GET for the endpoint.
    ///
    /// 404 is reported as [`Fetched::NotFound`]; every other non-2xx status
    /// and every transport failure is [`TcgDexError::RequestFailed`].
    pub async fn get(&self, segments: &[&str]) -> Result<Fetched> {
        let url = self.url_for(segments)?;

        let resp = self.client.get(url.clone()).send().await.map_err(|e| {
            log::debug!("GET {} failed: {}", url, e);
            TcgDexError::RequestFailed {
                status: None,
                message: e.to_string(),
            }
        })?;

        let status = resp.status();
        log::debug!("GET {} -> {}", url, status.as_u16());

        if status == StatusCode::NOT_FOUND {
            return Ok(Fetched::NotFound);
        }
        if !status.is_success() {
            return Err(TcgDexError::RequestFailed {
                status: Some(status.as_u16()),
                message: format!(
                    "GET {} returned {}",
                    url,
                    status.canonical_reason().unwrap_or("an unexpected status")
                ),
            });
        }

        let body = resp.bytes().await?;
        Ok(Fetched::Found(body.to_vec()))
    }
}
