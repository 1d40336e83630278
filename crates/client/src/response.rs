//! Raw HTTP response metadata returned alongside every decoded value.

use reqwest::header::HeaderMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{ClientError, Result};

/// Status, headers and body of a completed HTTP exchange.
///
/// Returned next to the decoded resource on success and embedded in status
/// and decode errors, so headers such as `ETag` stay reachable either way.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    headers: HeaderMap,
    url: Url,
    body: String,
}

/// `{"message": "..."}` body used by GoCD for errors and delete confirmations.
#[derive(Debug, Deserialize)]
pub(crate) struct MessageBody {
    pub message: String,
}

impl ApiResponse {
    pub fn new(status: u16, headers: HeaderMap, url: Url, body: String) -> Self {
        Self {
            status,
            headers,
            url,
            body,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Look up a header value as a string.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Raw response body.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Decode the body as JSON.
    pub(crate) fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| ClientError::InvalidResponse {
            message: format!(
                "Failed to parse {}: {}",
                std::any::type_name::<T>().rsplit("::").next().unwrap_or("body"),
                e
            ),
            response: Box::new(self.clone()),
        })
    }

    /// Server-provided error message, falling back to the raw body.
    pub(crate) fn error_message(&self) -> String {
        match serde_json::from_str::<MessageBody>(&self.body) {
            Ok(m) => m.message,
            Err(_) if self.body.trim().is_empty() => format!("HTTP {}", self.status),
            Err(_) => self.body.clone(),
        }
    }
}
