//! Error types for the GoCD client.
//!
//! Errors fall into five groups:
//! - request construction (`InvalidUrl`, `InvalidRequestBody`)
//! - transport (`HttpError`, `Timeout`, `ConnectionRefused`, `Cancelled`)
//! - non-2xx responses (`NotFound`, `Unauthorized`, `ApiError`)
//! - decoding (`InvalidResponse`)
//! - a 2xx that is not the exact status an operation requires (`UnexpectedStatus`)
//!
//! Every variant produced after a response arrived carries that
//! [`ApiResponse`], so callers can still inspect status and headers.

use std::time::Duration;
use thiserror::Error;

use crate::response::ApiResponse;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during GoCD client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request path could not be joined onto the base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be serialized.
    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection refused.
    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    /// The caller cancelled the operation before a response was handled.
    #[error("Request cancelled")]
    Cancelled,

    /// 404 from the server.
    #[error("Resource not found: {url}")]
    NotFound {
        url: String,
        response: Box<ApiResponse>,
    },

    /// 401 or 403 from the server.
    #[error("Unauthorized ({status}) at {url}: {message}")]
    Unauthorized {
        status: u16,
        url: String,
        message: String,
        response: Box<ApiResponse>,
    },

    /// Any other non-2xx response.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
        response: Box<ApiResponse>,
    },

    /// The response body could not be decoded.
    #[error("Invalid response format: {message}")]
    InvalidResponse {
        message: String,
        response: Box<ApiResponse>,
    },

    /// The server answered with a success status other than the one required.
    #[error("Unexpected status {} (expected {expected})", .response.status())]
    UnexpectedStatus {
        expected: u16,
        response: Box<ApiResponse>,
    },
}

impl ClientError {
    /// The partial response, when the server answered at all.
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            Self::NotFound { response, .. }
            | Self::Unauthorized { response, .. }
            | Self::ApiError { response, .. }
            | Self::InvalidResponse { response, .. }
            | Self::UnexpectedStatus { response, .. } => Some(response),
            _ => None,
        }
    }

    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        self.response().map(ApiResponse::status)
    }

    /// Check if this error is a 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the caller cancelled the operation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Classify a non-2xx response.
    pub(crate) fn from_status(response: ApiResponse) -> Self {
        let status = response.status();
        let url = crate::client::transport::sanitize_url(Some(response.url()))
            .map(String::from)
            .unwrap_or_default();
        let message = response.error_message();
        let response = Box::new(response);

        match status {
            404 => Self::NotFound { url, response },
            401 | 403 => Self::Unauthorized {
                status,
                url,
                message,
                response,
            },
            _ => Self::ApiError {
                status,
                url,
                message,
                response,
            },
        }
    }
}
