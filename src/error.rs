//! Error types for the Bitget UTA SDK

use crate::types::api::ApiResponse;
use reqwest::header::HeaderMap;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for Bitget operations
pub type Result<T> = std::result::Result<T, BitgetError>;

/// Main error type for Bitget SDK operations
#[derive(Error, Debug)]
pub enum BitgetError {
    /// A required request parameter was not set
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// Invalid parameter errors
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Signed request attempted without usable credentials
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP request errors (DNS, connect, TLS, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The request did not complete within the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Non-2xx HTTP status; body is kept verbatim
    #[error("HTTP status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The caller's cancellation signal fired before the response arrived
    #[error("Request cancelled")]
    Cancelled,

    /// The response body was not a valid envelope (or `data` did not match
    /// the expected shape)
    #[error("Failed to decode response: {source}; body: {body}")]
    Decode {
        /// Underlying parse failure
        #[source]
        source: serde_json::Error,
        /// Raw bytes that failed to parse, lossily converted
        body: String,
    },

    /// JSON serialization errors (request bodies)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API errors returned from Bitget
    #[error("API error {code}: {message}")]
    Api {
        /// Error code from the API
        code: String,
        /// Error message from the API
        message: String,
        /// Full envelope as returned by the exchange
        response: Box<ApiResponse>,
        /// Response headers (rate limit counters and the like)
        headers: Box<HeaderMap>,
    },
}

/// Coarse classification of a [`BitgetError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Detected locally before any I/O
    Validation,
    /// Network failure, timeout, cancellation or non-2xx status
    Transport,
    /// Malformed response body
    Decoding,
    /// Well-formed envelope with a non-success code
    Application,
}

impl BitgetError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new authentication error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Create a new invalid parameter error
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// Create a decode error keeping the offending bytes
    pub fn decode(source: serde_json::Error, body: &[u8]) -> Self {
        Self::Decode {
            source,
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// Create an application error from a parsed envelope and its headers
    pub fn api(response: ApiResponse, headers: HeaderMap) -> Self {
        Self::Api {
            code: response.code.clone(),
            message: response.msg.clone(),
            response: Box::new(response),
            headers: Box::new(headers),
        }
    }

    /// Which part of the pipeline produced this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingParameter(_)
            | Self::InvalidParameter(_)
            | Self::Auth(_)
            | Self::Config(_)
            | Self::Json(_) => ErrorKind::Validation,
            Self::Http(_) | Self::Timeout(_) | Self::Status { .. } | Self::Cancelled => {
                ErrorKind::Transport
            }
            Self::Decode { .. } => ErrorKind::Decoding,
            Self::Api { .. } => ErrorKind::Application,
        }
    }

    /// Exchange error code, if this is an application error
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Response headers, if this is an application error
    pub fn headers(&self) -> Option<&HeaderMap> {
        match self {
            Self::Api { headers, .. } => Some(headers),
            _ => None,
        }
    }

    /// HTTP status, if the server answered with a non-2xx code
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_missing_parameter_names_field() {
        let err = BitgetError::MissingParameter("category");
        assert_eq!(err.to_string(), "Missing required parameter: category");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_api_error_keeps_envelope() {
        let response = ApiResponse {
            code: "40034".to_string(),
            msg: "Parameter does not exist".to_string(),
            request_time: 1_700_000_000_000,
            data: Value::Null,
        };
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-remaining", "19".parse().unwrap());
        let err = BitgetError::api(response, headers);

        assert_eq!(err.kind(), ErrorKind::Application);
        assert_eq!(err.api_code(), Some("40034"));
        assert_eq!(err.to_string(), "API error 40034: Parameter does not exist");
        assert_eq!(err.headers().unwrap()["x-ratelimit-remaining"], "19");
        match err {
            BitgetError::Api { response, .. } => assert_eq!(response.request_time, 1_700_000_000_000),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_status_error_is_transport() {
        let err = BitgetError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.status(), Some(502));
        assert!(err.to_string().contains("bad gateway"));
    }

    #[test]
    fn test_decode_error_keeps_body() {
        let source = serde_json::from_str::<Value>("{oops").unwrap_err();
        let err = BitgetError::decode(source, b"{oops");
        assert_eq!(err.kind(), ErrorKind::Decoding);
        assert!(err.to_string().contains("{oops"));
    }
}
