//! HTTP transport
//!
//! The transport executes exactly one request with a wall-clock timeout and
//! hands back the status, headers and raw body. It never retries.

use crate::api::request::PreparedRequest;
use crate::error::{BitgetError, Result};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::redirect::Policy;
use reqwest::{Client as HttpClient, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Undecoded HTTP response
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body bytes
    pub body: Vec<u8>,
}

/// Executes prepared requests
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Send `request`, failing with [`BitgetError::Timeout`] if no complete
    /// response arrives within `timeout`
    async fn send(&self, request: PreparedRequest, timeout: Duration) -> Result<RawResponse>;
}

/// [`Transport`] backed by `reqwest`
///
/// Connection pooling is whatever `reqwest::Client` provides. Redirects are
/// never followed: a 3xx is handed back like any other non-2xx status, and
/// the signed headers stay with the configured host.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: HttpClient,
}

impl ReqwestTransport {
    /// Create a transport with a fresh `reqwest::Client`
    pub fn new() -> Result<Self> {
        let http_client = HttpClient::builder()
            .redirect(Policy::none())
            .build()
            .map_err(|e| BitgetError::config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { http_client })
    }

    /// Wrap an existing `reqwest::Client`
    ///
    /// The client should be built with `redirect::Policy::none()`; a client
    /// that follows redirects forwards the `ACCESS-*` headers to the target.
    pub fn with_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: PreparedRequest, timeout: Duration) -> Result<RawResponse> {
        let PreparedRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self
            .http_client
            .request(method, &url)
            .headers(headers)
            .timeout(timeout);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let exchange = async {
            let response = builder.send().await?;
            let status = response.status();
            let headers = response.headers().clone();
            let body = response.bytes().await?.to_vec();
            Ok::<_, reqwest::Error>(RawResponse {
                status,
                headers,
                body,
            })
        };

        match exchange.await {
            Ok(raw) => {
                debug!(status = raw.status.as_u16(), bytes = raw.body.len(), "Received response");
                Ok(raw)
            }
            Err(e) if e.is_timeout() => Err(BitgetError::Timeout(timeout)),
            Err(e) => Err(BitgetError::Http(e)),
        }
    }
}
