//! Request descriptors and the builder that turns them into signed HTTP requests

use crate::api::utils::{encode_query, join_url};
use crate::error::{BitgetError, Result};
use crate::signer::config::check_timeout;
use crate::signer::{BitgetSigner, Config};
use crate::types::constants::headers;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything needed to issue one API call
///
/// Query parameters live in a sorted map, so the encoded query string (and the
/// signature computed over it) does not depend on insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    method: Method,
    path: String,
    query: BTreeMap<String, String>,
    body: Option<String>,
    signed: bool,
}

impl RequestDescriptor {
    /// Create a descriptor for `method` + `path`
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: BTreeMap::new(),
            body: None,
            signed: false,
        }
    }

    /// GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Mark the request as signed (or not)
    pub fn signed(mut self, signed: bool) -> Self {
        self.signed = signed;
        self
    }

    /// Add a query parameter, replacing any previous value for `key`
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.insert(key.into(), value.to_string());
        self
    }

    /// Add a query parameter only when `value` is present
    pub fn query_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Replace all query parameters
    pub fn query_params(mut self, params: BTreeMap<String, String>) -> Self {
        self.query = params;
        self
    }

    /// Serialize `body` as the JSON request body
    pub fn json_body<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }

    /// Use `body` verbatim as the request body
    pub fn raw_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// HTTP method
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Endpoint path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in wire order
    pub fn query_map(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    /// Raw request body
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Whether the request needs authentication headers
    pub fn is_signed(&self) -> bool {
        self.signed
    }
}

/// A fully assembled HTTP request, ready for a [`crate::api::Transport`]
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL including the encoded query string
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: Option<String>,
}

impl PreparedRequest {
    /// Header value as a string, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Turns descriptors into [`PreparedRequest`]s
///
/// Holds only immutable state taken from [`Config`], so one builder can serve
/// any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: String,
    signer: Option<BitgetSigner>,
    demo_trading: bool,
    user_agent: HeaderValue,
    locale: HeaderValue,
}

impl RequestBuilder {
    /// Create a builder from client configuration
    pub fn new(config: &Config) -> Result<Self> {
        check_timeout(config.timeout_secs)?;
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| BitgetError::config(format!("Invalid user agent: {}", e)))?;
        let locale = HeaderValue::from_str(&config.locale)
            .map_err(|e| BitgetError::config(format!("Invalid locale: {}", e)))?;

        Ok(Self {
            base_url: config.base_url().to_string(),
            signer: config.credentials.clone().map(BitgetSigner::new),
            demo_trading: config.demo_trading,
            user_agent,
            locale,
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether signed requests can be built
    pub fn can_sign(&self) -> bool {
        self.signer.is_some()
    }

    /// Assemble URL, headers and body for one call
    ///
    /// `timestamp_ms` is the signing time; it is sent as `ACCESS-TIMESTAMP`.
    pub fn build(&self, descriptor: &RequestDescriptor, timestamp_ms: i64) -> Result<PreparedRequest> {
        let query = encode_query(descriptor.query_map());
        let mut url = join_url(&self.base_url, descriptor.path());
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, self.user_agent.clone());
        headers.insert(HeaderName::from_static(headers::LOCALE), self.locale.clone());

        if self.demo_trading {
            headers.insert(
                HeaderName::from_static(headers::PAPTRADING),
                HeaderValue::from_static(headers::PAPTRADING_ON),
            );
        }

        if descriptor.is_signed() {
            let signer = self.signer.as_ref().ok_or_else(|| {
                BitgetError::auth(format!("Credentials required for {}", descriptor.path()))
            })?;

            let timestamp = timestamp_ms.to_string();
            let auth = signer.auth_headers(
                &timestamp,
                descriptor.method(),
                descriptor.path(),
                &query,
                descriptor.body().unwrap_or(""),
            );
            for (name, value) in auth {
                let invalid = || BitgetError::auth(format!("Invalid characters in {} header", name));
                let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
                let header_value = HeaderValue::from_str(&value).map_err(|_| invalid())?;
                headers.insert(header_name, header_value);
            }
        }

        Ok(PreparedRequest {
            method: descriptor.method().clone(),
            url,
            headers,
            body: descriptor.body.clone(),
        })
    }
}
