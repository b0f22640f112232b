//! Configuration for the Bitget UTA SDK

use crate::error::{BitgetError, Result};
use crate::signer::credentials::Credentials;
use crate::types::constants::{env, DEFAULT_BASE_URL, DEFAULT_LOCALE, DEFAULT_TIMEOUT_SECS, USER_AGENT};
use std::time::Duration;
use url::Url;

/// Configuration for a Bitget client
///
/// Built once and handed to [`crate::ApiClient::new`]; the client never
/// mutates it while requests are in flight.
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL, validated and without trailing slash
    api_url: String,

    /// Credentials for signed endpoints; public endpoints work without
    pub credentials: Option<Credentials>,

    /// Send the demo trading marker on every request
    pub demo_trading: bool,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent header
    pub user_agent: String,

    /// `locale` header, controls the language of error messages
    pub locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::public()
    }
}

impl Config {
    /// Configuration for public endpoints only
    pub fn public() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            credentials: None,
            demo_trading: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: USER_AGENT.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    /// Create a new configuration with credentials
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key
    /// * `secret_key` - Secret key used for HMAC signing
    /// * `passphrase` - Passphrase chosen when the key was created
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self::public().with_credentials(Credentials::new(api_key, secret_key, passphrase)?))
    }

    /// Create a configuration from environment variables
    ///
    /// Requires `BITGET_API_KEY`, `BITGET_SECRET_KEY` and `BITGET_PASSPHRASE`.
    /// `BITGET_BASE_URL` and `BITGET_DEMO_TRADING` (`1` / `true`) are optional.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::public().with_credentials(Credentials::from_env()?);

        if let Ok(base_url) = std::env::var(env::BASE_URL) {
            config = config.with_base_url(&base_url)?;
        }
        if let Ok(flag) = std::env::var(env::DEMO_TRADING) {
            config = config.with_demo_trading(matches!(flag.trim(), "1" | "true" | "TRUE" | "True"));
        }

        Ok(config)
    }

    /// Set the API base URL
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.api_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Enable or disable demo trading
    pub fn with_demo_trading(mut self, enabled: bool) -> Self {
        self.demo_trading = enabled;
        self
    }

    /// Set the request timeout; zero is rejected
    pub fn with_timeout(mut self, timeout_secs: u64) -> Result<Self> {
        check_timeout(timeout_secs)?;
        self.timeout_secs = timeout_secs;
        Ok(self)
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the `locale` header
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.api_url
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check whether signed endpoints can be called
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }
}

/// Validate a base URL and normalize it to have no trailing slash
pub(crate) fn parse_base_url(base_url: &str) -> Result<String> {
    let url = Url::parse(base_url)
        .map_err(|e| BitgetError::config(format!("Invalid API URL {}: {}", base_url, e)))?;
    match url.scheme() {
        "https" | "http" => Ok(url.as_str().trim_end_matches('/').to_string()),
        other => Err(BitgetError::config(format!("Unsupported URL scheme: {}", other))),
    }
}

/// A zero timeout would fail every request before it is sent
pub(crate) fn check_timeout(timeout_secs: u64) -> Result<()> {
    if timeout_secs == 0 {
        return Err(BitgetError::config("Timeout must be at least 1 second"));
    }
    Ok(())
}
