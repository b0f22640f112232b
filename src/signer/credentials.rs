//! API credentials for signed requests
//!
//! The secret key and passphrase are wrapped in `secrecy::SecretString`, which
//! zeroizes them on drop and keeps them out of `Debug` output.

use crate::error::{BitgetError, Result};
use crate::types::constants::env;
use secrecy::{ExposeSecret, SecretString};

/// API key, secret key and passphrase of one Bitget API key
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// HMAC secret
    secret_key: SecretString,
    /// Passphrase set when the key was created
    passphrase: SecretString,
}

impl Credentials {
    /// Create new credentials
    ///
    /// None of the three values may be empty.
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Result<Self> {
        let api_key = api_key.into();
        let secret_key = secret_key.into();
        let passphrase = passphrase.into();

        if api_key.is_empty() {
            return Err(BitgetError::config("API key is empty"));
        }
        if secret_key.is_empty() {
            return Err(BitgetError::config("Secret key is empty"));
        }
        if passphrase.is_empty() {
            return Err(BitgetError::config("Passphrase is empty"));
        }

        Ok(Self {
            api_key,
            secret_key: SecretString::from(secret_key),
            passphrase: SecretString::from(passphrase),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BITGET_API_KEY`, `BITGET_SECRET_KEY` and `BITGET_PASSPHRASE`.
    pub fn from_env() -> Result<Self> {
        let read = |name: &str| {
            std::env::var(name)
                .map_err(|_| BitgetError::config(format!("Environment variable not set: {}", name)))
        };
        Self::new(read(env::API_KEY)?, read(env::SECRET_KEY)?, read(env::PASSPHRASE)?)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }

    pub(crate) fn passphrase(&self) -> &str {
        self.passphrase.expose_secret()
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret_key: SecretString::from(self.secret_key.expose_secret().to_string()),
            passphrase: SecretString::from(self.passphrase.expose_secret().to_string()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", self.api_key.chars().take(6).collect::<String>()),
            )
            .field("secret_key", &"[REDACTED]")
            .field("passphrase", &"[REDACTED]")
            .finish()
    }
}
