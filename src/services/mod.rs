//! Endpoint services
//!
//! Every endpoint is a plain struct with optional fields and chained setters.
//! It describes itself through [`Endpoint`] (method, path, signing, payload)
//! and is executed by [`crate::ApiClient::execute`], which validates it before
//! anything touches the network.

pub mod account;
pub mod market;
pub mod position;
pub mod public;
pub mod trade;

pub use account::*;
pub use market::*;
pub use position::*;
pub use public::*;
pub use trade::*;

use crate::api::request::RequestDescriptor;
use crate::error::{BitgetError, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;

/// Description of one REST endpoint
pub trait Endpoint {
    /// Shape of the envelope's `data` field
    type Output: DeserializeOwned;

    /// HTTP method
    const METHOD: Method;

    /// Endpoint path
    const PATH: &'static str;

    /// Whether the request needs authentication headers
    const SIGNED: bool;

    /// Check required parameters; fails with the first missing one
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Add query parameters and/or body to the bare descriptor
    fn apply(&self, request: RequestDescriptor) -> Result<RequestDescriptor> {
        Ok(request)
    }

    /// Full request description
    fn descriptor(&self) -> Result<RequestDescriptor> {
        let request = RequestDescriptor::new(Self::METHOD, Self::PATH).signed(Self::SIGNED);
        self.apply(request)
    }
}

/// Fail with `MissingParameter(name)` when `value` is absent
pub(crate) fn require<T>(value: &Option<T>, name: &'static str) -> Result<()> {
    match value {
        Some(_) => Ok(()),
        None => Err(BitgetError::MissingParameter(name)),
    }
}

/// Like [`require`], also treating an empty string as absent
pub(crate) fn require_str(value: &Option<String>, name: &'static str) -> Result<()> {
    match value.as_deref() {
        Some(s) if !s.is_empty() => Ok(()),
        _ => Err(BitgetError::MissingParameter(name)),
    }
}

/// Page size bounds shared by list endpoints
pub(crate) fn check_limit(limit: Option<u32>, max: u32) -> Result<()> {
    match limit {
        Some(l) if l == 0 || l > max => Err(BitgetError::invalid_parameter(format!(
            "limit must be between 1 and {}, got {}",
            max, l
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_helpers() {
        assert!(require(&Some(1), "a").is_ok());
        assert!(matches!(
            require::<u8>(&None, "category"),
            Err(BitgetError::MissingParameter("category"))
        ));
        assert!(require_str(&Some("BTCUSDT".to_string()), "symbol").is_ok());
        assert!(matches!(
            require_str(&Some(String::new()), "symbol"),
            Err(BitgetError::MissingParameter("symbol"))
        ));
    }

    #[test]
    fn test_check_limit() {
        assert!(check_limit(None, 100).is_ok());
        assert!(check_limit(Some(100), 100).is_ok());
        assert!(check_limit(Some(0), 100).is_err());
        assert!(check_limit(Some(101), 100).is_err());
    }
}
