//! HMAC-SHA256 request signing
//!
//! A signed Bitget request carries four headers. The signature is
//!
//! ```text
//! base64(HMAC_SHA256(secret_key, timestamp + METHOD + path [+ "?" + query] [+ body]))
//! ```
//!
//! with no separators between the segments. The query string must be exactly
//! the one sent on the wire, otherwise the server rejects the request.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use reqwest::Method;
use sha2::Sha256;

use crate::signer::credentials::Credentials;
use crate::types::constants::headers;

type HmacSha256 = Hmac<Sha256>;

/// Compute `base64(HMAC_SHA256(secret_key, message))`
pub fn sign(secret_key: &str, message: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret_key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

/// Build the canonical string that gets signed
///
/// `query` is the already-encoded query string without the leading `?`; it is
/// appended together with `?` only when non-empty. `body` is appended verbatim.
pub fn signature_payload(
    timestamp: &str,
    method: &Method,
    path: &str,
    query: &str,
    body: &str,
) -> String {
    let mut payload =
        String::with_capacity(timestamp.len() + path.len() + query.len() + body.len() + 8);
    payload.push_str(timestamp);
    payload.push_str(method.as_str());
    payload.push_str(path);
    if !query.is_empty() {
        payload.push('?');
        payload.push_str(query);
    }
    payload.push_str(body);
    payload
}

/// Signs requests with one set of credentials
#[derive(Debug, Clone)]
pub struct BitgetSigner {
    credentials: Credentials,
}

impl BitgetSigner {
    /// Create a new signer
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Sign one request and return the authentication headers
    pub fn auth_headers(
        &self,
        timestamp: &str,
        method: &Method,
        path: &str,
        query: &str,
        body: &str,
    ) -> [(&'static str, String); 4] {
        let payload = signature_payload(timestamp, method, path, query, body);
        let signature = sign(self.credentials.secret_key(), &payload);

        [
            (headers::ACCESS_KEY, self.credentials.api_key().to_string()),
            (headers::ACCESS_SIGN, signature),
            (headers::ACCESS_TIMESTAMP, timestamp.to_string()),
            (headers::ACCESS_PASSPHRASE, self.credentials.passphrase().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_vector() {
        let signature = sign("test_secret_key", "1234567890GETapi/v3/account/settings");
        assert_eq!(signature, "ePQkXFxpHaTJ4qBp+vIi0gkIv9TnPQ8uUC0VlhC39H8=");
    }

    #[test]
    fn test_deterministic_signature() {
        let first = sign("secret", "1700000000000GET/api/v3/account/assets");
        let second = sign("secret", "1700000000000GET/api/v3/account/assets");
        assert_eq!(first, second);
        assert_ne!(first, sign("other", "1700000000000GET/api/v3/account/assets"));
        assert!(BASE64.decode(&first).is_ok());
        assert_eq!(BASE64.decode(&first).unwrap().len(), 32);
    }

    #[test]
    fn test_payload_segments() {
        assert_eq!(
            signature_payload("1", &Method::GET, "/api/v3/account/settings", "", ""),
            "1GET/api/v3/account/settings"
        );
        assert_eq!(
            signature_payload(
                "1700000000000",
                &Method::GET,
                "/api/v3/market/tickers",
                "category=SPOT&symbol=BTCUSDT",
                ""
            ),
            "1700000000000GET/api/v3/market/tickers?category=SPOT&symbol=BTCUSDT"
        );
        assert_eq!(
            signature_payload(
                "1700000000000",
                &Method::POST,
                "/api/v3/trade/place-order",
                "",
                r#"{"category":"SPOT"}"#
            ),
            r#"1700000000000POST/api/v3/trade/place-order{"category":"SPOT"}"#
        );
    }

    #[test]
    fn test_signed_query_and_body_vectors() {
        let query = signature_payload(
            "1700000000000",
            &Method::GET,
            "/api/v3/market/tickers",
            "category=SPOT&symbol=BTCUSDT",
            "",
        );
        assert_eq!(
            sign("test_secret_key", &query),
            "CDGVVPyQFeod1HQdBQSwC9QEADRgutv56FJ6S6tO2Qo="
        );

        let body = signature_payload(
            "1700000000000",
            &Method::POST,
            "/api/v3/trade/place-order",
            "",
            r#"{"category":"SPOT"}"#,
        );
        assert_eq!(
            sign("test_secret_key", &body),
            "0B9sodLYv5tXALt7EKoajYgx+eLT7cw+7HV6epX40EU="
        );
    }

    #[test]
    fn test_auth_headers() {
        let creds = Credentials::new("my_key", "test_secret_key", "my_pass").unwrap();
        let signer = BitgetSigner::new(creds);

        let auth = signer.auth_headers("1234567890", &Method::GET, "api/v3/account/settings", "", "");

        assert_eq!(auth[0], (headers::ACCESS_KEY, "my_key".to_string()));
        assert_eq!(
            auth[1],
            (
                headers::ACCESS_SIGN,
                "ePQkXFxpHaTJ4qBp+vIi0gkIv9TnPQ8uUC0VlhC39H8=".to_string()
            )
        );
        assert_eq!(auth[2], (headers::ACCESS_TIMESTAMP, "1234567890".to_string()));
        assert_eq!(auth[3], (headers::ACCESS_PASSPHRASE, "my_pass".to_string()));
    }
}
