//! Envelope decoding and status interpretation

use crate::api::transport::RawResponse;
use crate::error::{BitgetError, Result};
use crate::types::api::ApiResponse;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A successfully decoded response
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status
    pub status: StatusCode,
    /// Response headers (rate limit counters and the like)
    pub headers: HeaderMap,
    /// Parsed envelope; `data` is still raw JSON
    pub envelope: ApiResponse,
}

impl Response {
    /// Decode `data` into an endpoint-specific type
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T> {
        let data = &self.envelope.data;
        T::deserialize(data).map_err(|e| BitgetError::Decode {
            source: e,
            body: data.to_string(),
        })
    }

    /// Header value as a string, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Interpret status and body of a raw response
///
/// - non-2xx: [`BitgetError::Status`] with the body text, no JSON parsing
/// - unparseable body: [`BitgetError::Decode`]
/// - `code != "00000"`: [`BitgetError::Api`] carrying the parsed envelope and
///   the response headers
pub fn decode(raw: RawResponse) -> Result<Response> {
    if !raw.status.is_success() {
        return Err(BitgetError::Status {
            status: raw.status.as_u16(),
            body: String::from_utf8_lossy(&raw.body).into_owned(),
        });
    }

    let envelope: ApiResponse =
        serde_json::from_slice(&raw.body).map_err(|e| BitgetError::decode(e, &raw.body))?;

    if !envelope.is_success() {
        return Err(BitgetError::api(envelope, raw.headers));
    }

    Ok(Response {
        status: raw.status,
        headers: raw.headers,
        envelope,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            headers: HeaderMap::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_success_envelope() {
        let response =
            decode(raw(200, r#"{"code":"00000","msg":"success","requestTime":42,"data":{"x":1}}"#))
                .unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.envelope.request_time, 42);
        assert_eq!(response.envelope.data["x"], 1);
    }

    #[test]
    fn test_server_error_is_not_decoded() {
        let err = decode(raw(500, "server error")).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        match err {
            BitgetError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "server error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_2xx_with_json_body_is_still_status_error() {
        let err = decode(raw(429, r#"{"code":"429","msg":"Too Many Requests"}"#)).unwrap_err();
        assert!(matches!(err, BitgetError::Status { status: 429, .. }));
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let err = decode(raw(200, "<html>gateway</html>")).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Decoding);
        assert!(err.to_string().contains("<html>gateway</html>"));
    }

    #[test]
    fn test_application_error_fields() {
        let mut failed = raw(
            200,
            r#"{"code":"40762","msg":"The order amount exceeds the balance","requestTime":7,"data":null}"#,
        );
        failed
            .headers
            .insert("x-ratelimit-remaining", "0".parse().unwrap());
        let err = decode(failed).unwrap_err();

        match err {
            BitgetError::Api {
                code,
                message,
                response,
                headers,
            } => {
                assert_eq!(headers["x-ratelimit-remaining"], "0");
                assert_eq!(code, "40762");
                assert_eq!(message, "The order amount exceeds the balance");
                assert_eq!(response.code, code);
                assert_eq!(response.msg, message);
                assert_eq!(response.request_time, 7);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_into_data() {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Time {
            server_time: String,
        }

        let response = decode(raw(
            200,
            r#"{"code":"00000","msg":"success","requestTime":1,"data":{"serverTime":"1700000000000"}}"#,
        ))
        .unwrap();
        let time: Time = response.clone().into_data().unwrap();
        assert_eq!(time.server_time, "1700000000000");

        let err = response.into_data::<Vec<u32>>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decoding);
    }
}
