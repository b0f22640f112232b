//! Utility functions for request assembly

use chrono::{DateTime, TimeZone, Utc};
use std::collections::BTreeMap;

/// Current Unix time in milliseconds
pub fn timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Wire format of a point in time: milliseconds since epoch as a decimal string
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.timestamp_millis().to_string()
}

/// Parse a decimal millisecond string sent by the exchange
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let millis = value.trim().parse::<i64>().ok()?;
    Utc.timestamp_millis_opt(millis).single()
}

/// Percent-encode query parameters in key order
pub fn encode_query(params: &BTreeMap<String, String>) -> String {
    let mut query = String::new();
    for (i, (key, value)) in params.iter().enumerate() {
        if i > 0 {
            query.push('&');
        }
        query.push_str(&urlencoding::encode(key));
        query.push('=');
        query.push_str(&urlencoding::encode(value));
    }
    query
}

/// Join base URL and endpoint path with exactly one slash between them
pub fn join_url(base_url: &str, path: &str) -> String {
    if base_url.ends_with('/') && path.starts_with('/') {
        format!("{}{}", base_url.trim_end_matches('/'), path)
    } else if !base_url.ends_with('/') && !path.starts_with('/') && !path.is_empty() {
        format!("{}/{}", base_url, path)
    } else {
        format!("{}{}", base_url, path)
    }
}
