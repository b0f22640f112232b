//! Response envelope shared by every endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::constants::SUCCESS_CODE;

/// Generic API response wrapper
///
/// Every Bitget response is wrapped as
/// `{"code": "00000", "msg": "success", "requestTime": 1700000000000, "data": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T = Value> {
    /// Business code, `"00000"` on success
    pub code: String,
    /// Human readable message
    #[serde(default)]
    pub msg: String,
    /// Server time in milliseconds
    #[serde(default)]
    pub request_time: i64,
    /// Endpoint-specific payload
    #[serde(default)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Whether the exchange accepted the request
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Server time as `DateTime<Utc>`
    pub fn request_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        use chrono::{TimeZone, Utc};
        Utc.timestamp_millis_opt(self.request_time).single()
    }
}

impl ApiResponse<Value> {
    /// Get the payload as a clean string (without JSON quotes for string values)
    pub fn data_string(&self) -> String {
        match &self.data {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

impl<T> fmt::Display for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.msg)
    }
}

/// Cursor-paginated list payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
    /// Cursor for the next page, absent on the last one
    #[serde(default)]
    pub cursor: Option<String>,
}

impl<T> Page<T> {
    /// Whether another page can be requested
    pub fn has_more(&self) -> bool {
        self.cursor.as_deref().is_some_and(|c| !c.is_empty())
    }
}
