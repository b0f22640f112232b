//! Public endpoints that need neither parameters nor credentials

use crate::services::Endpoint;
use crate::types::constants::paths;
use crate::types::market::ServerTime;
use reqwest::Method;

/// Get server time
#[derive(Debug, Clone, Default)]
pub struct GetServerTime;

impl GetServerTime {
    /// Create the request
    pub fn new() -> Self {
        Self
    }
}

impl Endpoint for GetServerTime {
    type Output = ServerTime;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = paths::PUBLIC_TIME;
    const SIGNED: bool = false;
}
