//! Account endpoints (signed)

use crate::api::request::RequestDescriptor;
use crate::error::Result;
use crate::services::{require, require_str, Endpoint};
use crate::types::account::{AccountAssets, AccountSettings};
use crate::types::constants::paths;
use crate::types::market::Category;
use crate::types::orders::PosSide;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// Get account settings (asset mode, hold mode, leverage per symbol)
#[derive(Debug, Clone, Default)]
pub struct GetAccountSettings;

impl GetAccountSettings {
    /// Create the request
    pub fn new() -> Self {
        Self
    }
}

impl Endpoint for GetAccountSettings {
    type Output = AccountSettings;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = paths::ACCOUNT_SETTINGS;
    const SIGNED: bool = true;
}

/// Get account equity and per-coin balances
#[derive(Debug, Clone, Default)]
pub struct GetAccountAssets;

impl GetAccountAssets {
    /// Create the request
    pub fn new() -> Self {
        Self
    }
}

impl Endpoint for GetAccountAssets {
    type Output = AccountAssets;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = paths::ACCOUNT_ASSETS;
    const SIGNED: bool = true;
}

/// Set leverage for a symbol
///
/// In hedge mode `pos_side` selects which side the leverage applies to.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLeverage {
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    leverage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    coin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pos_side: Option<PosSide>,
}

impl SetLeverage {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Product line (required)
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Symbol (required)
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Leverage multiple (required), e.g. `10` or `"2.5"`
    pub fn leverage(mut self, leverage: impl ToString) -> Self {
        self.leverage = Some(leverage.to_string());
        self
    }

    /// Margin coin, for margin categories
    pub fn coin(mut self, coin: impl Into<String>) -> Self {
        self.coin = Some(coin.into());
        self
    }

    /// Position side in hedge mode
    pub fn pos_side(mut self, pos_side: PosSide) -> Self {
        self.pos_side = Some(pos_side);
        self
    }
}

impl Endpoint for SetLeverage {
    type Output = Value;
    const METHOD: Method = Method::POST;
    const PATH: &'static str = paths::ACCOUNT_SET_LEVERAGE;
    const SIGNED: bool = true;

    fn validate(&self) -> Result<()> {
        require(&self.category, "category")?;
        require_str(&self.symbol, "symbol")?;
        require_str(&self.leverage, "leverage")
    }

    fn apply(&self, request: RequestDescriptor) -> Result<RequestDescriptor> {
        request.json_body(self)
    }
}
