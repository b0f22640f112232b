//! Account and position types for the Bitget UTA API

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Account configuration from /api/v3/account/settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountSettings {
    /// Asset mode, e.g. "single" or "union"
    pub asset_mode: String,
    /// Position mode, "one_way_mode" or "hedge_mode"
    pub hold_mode: String,
    /// Per-symbol margin settings
    pub symbol_config: Vec<SymbolConfig>,
    /// Per-coin margin settings
    pub coin_config: Vec<CoinConfig>,
}

impl AccountSettings {
    /// Whether the account trades in hedge mode
    pub fn is_hedge_mode(&self) -> bool {
        self.hold_mode == "hedge_mode"
    }
}

/// Leverage / margin mode of one symbol
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SymbolConfig {
    /// Product line
    pub category: String,
    /// Symbol name
    pub symbol: String,
    /// "crossed" or "isolated"
    pub margin_mode: String,
    /// Current leverage
    pub leverage: String,
}

/// Margin settings of one coin
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoinConfig {
    /// Coin name
    pub coin: String,
    /// Current leverage
    pub leverage: String,
}

/// Account assets from /api/v3/account/assets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountAssets {
    /// Total equity in USD
    pub account_equity: String,
    /// Total equity in USDT
    pub usdt_equity: String,
    /// Total equity in BTC
    pub btc_equity: String,
    /// Unrealised PnL in USD
    pub unrealised_pnl: String,
    /// Unified account maintenance margin ratio
    pub unified_account_mmr: String,
    /// Per-coin balances
    pub assets: Vec<AssetBalance>,
}

impl AccountAssets {
    /// Parse account equity as Decimal
    pub fn account_equity_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(&self.account_equity)
    }

    /// Balance of a single coin
    pub fn asset(&self, coin: &str) -> Option<&AssetBalance> {
        self.assets.iter().find(|a| a.coin.eq_ignore_ascii_case(coin))
    }
}

/// Balance of one coin
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetBalance {
    /// Coin name
    pub coin: String,
    /// Coin equity
    pub equity: String,
    /// Equity in USD
    pub usd_value: String,
    /// Wallet balance
    pub balance: String,
    /// Available for trading
    pub available: String,
    /// Borrowed amount
    pub debt: String,
    /// Frozen amount
    pub locked: String,
}

impl AssetBalance {
    /// Parse available balance as Decimal
    pub fn available_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(&self.available)
    }

    /// Parse locked balance as Decimal
    pub fn locked_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(&self.locked)
    }
}

/// Open position from /api/v3/position/current-position
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Position {
    /// Product line
    pub category: String,
    /// Symbol name
    pub symbol: String,
    /// Margin coin
    pub margin_coin: String,
    /// "long" or "short"
    pub pos_side: String,
    /// "crossed" or "isolated"
    pub margin_mode: String,
    /// Position size
    pub total: String,
    /// Closable size
    pub available: String,
    /// Size locked by close orders
    pub frozen: String,
    /// Leverage
    pub leverage: String,
    /// Average entry price
    pub avg_price: String,
    /// Mark price
    pub mark_price: String,
    /// Unrealised PnL
    pub unrealised_pnl: String,
    /// Estimated liquidation price
    pub liquidation_price: String,
    /// Creation time in milliseconds
    pub created_time: String,
    /// Last update time in milliseconds
    pub updated_time: String,
}

impl Position {
    /// Parse position size as Decimal
    pub fn total_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(&self.total)
    }

    /// Parse unrealised PnL as Decimal
    pub fn unrealised_pnl_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(&self.unrealised_pnl)
    }
}
