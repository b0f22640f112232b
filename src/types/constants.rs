//! Constants used throughout the Bitget UTA SDK

/// Production REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.bitget.com";

/// Business code of a successful response
pub const SUCCESS_CODE: &str = "00000";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default `locale` header value
pub const DEFAULT_LOCALE: &str = "en-US";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("bitget-uta-sdk/", env!("CARGO_PKG_VERSION"));

/// Request header names
pub mod headers {
    /// API key of a signed request
    pub const ACCESS_KEY: &str = "ACCESS-KEY";

    /// Base64 HMAC-SHA256 signature
    pub const ACCESS_SIGN: &str = "ACCESS-SIGN";

    /// Millisecond timestamp that went into the signature
    pub const ACCESS_TIMESTAMP: &str = "ACCESS-TIMESTAMP";

    /// Passphrase chosen when the API key was created
    pub const ACCESS_PASSPHRASE: &str = "ACCESS-PASSPHRASE";

    /// Demo trading marker
    pub const PAPTRADING: &str = "paptrading";

    /// Value of the demo trading marker
    pub const PAPTRADING_ON: &str = "1";

    /// Response language
    pub const LOCALE: &str = "locale";
}

/// Environment variables read by `Config::from_env`
pub mod env {
    /// API key
    pub const API_KEY: &str = "BITGET_API_KEY";
    /// Secret key
    pub const SECRET_KEY: &str = "BITGET_SECRET_KEY";
    /// Passphrase
    pub const PASSPHRASE: &str = "BITGET_PASSPHRASE";
    /// Optional base URL override
    pub const BASE_URL: &str = "BITGET_BASE_URL";
    /// Optional demo trading switch (`1` / `true`)
    pub const DEMO_TRADING: &str = "BITGET_DEMO_TRADING";
}

/// UTA v3 endpoint paths
pub mod paths {
    /// Server time
    pub const PUBLIC_TIME: &str = "/api/v3/public/time";

    /// Instrument specifications
    pub const MARKET_INSTRUMENTS: &str = "/api/v3/market/instruments";
    /// Tickers
    pub const MARKET_TICKERS: &str = "/api/v3/market/tickers";
    /// Order book depth
    pub const MARKET_ORDERBOOK: &str = "/api/v3/market/orderbook";
    /// Candlesticks
    pub const MARKET_CANDLES: &str = "/api/v3/market/candles";
    /// Recent public trades
    pub const MARKET_FILLS: &str = "/api/v3/market/fills";

    /// Account settings
    pub const ACCOUNT_SETTINGS: &str = "/api/v3/account/settings";
    /// Account assets
    pub const ACCOUNT_ASSETS: &str = "/api/v3/account/assets";
    /// Leverage adjustment
    pub const ACCOUNT_SET_LEVERAGE: &str = "/api/v3/account/set-leverage";

    /// Place order
    pub const TRADE_PLACE_ORDER: &str = "/api/v3/trade/place-order";
    /// Cancel order
    pub const TRADE_CANCEL_ORDER: &str = "/api/v3/trade/cancel-order";
    /// Cancel all orders of a symbol
    pub const TRADE_CANCEL_SYMBOL_ORDER: &str = "/api/v3/trade/cancel-symbol-order";
    /// Order details
    pub const TRADE_ORDER_INFO: &str = "/api/v3/trade/order-info";
    /// Open orders
    pub const TRADE_UNFILLED_ORDERS: &str = "/api/v3/trade/unfilled-orders";
    /// Order history
    pub const TRADE_HISTORY_ORDERS: &str = "/api/v3/trade/history-orders";
    /// Private fills
    pub const TRADE_FILLS: &str = "/api/v3/trade/fills";

    /// Current positions
    pub const POSITION_CURRENT: &str = "/api/v3/position/current-position";
}
