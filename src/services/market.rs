//! Market data endpoints (unsigned)

use crate::api::request::RequestDescriptor;
use crate::api::utils::format_timestamp;
use crate::error::Result;
use crate::services::{check_limit, require, require_str, Endpoint};
use crate::types::constants::paths;
use crate::types::market::{Candle, CandleInterval, Category, Instrument, OrderBook, PublicFill, Ticker};
use chrono::{DateTime, Utc};
use reqwest::Method;

/// Get instrument specifications
#[derive(Debug, Clone, Default)]
pub struct GetInstruments {
    category: Option<Category>,
    symbol: Option<String>,
}

impl GetInstruments {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Product line (required)
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Restrict to one symbol
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }
}

impl Endpoint for GetInstruments {
    type Output = Vec<Instrument>;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = paths::MARKET_INSTRUMENTS;
    const SIGNED: bool = false;

    fn validate(&self) -> Result<()> {
        require(&self.category, "category")
    }

    fn apply(&self, request: RequestDescriptor) -> Result<RequestDescriptor> {
        Ok(request
            .query_opt("category", self.category)
            .query_opt("symbol", self.symbol.as_deref()))
    }
}

/// Get 24h tickers
#[derive(Debug, Clone, Default)]
pub struct GetTickers {
    category: Option<Category>,
    symbol: Option<String>,
}

impl GetTickers {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Product line (required)
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Restrict to one symbol
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }
}

impl Endpoint for GetTickers {
    type Output = Vec<Ticker>;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = paths::MARKET_TICKERS;
    const SIGNED: bool = false;

    fn validate(&self) -> Result<()> {
        require(&self.category, "category")
    }

    fn apply(&self, request: RequestDescriptor) -> Result<RequestDescriptor> {
        Ok(request
            .query_opt("category", self.category)
            .query_opt("symbol", self.symbol.as_deref()))
    }
}

/// Get an order book snapshot
#[derive(Debug, Clone, Default)]
pub struct GetOrderbook {
    category: Option<Category>,
    symbol: Option<String>,
    limit: Option<u32>,
}

impl GetOrderbook {
    /// Deepest book the exchange serves
    pub const MAX_DEPTH: u32 = 200;

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

    /// Number of levels per side
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Endpoint for GetOrderbook {
    type Output = OrderBook;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = paths::MARKET_ORDERBOOK;
    const SIGNED: bool = false;

    fn validate(&self) -> Result<()> {
        require(&self.category, "category")?;
        require_str(&self.symbol, "symbol")?;
        check_limit(self.limit, Self::MAX_DEPTH)
    }

    fn apply(&self, request: RequestDescriptor) -> Result<RequestDescriptor> {
        Ok(request
            .query_opt("category", self.category)
            .query_opt("symbol", self.symbol.as_deref())
            .query_opt("limit", self.limit))
    }
}

/// Get candlesticks
#[derive(Debug, Clone, Default)]
pub struct GetCandles {
    category: Option<Category>,
    symbol: Option<String>,
    interval: Option<CandleInterval>,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    limit: Option<u32>,
}

impl GetCandles {
    /// Largest page the exchange serves
    pub const MAX_LIMIT: u32 = 100;

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

    /// Candle interval (required)
    pub fn interval(mut self, interval: CandleInterval) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Earliest open time
    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Latest open time
    pub fn end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Number of candles
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Endpoint for GetCandles {
    type Output = Vec<Candle>;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = paths::MARKET_CANDLES;
    const SIGNED: bool = false;

    fn validate(&self) -> Result<()> {
        require(&self.category, "category")?;
        require_str(&self.symbol, "symbol")?;
        require(&self.interval, "interval")?;
        check_limit(self.limit, Self::MAX_LIMIT)
    }

    fn apply(&self, request: RequestDescriptor) -> Result<RequestDescriptor> {
        Ok(request
            .query_opt("category", self.category)
            .query_opt("symbol", self.symbol.as_deref())
            .query_opt("interval", self.interval)
            .query_opt("startTime", self.start_time.map(format_timestamp))
            .query_opt("endTime", self.end_time.map(format_timestamp))
            .query_opt("limit", self.limit))
    }
}

/// Get recent public trades
#[derive(Debug, Clone, Default)]
pub struct GetRecentFills {
    category: Option<Category>,
    symbol: Option<String>,
    limit: Option<u32>,
}

impl GetRecentFills {
    /// Largest page the exchange serves
    pub const MAX_LIMIT: u32 = 100;

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

    /// Number of trades
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Endpoint for GetRecentFills {
    type Output = Vec<PublicFill>;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = paths::MARKET_FILLS;
    const SIGNED: bool = false;

    fn validate(&self) -> Result<()> {
        require(&self.category, "category")?;
        require_str(&self.symbol, "symbol")?;
        check_limit(self.limit, Self::MAX_LIMIT)
    }

    fn apply(&self, request: RequestDescriptor) -> Result<RequestDescriptor> {
        Ok(request
            .query_opt("category", self.category)
            .query_opt("symbol", self.symbol.as_deref())
            .query_opt("limit", self.limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BitgetError;
    use chrono::TimeZone;

    fn missing(result: Result<()>) -> &'static str {
        match result {
            Err(BitgetError::MissingParameter(name)) => name,
            other => panic!("expected missing parameter, got {:?}", other),
        }
    }

    #[test]
    fn test_orderbook_validation_order() {
        assert_eq!(missing(GetOrderbook::new().validate()), "category");
        assert_eq!(missing(GetOrderbook::new().symbol("BTCUSDT").validate()), "category");
        assert_eq!(missing(GetOrderbook::new().category(Category::Spot).validate()), "symbol");
        assert!(GetOrderbook::new()
            .category(Category::Spot)
            .symbol("BTCUSDT")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_orderbook_limit_bounds() {
        let request = GetOrderbook::new()
            .category(Category::Spot)
            .symbol("BTCUSDT")
            .limit(500);
        assert!(matches!(request.validate(), Err(BitgetError::InvalidParameter(_))));
    }

    #[test]
    fn test_candles_validation_and_query() {
        assert_eq!(
            missing(
                GetCandles::new()
                    .category(Category::UsdtFutures)
                    .symbol("ETHUSDT")
                    .validate()
            ),
            "interval"
        );

        let start = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let request = GetCandles::new()
            .category(Category::UsdtFutures)
            .symbol("ETHUSDT")
            .interval(CandleInterval::OneHour)
            .start_time(start)
            .limit(50);
        assert!(request.validate().is_ok());

        let descriptor = request.descriptor().unwrap();
        let query = descriptor.query_map();
        assert_eq!(query["category"], "USDT-FUTURES");
        assert_eq!(query["interval"], "1H");
        assert_eq!(query["startTime"], "1700000000000");
        assert_eq!(query["limit"], "50");
        assert!(!query.contains_key("endTime"));
        assert!(!descriptor.is_signed());
    }

    #[test]
    fn test_tickers_optional_symbol() {
        let descriptor = GetTickers::new()
            .category(Category::Spot)
            .descriptor()
            .unwrap();
        assert_eq!(descriptor.path(), "/api/v3/market/tickers");
        assert_eq!(descriptor.query_map().len(), 1);

        assert_eq!(missing(GetTickers::new().symbol("BTCUSDT").validate()), "category");
        assert_eq!(missing(GetInstruments::new().validate()), "category");
    }

    #[test]
    fn test_recent_fills_query() {
        let request = GetRecentFills::new().category(Category::Spot).symbol("BTCUSDT");
        assert!(request.validate().is_ok());

        let descriptor = request.descriptor().unwrap();
        assert_eq!(descriptor.path(), "/api/v3/market/fills");
        assert_eq!(descriptor.query_map()["symbol"], "BTCUSDT");
        assert!(!descriptor.query_map().contains_key("limit"));
    }
}
