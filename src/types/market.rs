//! Market data types for the Bitget UTA API

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Product line of an instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Spot trading
    #[serde(rename = "SPOT")]
    Spot,
    /// Cross / isolated margin
    #[serde(rename = "MARGIN")]
    Margin,
    /// USDT-margined perpetuals
    #[serde(rename = "USDT-FUTURES")]
    UsdtFutures,
    /// Coin-margined futures
    #[serde(rename = "COIN-FUTURES")]
    CoinFutures,
    /// USDC-margined perpetuals
    #[serde(rename = "USDC-FUTURES")]
    UsdcFutures,
}

impl Category {
    /// Wire spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Spot => "SPOT",
            Category::Margin => "MARGIN",
            Category::UsdtFutures => "USDT-FUTURES",
            Category::CoinFutures => "COIN-FUTURES",
            Category::UsdcFutures => "USDC-FUTURES",
        }
    }

    /// Whether this is a derivatives category
    pub fn is_futures(&self) -> bool {
        matches!(
            self,
            Category::UsdtFutures | Category::CoinFutures | Category::UsdcFutures
        )
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = crate::BitgetError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_uppercase().as_str() {
            "SPOT" => Ok(Category::Spot),
            "MARGIN" => Ok(Category::Margin),
            "USDT-FUTURES" => Ok(Category::UsdtFutures),
            "COIN-FUTURES" => Ok(Category::CoinFutures),
            "USDC-FUTURES" => Ok(Category::UsdcFutures),
            _ => Err(crate::BitgetError::invalid_parameter(format!(
                "Unknown category: {}",
                s
            ))),
        }
    }
}

/// Candlestick granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandleInterval {
    /// 1 minute
    #[serde(rename = "1m")]
    OneMinute,
    /// 3 minutes
    #[serde(rename = "3m")]
    ThreeMinutes,
    /// 5 minutes
    #[serde(rename = "5m")]
    FiveMinutes,
    /// 15 minutes
    #[serde(rename = "15m")]
    FifteenMinutes,
    /// 30 minutes
    #[serde(rename = "30m")]
    ThirtyMinutes,
    /// 1 hour
    #[serde(rename = "1H")]
    OneHour,
    /// 4 hours
    #[serde(rename = "4H")]
    FourHours,
    /// 6 hours
    #[serde(rename = "6H")]
    SixHours,
    /// 12 hours
    #[serde(rename = "12H")]
    TwelveHours,
    /// 1 day
    #[serde(rename = "1D")]
    OneDay,
}

impl std::fmt::Display for CandleInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CandleInterval::OneMinute => "1m",
            CandleInterval::ThreeMinutes => "3m",
            CandleInterval::FiveMinutes => "5m",
            CandleInterval::FifteenMinutes => "15m",
            CandleInterval::ThirtyMinutes => "30m",
            CandleInterval::OneHour => "1H",
            CandleInterval::FourHours => "4H",
            CandleInterval::SixHours => "6H",
            CandleInterval::TwelveHours => "12H",
            CandleInterval::OneDay => "1D",
        };
        f.write_str(s)
    }
}

/// Server time from /api/v3/public/time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    /// Milliseconds since epoch, as a decimal string
    pub server_time: String,
}

impl ServerTime {
    /// Convert to `DateTime<Utc>`
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        crate::api::utils::parse_timestamp(&self.server_time)
    }
}

/// Instrument specification from /api/v3/market/instruments
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Instrument {
    /// Symbol name, e.g. "BTCUSDT"
    pub symbol: String,
    /// Product line
    pub category: String,
    /// Base coin
    pub base_coin: String,
    /// Quote coin
    pub quote_coin: String,
    /// Minimum order quantity
    pub min_order_qty: String,
    /// Maximum order quantity
    pub max_order_qty: String,
    /// Minimum notional value
    pub min_order_amount: String,
    /// Price decimal places
    pub price_precision: String,
    /// Quantity decimal places
    pub quantity_precision: String,
    /// Maximum leverage (futures only)
    pub max_leverage: String,
    /// Listing status, e.g. "online"
    pub status: String,
}

impl Instrument {
    /// Whether the instrument is currently tradable
    pub fn is_online(&self) -> bool {
        self.status.eq_ignore_ascii_case("online")
    }
}

/// Ticker information from /api/v3/market/tickers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ticker {
    /// Product line
    pub category: String,
    /// Symbol name
    pub symbol: String,
    /// Snapshot time in milliseconds
    pub ts: String,
    /// Last traded price
    pub last_price: String,
    /// Opening price 24 hours ago
    #[serde(rename = "openPrice24h")]
    pub open_price_24h: String,
    /// Highest price in the last 24 hours
    #[serde(rename = "highPrice24h")]
    pub high_price_24h: String,
    /// Lowest price in the last 24 hours
    #[serde(rename = "lowPrice24h")]
    pub low_price_24h: String,
    /// Best bid price
    pub bid1_price: String,
    /// Best bid size
    pub bid1_size: String,
    /// Best ask price
    pub ask1_price: String,
    /// Best ask size
    pub ask1_size: String,
    /// Base volume in the last 24 hours
    #[serde(rename = "volume24h")]
    pub volume_24h: String,
    /// Quote turnover in the last 24 hours
    #[serde(rename = "turnover24h")]
    pub turnover_24h: String,
    /// 24h change ratio
    #[serde(rename = "change24h")]
    pub change_24h: String,
    /// Index price (futures only)
    pub index_price: String,
    /// Mark price (futures only)
    pub mark_price: String,
    /// Current funding rate (perpetuals only)
    pub funding_rate: String,
    /// Open interest (futures only)
    pub open_interest: String,
}

impl Ticker {
    /// Parse last price as Decimal
    pub fn last_price_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(&self.last_price)
    }

    /// Mid price from the best bid and ask
    pub fn mid_price(&self) -> Result<Decimal, rust_decimal::Error> {
        let bid = Decimal::from_str(&self.bid1_price)?;
        let ask = Decimal::from_str(&self.ask1_price)?;
        Ok((bid + ask) / Decimal::TWO)
    }
}

/// Order book snapshot from /api/v3/market/orderbook
///
/// Levels are `[price, size]` pairs, best first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderBook {
    /// Asks, ascending price
    pub a: Vec<(Decimal, Decimal)>,
    /// Bids, descending price
    pub b: Vec<(Decimal, Decimal)>,
    /// Snapshot time in milliseconds
    pub ts: String,
}

impl OrderBook {
    /// Best bid `(price, size)`
    pub fn best_bid(&self) -> Option<(Decimal, Decimal)> {
        self.b.first().copied()
    }

    /// Best ask `(price, size)`
    pub fn best_ask(&self) -> Option<(Decimal, Decimal)> {
        self.a.first().copied()
    }

    /// Best ask minus best bid
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()?.0 - self.best_bid()?.0)
    }
}

/// One candlestick from /api/v3/market/candles
///
/// The exchange sends each candle as an array of strings:
/// `[ts, open, high, low, close, volume, turnover]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct Candle {
    /// Open time in milliseconds
    pub ts: i64,
    /// Open price
    pub open: Decimal,
    /// High price
    pub high: Decimal,
    /// Low price
    pub low: Decimal,
    /// Close price
    pub close: Decimal,
    /// Base volume
    pub volume: Decimal,
    /// Quote turnover (absent on some categories)
    pub turnover: Option<Decimal>,
}

impl TryFrom<Vec<String>> for Candle {
    type Error = String;

    fn try_from(fields: Vec<String>) -> Result<Self, Self::Error> {
        if fields.len() < 6 {
            return Err(format!("candle needs at least 6 fields, got {}", fields.len()));
        }
        let num = |i: usize| {
            Decimal::from_str(&fields[i]).map_err(|e| format!("candle field {}: {}", i, e))
        };
        Ok(Self {
            ts: fields[0]
                .parse()
                .map_err(|e| format!("candle timestamp: {}", e))?,
            open: num(1)?,
            high: num(2)?,
            low: num(3)?,
            close: num(4)?,
            volume: num(5)?,
            turnover: if fields.len() > 6 { Some(num(6)?) } else { None },
        })
    }
}

impl Candle {
    /// Open time as `DateTime<Utc>`
    pub fn open_time(&self) -> Option<DateTime<Utc>> {
        use chrono::TimeZone;
        Utc.timestamp_millis_opt(self.ts).single()
    }
}

/// Public trade from /api/v3/market/fills
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicFill {
    /// Trade id
    pub exec_id: String,
    /// Trade price
    pub price: String,
    /// Trade size
    pub size: String,
    /// Taker side
    pub side: String,
    /// Trade time in milliseconds
    pub ts: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_format() {
        assert_eq!(
            serde_json::to_string(&Category::UsdtFutures).unwrap(),
            "\"USDT-FUTURES\""
        );
        assert_eq!(Category::Spot.to_string(), "SPOT");
        assert_eq!("usdc-futures".parse::<Category>().unwrap(), Category::UsdcFutures);
        assert!("perp".parse::<Category>().is_err());
        assert!(Category::CoinFutures.is_futures());
        assert!(!Category::Margin.is_futures());
    }

    #[test]
    fn test_candle_from_array() {
        let raw = r#"[["1700000000000","100.5","101","99.5","100.8","12.3","1239.4"]]"#;
        let candles: Vec<Candle> = serde_json::from_str(raw).unwrap();

        assert_eq!(candles.len(), 1);
        assert_eq!(candles[0].ts, 1_700_000_000_000);
        assert_eq!(candles[0].close, Decimal::from_str("100.8").unwrap());
        assert!(candles[0].turnover.is_some());
        assert!(candles[0].open_time().is_some());
    }

    #[test]
    fn test_short_candle_rejected() {
        let raw = r#"[["1700000000000","1","2"]]"#;
        assert!(serde_json::from_str::<Vec<Candle>>(raw).is_err());
    }

    #[test]
    fn test_orderbook_levels() {
        let raw = r#"{"a":[["101.5","2"],["102","1"]],"b":[["101","3"]],"ts":"1700000000000"}"#;
        let book: OrderBook = serde_json::from_str(raw).unwrap();

        assert_eq!(book.best_ask().unwrap().0, Decimal::from_str("101.5").unwrap());
        assert_eq!(book.best_bid().unwrap().1, Decimal::from(3));
        assert_eq!(book.spread().unwrap(), Decimal::from_str("0.5").unwrap());
    }

    #[test]
    fn test_ticker_mid_price() {
        let ticker = Ticker {
            bid1_price: "100".to_string(),
            ask1_price: "102".to_string(),
            last_price: "101.2".to_string(),
            ..Default::default()
        };
        assert_eq!(ticker.mid_price().unwrap(), Decimal::from(101));
        assert_eq!(ticker.last_price_decimal().unwrap(), Decimal::from_str("101.2").unwrap());
    }
}
