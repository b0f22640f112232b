//! Order-related types for the Bitget UTA API

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Limit order, requires a price
    Limit,
    /// Market order
    Market,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Limit => write!(f, "limit"),
            OrderType::Market => write!(f, "market"),
        }
    }
}

/// Time in force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeInForce {
    /// Good till cancelled
    Gtc,
    /// Immediate or cancel
    Ioc,
    /// Fill or kill
    Fok,
    /// Maker only
    PostOnly,
}

impl std::fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeInForce::Gtc => write!(f, "gtc"),
            TimeInForce::Ioc => write!(f, "ioc"),
            TimeInForce::Fok => write!(f, "fok"),
            TimeInForce::PostOnly => write!(f, "post_only"),
        }
    }
}

/// Position side in hedge mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosSide {
    /// Long position
    Long,
    /// Short position
    Short,
}

impl std::fmt::Display for PosSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PosSide::Long => write!(f, "long"),
            PosSide::Short => write!(f, "short"),
        }
    }
}

/// Margin mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginMode {
    /// Cross margin
    Crossed,
    /// Isolated margin
    Isolated,
}

impl std::fmt::Display for MarginMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarginMode::Crossed => write!(f, "crossed"),
            MarginMode::Isolated => write!(f, "isolated"),
        }
    }
}

/// Result of place / cancel operations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderAck {
    /// Exchange order id
    pub order_id: String,
    /// Client order id echoed back
    pub client_oid: String,
}

/// Result of cancelling every order of a symbol
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CancelSymbolResult {
    /// Orders that were cancelled
    pub success_list: Vec<OrderAck>,
    /// Orders that could not be cancelled
    pub failure_list: Vec<CancelFailure>,
}

/// One failed cancellation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CancelFailure {
    /// Exchange order id
    pub order_id: String,
    /// Client order id
    pub client_oid: String,
    /// Rejection code
    pub error_code: String,
    /// Rejection message
    pub error_msg: String,
}

/// Order details from /api/v3/trade/order-info and list endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    /// Exchange order id
    pub order_id: String,
    /// Client order id
    pub client_oid: String,
    /// Product line
    pub category: String,
    /// Symbol name
    pub symbol: String,
    /// "limit" or "market"
    pub order_type: String,
    /// "buy" or "sell"
    pub side: String,
    /// Limit price
    pub price: String,
    /// Order quantity
    pub qty: String,
    /// Executed quantity
    pub cum_exec_qty: String,
    /// Executed value
    pub cum_exec_value: String,
    /// Average fill price
    pub avg_price: String,
    /// Time in force
    pub time_in_force: String,
    /// Order status, e.g. "live", "partially_filled", "filled", "cancelled"
    pub order_status: String,
    /// Position side (futures)
    pub pos_side: String,
    /// Whether the order only reduces a position
    pub reduce_only: String,
    /// Creation time in milliseconds
    pub created_time: String,
    /// Last update time in milliseconds
    pub updated_time: String,
}

impl Order {
    /// Parse price as Decimal
    pub fn price_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(&self.price)
    }

    /// Parse quantity as Decimal
    pub fn qty_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(&self.qty)
    }

    /// Parse executed quantity as Decimal
    pub fn cum_exec_qty_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(&self.cum_exec_qty)
    }

    /// Creation time as `DateTime<Utc>`
    pub fn created_at_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        crate::api::utils::parse_timestamp(&self.created_time)
    }

    /// Check if order is filled
    pub fn is_filled(&self) -> bool {
        self.order_status == "filled"
    }

    /// Check if order is cancelled
    pub fn is_cancelled(&self) -> bool {
        self.order_status == "cancelled"
    }

    /// Check if order is still working on the book
    pub fn is_active(&self) -> bool {
        matches!(self.order_status.as_str(), "live" | "new" | "partially_filled")
    }
}

/// Private execution from /api/v3/trade/fills
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fill {
    /// Execution id
    pub exec_id: String,
    /// Exchange order id
    pub order_id: String,
    /// Client order id
    pub client_oid: String,
    /// Product line
    pub category: String,
    /// Symbol name
    pub symbol: String,
    /// "buy" or "sell"
    pub side: String,
    /// Execution price
    pub exec_price: String,
    /// Execution quantity
    pub exec_qty: String,
    /// Execution value
    pub exec_value: String,
    /// "taker" or "maker"
    pub trade_scope: String,
    /// Fees charged, one entry per fee coin
    pub fee_detail: Vec<FeeDetail>,
    /// Execution time in milliseconds
    pub created_time: String,
}

/// Fee charged on a fill
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeeDetail {
    /// Fee coin
    pub fee_coin: String,
    /// Fee amount (negative when charged)
    pub fee: String,
}

impl Fill {
    /// Parse execution price as Decimal
    pub fn exec_price_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(&self.exec_price)
    }

    /// Parse execution quantity as Decimal
    pub fn exec_qty_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(&self.exec_qty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_format() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"buy\"");
        assert_eq!(serde_json::to_string(&TimeInForce::PostOnly).unwrap(), "\"post_only\"");
        assert_eq!(TimeInForce::PostOnly.to_string(), "post_only");
        assert_eq!(serde_json::to_string(&MarginMode::Crossed).unwrap(), "\"crossed\"");
        assert_eq!(OrderType::Market.to_string(), "market");
        assert_eq!(PosSide::Short.to_string(), "short");
    }

    #[test]
    fn test_order_status_helpers() {
        let raw = r#"{"orderId":"1","symbol":"BTCUSDT","price":"30000","qty":"0.01","cumExecQty":"0","orderStatus":"live","createdTime":"1700000000000"}"#;
        let order: Order = serde_json::from_str(raw).unwrap();

        assert!(order.is_active());
        assert!(!order.is_filled());
        assert_eq!(order.price_decimal().unwrap(), Decimal::from(30000));
        assert_eq!(order.qty_decimal().unwrap(), Decimal::from_str("0.01").unwrap());
        assert!(order.created_at_datetime().is_some());
    }

    #[test]
    fn test_fill_with_fees() {
        let raw = r#"{"execId":"9","execPrice":"2000.5","execQty":"1","feeDetail":[{"feeCoin":"USDT","fee":"-0.2"}]}"#;
        let fill: Fill = serde_json::from_str(raw).unwrap();

        assert_eq!(fill.fee_detail.len(), 1);
        assert_eq!(fill.exec_price_decimal().unwrap(), Decimal::from_str("2000.5").unwrap());
    }
}
