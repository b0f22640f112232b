//! Trading endpoints (signed)

use crate::api::request::RequestDescriptor;
use crate::api::utils::format_timestamp;
use crate::error::{BitgetError, Result};
use crate::services::{check_limit, require, require_str, Endpoint};
use crate::types::api::Page;
use crate::types::constants::paths;
use crate::types::market::Category;
use crate::types::orders::{
    CancelSymbolResult, Fill, MarginMode, Order, OrderAck, OrderType, PosSide, Side, TimeInForce,
};
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Serialize;
use uuid::Uuid;

/// Largest page the order and fill listings serve
pub const MAX_PAGE_SIZE: u32 = 100;

/// Fail unless at least one of `orderId` / `clientOid` is set
fn require_order_ref(order_id: &Option<String>, client_oid: &Option<String>) -> Result<()> {
    let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
    if present(order_id) || present(client_oid) {
        Ok(())
    } else {
        Err(BitgetError::MissingParameter("orderId or clientOid"))
    }
}

/// Place an order
///
/// Limit orders need a price. Quantities and prices are sent as strings,
/// so any `Display` value (`Decimal`, `&str`, integers) can be passed.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    side: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order_type: Option<OrderType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    qty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_in_force: Option<TimeInForce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pos_side: Option<PosSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    margin_mode: Option<MarginMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reduce_only: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_oid: Option<String>,
}

impl PlaceOrder {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit order shortcut
    pub fn limit(
        category: Category,
        symbol: impl Into<String>,
        side: Side,
        qty: impl ToString,
        price: impl ToString,
    ) -> Self {
        Self::new()
            .category(category)
            .symbol(symbol)
            .side(side)
            .order_type(OrderType::Limit)
            .qty(qty)
            .price(price)
    }

    /// Market order shortcut
    pub fn market(category: Category, symbol: impl Into<String>, side: Side, qty: impl ToString) -> Self {
        Self::new()
            .category(category)
            .symbol(symbol)
            .side(side)
            .order_type(OrderType::Market)
            .qty(qty)
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

    /// Order side (required)
    pub fn side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Order type (required)
    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = Some(order_type);
        self
    }

    /// Quantity (required)
    pub fn qty(mut self, qty: impl ToString) -> Self {
        self.qty = Some(qty.to_string());
        self
    }

    /// Limit price (required for limit orders)
    pub fn price(mut self, price: impl ToString) -> Self {
        self.price = Some(price.to_string());
        self
    }

    /// Time in force; the exchange defaults to GTC
    pub fn time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = Some(time_in_force);
        self
    }

    /// Position side in hedge mode
    pub fn pos_side(mut self, pos_side: PosSide) -> Self {
        self.pos_side = Some(pos_side);
        self
    }

    /// Margin mode for margin and futures categories
    pub fn margin_mode(mut self, margin_mode: MarginMode) -> Self {
        self.margin_mode = Some(margin_mode);
        self
    }

    /// Only reduce an existing position
    pub fn reduce_only(mut self, reduce_only: bool) -> Self {
        self.reduce_only = Some(if reduce_only { "yes" } else { "no" });
        self
    }

    /// Caller-chosen order id
    pub fn client_oid(mut self, client_oid: impl Into<String>) -> Self {
        self.client_oid = Some(client_oid.into());
        self
    }

    /// Set a random client order id unless one is already set
    pub fn with_generated_client_oid(mut self) -> Self {
        if self.client_oid.is_none() {
            self.client_oid = Some(Uuid::new_v4().simple().to_string());
        }
        self
    }

    /// Client order id, if set
    pub fn get_client_oid(&self) -> Option<&str> {
        self.client_oid.as_deref()
    }
}

impl Endpoint for PlaceOrder {
    type Output = OrderAck;
    const METHOD: Method = Method::POST;
    const PATH: &'static str = paths::TRADE_PLACE_ORDER;
    const SIGNED: bool = true;

    fn validate(&self) -> Result<()> {
        require(&self.category, "category")?;
        require_str(&self.symbol, "symbol")?;
        require(&self.side, "side")?;
        require(&self.order_type, "orderType")?;
        require_str(&self.qty, "qty")?;
        if self.order_type == Some(OrderType::Limit) {
            require_str(&self.price, "price")?;
        }
        Ok(())
    }

    fn apply(&self, request: RequestDescriptor) -> Result<RequestDescriptor> {
        request.json_body(self)
    }
}

/// Cancel one order by exchange id or client id
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_oid: Option<String>,
}

impl CancelOrder {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Product line
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Symbol
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Exchange order id
    pub fn order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    /// Client order id
    pub fn client_oid(mut self, client_oid: impl Into<String>) -> Self {
        self.client_oid = Some(client_oid.into());
        self
    }
}

impl Endpoint for CancelOrder {
    type Output = OrderAck;
    const METHOD: Method = Method::POST;
    const PATH: &'static str = paths::TRADE_CANCEL_ORDER;
    const SIGNED: bool = true;

    fn validate(&self) -> Result<()> {
        require_order_ref(&self.order_id, &self.client_oid)
    }

    fn apply(&self, request: RequestDescriptor) -> Result<RequestDescriptor> {
        request.json_body(self)
    }
}

/// Cancel every open order on a symbol
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelSymbolOrders {
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    symbol: Option<String>,
}

impl CancelSymbolOrders {
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
}

impl Endpoint for CancelSymbolOrders {
    type Output = CancelSymbolResult;
    const METHOD: Method = Method::POST;
    const PATH: &'static str = paths::TRADE_CANCEL_SYMBOL_ORDER;
    const SIGNED: bool = true;

    fn validate(&self) -> Result<()> {
        require(&self.category, "category")?;
        require_str(&self.symbol, "symbol")
    }

    fn apply(&self, request: RequestDescriptor) -> Result<RequestDescriptor> {
        request.json_body(self)
    }
}

/// Get one order by exchange id or client id
#[derive(Debug, Clone, Default)]
pub struct GetOrderInfo {
    order_id: Option<String>,
    client_oid: Option<String>,
}

impl GetOrderInfo {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Exchange order id
    pub fn order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    /// Client order id
    pub fn client_oid(mut self, client_oid: impl Into<String>) -> Self {
        self.client_oid = Some(client_oid.into());
        self
    }
}

impl Endpoint for GetOrderInfo {
    type Output = Order;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = paths::TRADE_ORDER_INFO;
    const SIGNED: bool = true;

    fn validate(&self) -> Result<()> {
        require_order_ref(&self.order_id, &self.client_oid)
    }

    fn apply(&self, request: RequestDescriptor) -> Result<RequestDescriptor> {
        Ok(request
            .query_opt("orderId", self.order_id.as_deref())
            .query_opt("clientOid", self.client_oid.as_deref()))
    }
}

/// Filters shared by the paginated order and fill listings
#[derive(Debug, Clone, Default)]
struct ListFilter {
    category: Option<Category>,
    symbol: Option<String>,
    order_id: Option<String>,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    limit: Option<u32>,
    cursor: Option<String>,
}

impl ListFilter {
    fn validate(&self) -> Result<()> {
        if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
            if start > end {
                return Err(BitgetError::invalid_parameter("startTime is after endTime"));
            }
        }
        check_limit(self.limit, MAX_PAGE_SIZE)
    }

    fn apply(&self, request: RequestDescriptor) -> RequestDescriptor {
        request
            .query_opt("category", self.category)
            .query_opt("symbol", self.symbol.as_deref())
            .query_opt("orderId", self.order_id.as_deref())
            .query_opt("startTime", self.start_time.map(format_timestamp))
            .query_opt("endTime", self.end_time.map(format_timestamp))
            .query_opt("limit", self.limit)
            .query_opt("cursor", self.cursor.as_deref())
    }
}

macro_rules! list_filter_setters {
    ($name:ident) => {
        impl $name {
            /// Create an empty request
            pub fn new() -> Self {
                Self::default()
            }

            /// Product line
            pub fn category(mut self, category: Category) -> Self {
                self.filter.category = Some(category);
                self
            }

            /// Symbol
            pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
                self.filter.symbol = Some(symbol.into());
                self
            }

            /// Earliest creation time
            pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
                self.filter.start_time = Some(start_time);
                self
            }

            /// Latest creation time
            pub fn end_time(mut self, end_time: DateTime<Utc>) -> Self {
                self.filter.end_time = Some(end_time);
                self
            }

            /// Page size
            pub fn limit(mut self, limit: u32) -> Self {
                self.filter.limit = Some(limit);
                self
            }

            /// Cursor from the previous page
            pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
                self.filter.cursor = Some(cursor.into());
                self
            }
        }
    };
}

/// List open orders
#[derive(Debug, Clone, Default)]
pub struct GetOpenOrders {
    filter: ListFilter,
}

list_filter_setters!(GetOpenOrders);

impl Endpoint for GetOpenOrders {
    type Output = Page<Order>;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = paths::TRADE_UNFILLED_ORDERS;
    const SIGNED: bool = true;

    fn validate(&self) -> Result<()> {
        self.filter.validate()
    }

    fn apply(&self, request: RequestDescriptor) -> Result<RequestDescriptor> {
        Ok(self.filter.apply(request))
    }
}

/// List historical orders
#[derive(Debug, Clone, Default)]
pub struct GetOrderHistory {
    filter: ListFilter,
}

list_filter_setters!(GetOrderHistory);

impl Endpoint for GetOrderHistory {
    type Output = Page<Order>;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = paths::TRADE_HISTORY_ORDERS;
    const SIGNED: bool = true;

    fn validate(&self) -> Result<()> {
        require(&self.filter.category, "category")?;
        self.filter.validate()
    }

    fn apply(&self, request: RequestDescriptor) -> Result<RequestDescriptor> {
        Ok(self.filter.apply(request))
    }
}

/// List own fills
#[derive(Debug, Clone, Default)]
pub struct GetFills {
    filter: ListFilter,
}

list_filter_setters!(GetFills);

impl GetFills {
    /// Only fills of this order
    pub fn order_id(mut self, order_id: impl Into<String>) -> Self {
        self.filter.order_id = Some(order_id.into());
        self
    }
}

impl Endpoint for GetFills {
    type Output = Page<Fill>;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = paths::TRADE_FILLS;
    const SIGNED: bool = true;

    fn validate(&self) -> Result<()> {
        self.filter.validate()
    }

    fn apply(&self, request: RequestDescriptor) -> Result<RequestDescriptor> {
        Ok(self.filter.apply(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_place_order_validation_order() {
        let cases = [
            (PlaceOrder::new(), "category"),
            (PlaceOrder::new().category(Category::Spot), "symbol"),
            (PlaceOrder::new().category(Category::Spot).symbol("BTCUSDT"), "side"),
            (
                PlaceOrder::new().category(Category::Spot).symbol("BTCUSDT").side(Side::Buy),
                "orderType",
            ),
            (
                PlaceOrder::new()
                    .category(Category::Spot)
                    .symbol("BTCUSDT")
                    .side(Side::Buy)
                    .order_type(OrderType::Market),
                "qty",
            ),
        ];
        for (request, expected) in cases {
            match request.validate() {
                Err(BitgetError::MissingParameter(name)) => assert_eq!(name, expected),
                other => panic!("expected {} to be missing, got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn test_limit_order_requires_price() {
        let request = PlaceOrder::new()
            .category(Category::Spot)
            .symbol("BTCUSDT")
            .side(Side::Buy)
            .order_type(OrderType::Limit)
            .qty("0.01");
        assert!(matches!(request.validate(), Err(BitgetError::MissingParameter("price"))));

        assert!(PlaceOrder::market(Category::Spot, "BTCUSDT", Side::Sell, "0.01")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_place_order_body() {
        let request = PlaceOrder::limit(Category::UsdtFutures, "BTCUSDT", Side::Buy, dec!(0.010), dec!(27000.5))
            .time_in_force(TimeInForce::PostOnly)
            .pos_side(PosSide::Long)
            .reduce_only(false)
            .client_oid("my-order-1");
        assert!(request.validate().is_ok());

        let descriptor = request.descriptor().unwrap();
        assert!(descriptor.is_signed());
        assert_eq!(descriptor.method(), &Method::POST);
        assert_eq!(
            descriptor.body(),
            Some(
                r#"{"category":"USDT-FUTURES","symbol":"BTCUSDT","side":"buy","orderType":"limit","qty":"0.010","price":"27000.5","timeInForce":"post_only","posSide":"long","reduceOnly":"no","clientOid":"my-order-1"}"#
            )
        );
    }

    #[test]
    fn test_generated_client_oid() {
        let request = PlaceOrder::market(Category::Spot, "BTCUSDT", Side::Buy, 1).with_generated_client_oid();
        let oid = request.get_client_oid().unwrap().to_string();
        assert_eq!(oid.len(), 32);
        assert!(oid.chars().all(|c| c.is_ascii_hexdigit()));

        let kept = request.with_generated_client_oid();
        assert_eq!(kept.get_client_oid(), Some(oid.as_str()));

        let fixed = PlaceOrder::new().client_oid("abc").with_generated_client_oid();
        assert_eq!(fixed.get_client_oid(), Some("abc"));
    }

    #[test]
    fn test_order_reference_required() {
        assert!(matches!(
            CancelOrder::new().symbol("BTCUSDT").validate(),
            Err(BitgetError::MissingParameter("orderId or clientOid"))
        ));
        assert!(matches!(
            GetOrderInfo::new().order_id("").validate(),
            Err(BitgetError::MissingParameter("orderId or clientOid"))
        ));
        assert!(CancelOrder::new().client_oid("c1").validate().is_ok());

        let descriptor = GetOrderInfo::new().order_id("123").descriptor().unwrap();
        assert_eq!(descriptor.query_map()["orderId"], "123");
        assert!(!descriptor.query_map().contains_key("clientOid"));
    }

    #[test]
    fn test_cancel_bodies() {
        let cancel = CancelOrder::new().category(Category::Spot).order_id("123");
        assert_eq!(
            cancel.descriptor().unwrap().body(),
            Some(r#"{"category":"SPOT","orderId":"123"}"#)
        );

        assert!(matches!(
            CancelSymbolOrders::new().category(Category::Spot).validate(),
            Err(BitgetError::MissingParameter("symbol"))
        ));
        let all = CancelSymbolOrders::new().category(Category::Spot).symbol("ETHUSDT");
        assert_eq!(
            all.descriptor().unwrap().body(),
            Some(r#"{"category":"SPOT","symbol":"ETHUSDT"}"#)
        );
    }

    #[test]
    fn test_list_filters() {
        assert!(GetOpenOrders::new().validate().is_ok());
        assert!(GetFills::new().validate().is_ok());
        assert!(matches!(
            GetOrderHistory::new().symbol("BTCUSDT").validate(),
            Err(BitgetError::MissingParameter("category"))
        ));

        let start = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let end = Utc.timestamp_millis_opt(1_700_000_600_000).unwrap();
        let request = GetOrderHistory::new()
            .category(Category::Spot)
            .start_time(start)
            .end_time(end)
            .limit(20)
            .cursor("987");
        assert!(request.validate().is_ok());

        let descriptor = request.descriptor().unwrap();
        let query = descriptor.query_map();
        assert_eq!(query["startTime"], "1700000000000");
        assert_eq!(query["endTime"], "1700000600000");
        assert_eq!(query["cursor"], "987");
        assert_eq!(descriptor.path(), "/api/v3/trade/history-orders");

        let reversed = GetFills::new().start_time(end).end_time(start);
        assert!(matches!(reversed.validate(), Err(BitgetError::InvalidParameter(_))));
        assert!(matches!(
            GetOpenOrders::new().limit(1000).validate(),
            Err(BitgetError::InvalidParameter(_))
        ));

        let fills = GetFills::new().order_id("42").descriptor().unwrap();
        assert_eq!(fills.query_map()["orderId"], "42");
    }
}
