//! Position endpoints (signed)

use crate::api::request::RequestDescriptor;
use crate::error::Result;
use crate::services::{require, Endpoint};
use crate::types::account::Position;
use crate::types::api::Page;
use crate::types::constants::paths;
use crate::types::market::Category;
use crate::types::orders::PosSide;
use reqwest::Method;

/// Get open positions
#[derive(Debug, Clone, Default)]
pub struct GetPositions {
    category: Option<Category>,
    symbol: Option<String>,
    pos_side: Option<PosSide>,
}

impl GetPositions {
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

    /// Restrict to one side in hedge mode
    pub fn pos_side(mut self, pos_side: PosSide) -> Self {
        self.pos_side = Some(pos_side);
        self
    }
}

impl Endpoint for GetPositions {
    type Output = Page<Position>;
    const METHOD: Method = Method::GET;
    const PATH: &'static str = paths::POSITION_CURRENT;
    const SIGNED: bool = true;

    fn validate(&self) -> Result<()> {
        require(&self.category, "category")
    }

    fn apply(&self, request: RequestDescriptor) -> Result<RequestDescriptor> {
        Ok(request
            .query_opt("category", self.category)
            .query_opt("symbol", self.symbol.as_deref())
            .query_opt("posSide", self.pos_side))
    }
}
