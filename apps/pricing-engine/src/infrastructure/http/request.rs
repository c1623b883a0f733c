//! HTTP request DTOs.

use serde::{Deserialize, Serialize};

/// Request to record a trade execution.
///
/// The side and price arrive as strings and are parsed in the controller so
/// malformed values surface as `InvalidData` rather than a generic
/// deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordTradeRequest {
    /// Instrument symbol.
    pub symbol: String,
    /// Trade side: BUY or SELL.
    pub side: String,
    /// Trade price (decimal string).
    pub price: String,
    /// Number of shares traded.
    pub quantity: i64,
}

/// Query parameters carrying a market price.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceQuery {
    /// Price used in the calculation (decimal string).
    pub price: Option<String>,
}
