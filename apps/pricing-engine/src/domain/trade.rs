//! Trade records and trade sides.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::DomainError;
use crate::domain::symbol::Symbol;
use crate::domain::timestamp::Timestamp;

/// Side of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeSide {
    /// Buyer-initiated trade.
    Buy,
    /// Seller-initiated trade.
    Sell,
}

impl TradeSide {
    /// Wire representation of the side.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TradeSide {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            _ => Err(DomainError::invalid_data(
                "side",
                "trade side must be BUY or SELL",
            )),
        }
    }
}

/// A single executed trade on one instrument.
///
/// Immutable once created. The timestamp is assigned by the recording path,
/// never supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    symbol: Symbol,
    side: TradeSide,
    price: Decimal,
    quantity: i64,
    timestamp: Timestamp,
}

impl Trade {
    /// Create a validated trade record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` when the symbol is malformed, the price is not
    /// strictly positive, or the quantity is not a positive integer.
    pub fn new(
        symbol: Symbol,
        side: TradeSide,
        price: Decimal,
        quantity: i64,
        timestamp: Timestamp,
    ) -> Result<Self, DomainError> {
        symbol.validate()?;

        if price <= Decimal::ZERO {
            return Err(DomainError::invalid_data(
                "price",
                "trade price must be greater than zero",
            ));
        }
        if quantity <= 0 {
            return Err(DomainError::invalid_data(
                "quantity",
                "trade quantity must be a positive integer",
            ));
        }

        Ok(Self {
            symbol,
            side,
            price,
            quantity,
            timestamp,
        })
    }

    /// The traded instrument's symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// The trade side.
    #[must_use]
    pub const fn side(&self) -> TradeSide {
        self.side
    }

    /// Execution price.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// Number of shares traded.
    #[must_use]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Ledger-assigned timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Notional value of the trade (price × quantity).
    #[must_use]
    pub fn notional(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    #[test]
    fn trade_new_valid() {
        let trade = Trade::new(
            Symbol::new("TEA"),
            TradeSide::Buy,
            dec!(52.2),
            2,
            ts("2026-08-05T12:00:00Z"),
        )
        .unwrap();

        assert_eq!(trade.symbol().as_str(), "TEA");
        assert_eq!(trade.side(), TradeSide::Buy);
        assert_eq!(trade.price(), dec!(52.2));
        assert_eq!(trade.quantity(), 2);
    }

    #[test]
    fn trade_rejects_zero_price() {
        let result = Trade::new(
            Symbol::new("TEA"),
            TradeSide::Buy,
            Decimal::ZERO,
            2,
            ts("2026-08-05T12:00:00Z"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn trade_rejects_negative_price() {
        let result = Trade::new(
            Symbol::new("TEA"),
            TradeSide::Sell,
            dec!(-10),
            2,
            ts("2026-08-05T12:00:00Z"),
        );
        assert!(result.is_err());
    }

    #[test_case::test_case(0; "zero quantity")]
    #[test_case::test_case(-5; "negative quantity")]
    fn trade_rejects_non_positive_quantity(quantity: i64) {
        let result = Trade::new(
            Symbol::new("TEA"),
            TradeSide::Buy,
            dec!(10),
            quantity,
            ts("2026-08-05T12:00:00Z"),
        );
        assert!(result.is_err(), "quantity {quantity} should be rejected");
    }

    #[test]
    fn trade_rejects_blank_symbol() {
        let result = Trade::new(
            Symbol::new(""),
            TradeSide::Buy,
            dec!(10),
            1,
            ts("2026-08-05T12:00:00Z"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn trade_notional() {
        let trade = Trade::new(
            Symbol::new("TEA"),
            TradeSide::Buy,
            dec!(52.2),
            2,
            ts("2026-08-05T12:00:00Z"),
        )
        .unwrap();

        assert_eq!(trade.notional(), dec!(104.4));
    }

    #[test]
    fn trade_side_from_str() {
        assert_eq!("BUY".parse::<TradeSide>().unwrap(), TradeSide::Buy);
        assert_eq!("sell".parse::<TradeSide>().unwrap(), TradeSide::Sell);
        assert!("HOLD".parse::<TradeSide>().is_err());
        assert!("".parse::<TradeSide>().is_err());
    }

    #[test]
    fn trade_side_serde_wire_format() {
        assert_eq!(serde_json::to_string(&TradeSide::Buy).unwrap(), "\"BUY\"");
        assert_eq!(serde_json::to_string(&TradeSide::Sell).unwrap(), "\"SELL\"");
    }
}
