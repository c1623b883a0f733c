//! Instrument reference data.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::symbol::Symbol;

/// Classification of an instrument for dividend calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentKind {
    /// Common stock: dividend yield derives from the last dividend.
    Common,
    /// Preferred stock: dividend yield derives from the fixed rate and par value.
    Preferred,
}

/// Immutable reference data for a tradable instrument.
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    symbol: Symbol,
    kind: InstrumentKind,
    last_dividend: Decimal,
    fixed_dividend_rate: Decimal,
    par_value: Decimal,
}

impl Instrument {
    /// Create a validated instrument record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if the symbol fails validation or any monetary
    /// field is negative.
    pub fn new(
        symbol: Symbol,
        kind: InstrumentKind,
        last_dividend: Decimal,
        fixed_dividend_rate: Decimal,
        par_value: Decimal,
    ) -> Result<Self, DomainError> {
        let instrument = Self {
            symbol,
            kind,
            last_dividend,
            fixed_dividend_rate,
            par_value,
        };
        instrument.validate()?;
        Ok(instrument)
    }

    /// The instrument's symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// The instrument's kind.
    #[must_use]
    pub const fn kind(&self) -> InstrumentKind {
        self.kind
    }

    /// Most recently declared dividend.
    #[must_use]
    pub const fn last_dividend(&self) -> Decimal {
        self.last_dividend
    }

    /// Fixed dividend rate; meaningful only for preferred stock.
    #[must_use]
    pub const fn fixed_dividend_rate(&self) -> Decimal {
        self.fixed_dividend_rate
    }

    /// Par value of the instrument.
    #[must_use]
    pub const fn par_value(&self) -> Decimal {
        self.par_value
    }

    /// Validate the reference data fields.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if the symbol is malformed or any monetary
    /// field is negative.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.symbol.validate()?;

        if self.last_dividend < Decimal::ZERO {
            return Err(DomainError::invalid_data(
                "lastDividend",
                "last dividend must not be negative",
            ));
        }
        if self.fixed_dividend_rate < Decimal::ZERO {
            return Err(DomainError::invalid_data(
                "fixedDividendRate",
                "fixed dividend rate must not be negative",
            ));
        }
        if self.par_value < Decimal::ZERO {
            return Err(DomainError::invalid_data(
                "parValue",
                "par value must not be negative",
            ));
        }

        Ok(())
    }
}
