//! Pricing calculations over the instrument catalog and trade ledger.

use std::sync::Arc;

use rust_decimal::{Decimal, MathematicalOps};

use crate::application::ports::Clock;
use crate::domain::{DomainError, Instrument, InstrumentKind, Symbol, Trade, TradeSide};
use crate::infrastructure::persistence::{InstrumentCatalog, TradeLedger};

/// Stateless pricing calculations; all state lives in the catalog and ledger.
///
/// Generic over the [`Clock`] so the trailing-window filter can be driven by
/// a fixed clock in tests. The engine validates caller input before any
/// mutation and maps unknown symbols to [`DomainError::NoData`].
pub struct PricingEngine<C: Clock> {
    catalog: Arc<InstrumentCatalog>,
    ledger: Arc<TradeLedger>,
    clock: Arc<C>,
    vwap_window_minutes: u64,
}

impl<C: Clock> PricingEngine<C> {
    /// Create an engine over explicitly constructed stores.
    #[must_use]
    pub fn new(
        catalog: Arc<InstrumentCatalog>,
        ledger: Arc<TradeLedger>,
        clock: Arc<C>,
        vwap_window_minutes: u64,
    ) -> Self {
        Self {
            catalog,
            ledger,
            clock,
            vwap_window_minutes,
        }
    }

    /// Trailing window applied by [`Self::volume_weighted_price`], in minutes.
    #[must_use]
    pub const fn vwap_window_minutes(&self) -> u64 {
        self.vwap_window_minutes
    }

    /// Record a trade execution.
    ///
    /// Validates the caller input, confirms the symbol has an instrument in
    /// the catalog, stamps the current time and appends the trade to the
    /// ledger. Once this returns, the stored record is visible to every
    /// subsequent read for the symbol.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` for a malformed symbol or a non-positive price
    /// or quantity, and `NoData` when the symbol has no instrument. Either
    /// failure leaves the ledger unchanged.
    pub fn record_trade(
        &self,
        symbol: &str,
        side: TradeSide,
        price: Decimal,
        quantity: i64,
    ) -> Result<Trade, DomainError> {
        let trade = Trade::new(
            Symbol::new(symbol),
            side,
            price,
            quantity,
            self.clock.now(),
        )?;
        self.resolve(trade.symbol())?;

        let stored = self.ledger.record(trade);
        tracing::info!(
            symbol = %stored.symbol(),
            side = %stored.side(),
            price = %stored.price(),
            quantity = stored.quantity(),
            "Trade recorded"
        );
        Ok(stored)
    }

    /// Dividend yield for the instrument at the given market price.
    ///
    /// Common stock yields `last_dividend / price`; preferred stock yields
    /// `(fixed_dividend_rate × par_value) / price`.
    ///
    /// # Errors
    ///
    /// `InvalidData` for a malformed symbol or non-positive price, `NoData`
    /// for an unknown symbol.
    pub fn dividend_yield(&self, symbol: &str, price: Decimal) -> Result<Decimal, DomainError> {
        let instrument = self.validate_and_resolve(symbol, price)?;
        let dividend_yield = Self::yield_for(instrument, price);
        tracing::debug!(symbol, %price, %dividend_yield, "Dividend yield calculated");
        Ok(dividend_yield)
    }

    /// Price/earnings ratio for the instrument at the given market price.
    ///
    /// Defined as `price / dividend_yield`; when the yield is zero the ratio
    /// is `0` by definition rather than a division fault.
    ///
    /// # Errors
    ///
    /// `InvalidData` for a malformed symbol or non-positive price, `NoData`
    /// for an unknown symbol.
    pub fn pe_ratio(&self, symbol: &str, price: Decimal) -> Result<Decimal, DomainError> {
        let instrument = self.validate_and_resolve(symbol, price)?;
        let dividend_yield = Self::yield_for(instrument, price);
        let pe_ratio = if dividend_yield > Decimal::ZERO {
            price / dividend_yield
        } else {
            Decimal::ZERO
        };
        tracing::debug!(symbol, %price, %pe_ratio, "P/E ratio calculated");
        Ok(pe_ratio)
    }

    /// Volume-weighted price over the trailing window.
    ///
    /// Considers only trades whose timestamp is strictly after
    /// `now − window` and returns `Σ(price × quantity) / Σ(quantity)`.
    /// Returns `0` when no trades fall inside the window, including when the
    /// symbol has never traded.
    ///
    /// # Errors
    ///
    /// `InvalidData` for a malformed symbol, `NoData` for an unknown symbol.
    pub fn volume_weighted_price(&self, symbol: &str) -> Result<Decimal, DomainError> {
        let symbol = Symbol::new(symbol);
        symbol.validate()?;
        self.resolve(&symbol)?;

        let window = i64::try_from(self.vwap_window_minutes).unwrap_or(i64::MAX);
        let cutoff = self.clock.now().minus_minutes(window);

        let mut notional_sum = Decimal::ZERO;
        let mut quantity_sum = 0i64;
        for trade in self
            .ledger
            .history(&symbol)
            .iter()
            .filter(|t| t.timestamp() > cutoff)
        {
            notional_sum += trade.notional();
            quantity_sum += trade.quantity();
        }

        // An empty window short-circuits to zero; the division below never
        // sees a zero quantity sum.
        if quantity_sum == 0 {
            return Ok(Decimal::ZERO);
        }
        let vwap = notional_sum / Decimal::from(quantity_sum);
        tracing::debug!(symbol = %symbol, %vwap, "Volume weighted price calculated");
        Ok(vwap)
    }

    /// All-share composite index over every recorded trade.
    ///
    /// Multiplies every trade price across every symbol and takes the n-th
    /// root, where n is the number of symbols that have traded (not the
    /// trade count). The product is accumulated in log space so large trade
    /// histories cannot overflow. Returns `0` when no trades exist.
    #[must_use]
    pub fn composite_index(&self) -> Decimal {
        let histories = self.ledger.all_histories();

        let mut ln_sum = Decimal::ZERO;
        let mut group_count = 0u64;
        for (_, trades) in &histories {
            if trades.is_empty() {
                continue;
            }
            group_count += 1;
            for trade in trades {
                // Trade prices are validated strictly positive, so ln is
                // always defined.
                ln_sum += trade.price().ln();
            }
        }

        if group_count == 0 {
            return Decimal::ZERO;
        }
        let index = (ln_sum / Decimal::from(group_count)).exp();
        tracing::debug!(groups = group_count, %index, "Composite index calculated");
        index
    }

    fn validate_and_resolve(
        &self,
        symbol: &str,
        price: Decimal,
    ) -> Result<&Instrument, DomainError> {
        let symbol = Symbol::new(symbol);
        symbol.validate()?;
        if price <= Decimal::ZERO {
            return Err(DomainError::invalid_data(
                "price",
                "price must be greater than zero",
            ));
        }
        self.resolve(&symbol)
    }

    fn resolve(&self, symbol: &Symbol) -> Result<&Instrument, DomainError> {
        self.catalog
            .get(symbol)
            .ok_or_else(|| DomainError::no_data(symbol.as_str()))
    }

    fn yield_for(instrument: &Instrument, price: Decimal) -> Decimal {
        match instrument.kind() {
            InstrumentKind::Common => instrument.last_dividend() / price,
            InstrumentKind::Preferred => {
                instrument.fixed_dividend_rate() * instrument.par_value() / price
            }
        }
    }
}
