//! Concurrent, append-only trade ledger partitioned by symbol.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::{Symbol, Trade};

type History = Arc<RwLock<Vec<Trade>>>;

/// Append-only trade history, partitioned by symbol.
///
/// Writers for different symbols do not contend: an append takes the outer
/// map lock in read mode and the per-symbol lock in write mode. Only a
/// symbol's first trade briefly takes the outer lock in write mode, where
/// the get-or-insert closes the lost-append race between two writers racing
/// on a fresh symbol.
#[derive(Debug, Default)]
pub struct TradeLedger {
    histories: RwLock<HashMap<Symbol, History>>,
}

impl TradeLedger {
    /// Create a new empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trade to its symbol's history and return the stored record.
    ///
    /// Once this returns, the record is visible to every subsequent read for
    /// the symbol. Concurrent appends to the same symbol each occupy a
    /// distinct position; none are lost or duplicated.
    pub fn record(&self, trade: Trade) -> Trade {
        let history = self.history_for(trade.symbol());
        let mut trades = history.write().unwrap();
        trades.push(trade.clone());
        trade
    }

    /// Point-in-time snapshot of a symbol's trades, in arrival order.
    ///
    /// Returns an empty vector when nothing has been recorded for the
    /// symbol. A record is observed all-or-nothing; the snapshot never
    /// contains a partially appended entry.
    #[must_use]
    pub fn history(&self, symbol: &Symbol) -> Vec<Trade> {
        let history = {
            let histories = self.histories.read().unwrap();
            histories.get(symbol).map(Arc::clone)
        };
        history.map_or_else(Vec::new, |h| h.read().unwrap().clone())
    }

    /// Snapshot of every symbol's trades at the moment of the call.
    #[must_use]
    pub fn all_histories(&self) -> Vec<(Symbol, Vec<Trade>)> {
        let handles: Vec<(Symbol, History)> = {
            let histories = self.histories.read().unwrap();
            histories
                .iter()
                .map(|(symbol, history)| (symbol.clone(), Arc::clone(history)))
                .collect()
        };

        handles
            .into_iter()
            .map(|(symbol, history)| {
                let trades = history.read().unwrap().clone();
                (symbol, trades)
            })
            .collect()
    }

    /// Get the existing history for a symbol or atomically insert a new one.
    fn history_for(&self, symbol: &Symbol) -> History {
        {
            let histories = self.histories.read().unwrap();
            if let Some(history) = histories.get(symbol) {
                return Arc::clone(history);
            }
        }

        let mut histories = self.histories.write().unwrap();
        Arc::clone(histories.entry(symbol.clone()).or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Timestamp, TradeSide};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn trade(symbol: &str, price: Decimal, quantity: i64) -> Trade {
        Trade::new(
            Symbol::new(symbol),
            TradeSide::Buy,
            price,
            quantity,
            Timestamp::parse("2026-08-05T12:00:00Z").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn record_and_read_back() {
        let ledger = TradeLedger::new();
        let stored = ledger.record(trade("TEA", dec!(52.2), 2));

        let history = ledger.history(&Symbol::new("TEA"));
        assert_eq!(history.len(), 1);
        assert_eq!(history[0], stored);
    }

    #[test]
    fn history_preserves_arrival_order() {
        let ledger = TradeLedger::new();
        ledger.record(trade("TEA", dec!(10), 1));
        ledger.record(trade("TEA", dec!(20), 1));
        ledger.record(trade("TEA", dec!(30), 1));

        let prices: Vec<Decimal> = ledger
            .history(&Symbol::new("TEA"))
            .iter()
            .map(Trade::price)
            .collect();
        assert_eq!(prices, vec![dec!(10), dec!(20), dec!(30)]);
    }

    #[test]
    fn history_for_unknown_symbol_is_empty() {
        let ledger = TradeLedger::new();
        assert!(ledger.history(&Symbol::new("TEA")).is_empty());
    }

    #[test]
    fn histories_are_partitioned_by_symbol() {
        let ledger = TradeLedger::new();
        ledger.record(trade("TEA", dec!(10), 1));
        ledger.record(trade("GIN", dec!(20), 1));

        assert_eq!(ledger.history(&Symbol::new("TEA")).len(), 1);
        assert_eq!(ledger.history(&Symbol::new("GIN")).len(), 1);

        let all = ledger.all_histories();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn snapshot_is_isolated_from_later_appends() {
        let ledger = TradeLedger::new();
        ledger.record(trade("TEA", dec!(10), 1));

        let snapshot = ledger.history(&Symbol::new("TEA"));
        ledger.record(trade("TEA", dec!(20), 1));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(ledger.history(&Symbol::new("TEA")).len(), 2);
    }

    #[test]
    fn concurrent_appends_to_one_symbol_lose_nothing() {
        let ledger = Arc::new(TradeLedger::new());
        let threads = 8_usize;
        let per_thread = 50_usize;

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let ledger = Arc::clone(&ledger);
                std::thread::spawn(move || {
                    for _ in 0..per_thread {
                        ledger.record(trade("TEA", dec!(52.2), 2));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let history = ledger.history(&Symbol::new("TEA"));
        assert_eq!(history.len(), threads * per_thread);
    }

    #[test]
    fn concurrent_first_trades_on_fresh_symbols_lose_nothing() {
        let ledger = Arc::new(TradeLedger::new());
        let threads = 8_usize;

        // Every thread races the get-or-create for the same fresh symbols.
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let ledger = Arc::clone(&ledger);
                std::thread::spawn(move || {
                    for symbol in ["TEA", "POP", "ALE", "GIN", "JOE"] {
                        ledger.record(trade(symbol, dec!(10), 1));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let all = ledger.all_histories();
        assert_eq!(all.len(), 5);
        for (_, trades) in all {
            assert_eq!(trades.len(), threads);
        }
    }
}
