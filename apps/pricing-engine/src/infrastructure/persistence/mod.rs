//! In-memory stores: the instrument catalog and the trade ledger.

pub mod catalog;
pub mod ledger;

pub use catalog::{CatalogError, InstrumentCatalog};
pub use ledger::TradeLedger;
