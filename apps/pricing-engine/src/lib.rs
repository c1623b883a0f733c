// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines
    )
)]

//! Pricing Engine - GBCE Core Library
//!
//! In-memory trade ledger and pricing calculations for the Global Beverage
//! Corporation Exchange service.
//!
//! # Architecture
//!
//! - **Domain**: instruments, trades, and the shared value objects
//!   (`Symbol`, `Timestamp`), plus the two-kind error taxonomy
//!   (`InvalidData`, `NoData`)
//! - **Application**: the pricing engine and the injectable `Clock` port
//! - **Infrastructure**: the read-only instrument catalog, the concurrent
//!   append-only trade ledger, and the HTTP controller
//!
//! The stores are constructed once at startup and passed into the engine by
//! reference; there is no process-global state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - core business types with no transport concerns.
pub mod domain;

/// Application layer - pricing calculations and ports.
pub mod application;

/// Infrastructure layer - persistence and HTTP adapters.
pub mod infrastructure;

/// Service configuration.
pub mod config;

// Domain re-exports
pub use domain::{DomainError, Instrument, InstrumentKind, Symbol, Timestamp, Trade, TradeSide};

// Application re-exports
pub use application::ports::{Clock, FixedClock, SystemClock};
pub use application::pricing::PricingEngine;

// Infrastructure re-exports
pub use infrastructure::http::{ApiError, AppState, create_router};
pub use infrastructure::persistence::{CatalogError, InstrumentCatalog, TradeLedger};
