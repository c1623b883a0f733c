//! Instrument catalog and reference-data loading.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::domain::{Instrument, Symbol};

/// Errors raised while loading the instrument reference data.
///
/// Every variant is fatal at startup: an empty or unreadable catalog would
/// silently turn every calculation into a `NoData` failure.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read the reference data file.
    #[error("failed to read reference data '{path}': {source}")]
    Read {
        /// Path to the reference data file.
        path: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the reference data JSON.
    #[error("failed to parse reference data: {0}")]
    Parse(#[from] serde_json::Error),

    /// An instrument record failed validation.
    #[error("invalid instrument '{symbol}': {message}")]
    InvalidInstrument {
        /// Symbol of the offending record.
        symbol: String,
        /// Validation failure message.
        message: String,
    },

    /// Two records share the same symbol.
    #[error("duplicate instrument symbol '{0}'")]
    DuplicateSymbol(String),

    /// The reference data contained no instruments.
    #[error("reference data contains no instruments")]
    Empty,
}

/// Immutable lookup of instrument reference data, keyed by symbol.
///
/// Populated once at startup and shared read-only afterwards, so no
/// synchronization is needed beyond `Arc` publication.
#[derive(Debug)]
pub struct InstrumentCatalog {
    instruments: HashMap<Symbol, Instrument>,
}

impl InstrumentCatalog {
    /// Build a catalog from instrument records.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInstrument` when a record fails validation,
    /// `DuplicateSymbol` when two records share a symbol, and `Empty` when
    /// the list holds no records at all.
    pub fn from_instruments(records: Vec<Instrument>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut instruments = HashMap::with_capacity(records.len());
        for instrument in records {
            instrument
                .validate()
                .map_err(|e| CatalogError::InvalidInstrument {
                    symbol: instrument.symbol().to_string(),
                    message: e.to_string(),
                })?;

            let symbol = instrument.symbol().clone();
            if instruments.insert(symbol.clone(), instrument).is_some() {
                return Err(CatalogError::DuplicateSymbol(symbol.into_inner()));
            }
        }

        Ok(Self { instruments })
    }

    /// Load the catalog from a JSON reference data file.
    ///
    /// The file holds an array of instrument records
    /// (`symbol`, `kind`, `lastDividend`, `fixedDividendRate`, `parValue`).
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the file cannot be read or parsed or
    /// when the records fail validation. Callers treat any failure as a
    /// startup fault.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let records: Vec<Instrument> = serde_json::from_str(&raw)?;
        Self::from_instruments(records)
    }

    /// Look up an instrument by symbol.
    #[must_use]
    pub fn get(&self, symbol: &Symbol) -> Option<&Instrument> {
        self.instruments.get(symbol)
    }

    /// Number of instruments in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InstrumentKind;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn tea() -> Instrument {
        Instrument::new(
            Symbol::new("TEA"),
            InstrumentKind::Common,
            dec!(8),
            dec!(0),
            dec!(100),
        )
        .unwrap()
    }

    fn gin() -> Instrument {
        Instrument::new(
            Symbol::new("GIN"),
            InstrumentKind::Preferred,
            dec!(8),
            dec!(0.02),
            dec!(100),
        )
        .unwrap()
    }

    #[test]
    fn catalog_lookup() {
        let catalog = InstrumentCatalog::from_instruments(vec![tea(), gin()]).unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.get(&Symbol::new("TEA")).is_some());
        assert!(catalog.get(&Symbol::new("gin")).is_some());
        assert!(catalog.get(&Symbol::new("XYZ")).is_none());
    }

    #[test]
    fn catalog_rejects_empty_list() {
        let result = InstrumentCatalog::from_instruments(vec![]);
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn catalog_rejects_duplicate_symbols() {
        let result = InstrumentCatalog::from_instruments(vec![tea(), tea()]);
        assert!(matches!(result, Err(CatalogError::DuplicateSymbol(s)) if s == "TEA"));
    }

    #[test]
    fn catalog_loads_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"symbol": "TEA", "kind": "COMMON", "lastDividend": "0", "fixedDividendRate": "0", "parValue": "100"}},
                {{"symbol": "GIN", "kind": "PREFERRED", "lastDividend": "8", "fixedDividendRate": "0.02", "parValue": "100"}}
            ]"#
        )
        .unwrap();

        let catalog = InstrumentCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn catalog_load_missing_file_is_an_error() {
        let result = InstrumentCatalog::load(Path::new("no-such-file.json"));
        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }

    #[test]
    fn catalog_load_malformed_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = InstrumentCatalog::load(file.path());
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }
}
