//! Symbol value object for instrument identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::DomainError;

/// A stock symbol on the exchange.
///
/// Examples: "TEA", "POP", "ALE", "GIN", "JOE"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new Symbol.
    ///
    /// The symbol is normalized to uppercase.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().to_uppercase())
    }

    /// Get the symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Validate the symbol for catalog lookups and trade recording.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if the symbol is empty or contains characters
    /// outside the ASCII alphanumeric range.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.0.is_empty() {
            return Err(DomainError::invalid_data(
                "symbol",
                "symbol cannot be empty",
            ));
        }

        if !self.0.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::invalid_data(
                "symbol",
                "symbol contains invalid characters",
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_new_normalizes_case() {
        let s = Symbol::new("tea");
        assert_eq!(s.as_str(), "TEA");
    }

    #[test]
    fn symbol_display() {
        let s = Symbol::new("GIN");
        assert_eq!(format!("{s}"), "GIN");
    }

    #[test]
    fn symbol_validate_empty() {
        assert!(Symbol::new("").validate().is_err());
    }

    #[test]
    fn symbol_validate_whitespace() {
        assert!(Symbol::new("  ").validate().is_err());
        assert!(Symbol::new("T EA").validate().is_err());
    }

    #[test]
    fn symbol_validate_invalid_chars() {
        assert!(Symbol::new("TEA!").validate().is_err());
    }

    #[test]
    fn symbol_validate_valid() {
        assert!(Symbol::new("TEA").validate().is_ok());
        assert!(Symbol::new("ALE").validate().is_ok());
    }

    #[test]
    fn symbol_from_conversions() {
        let s1: Symbol = "pop".into();
        assert_eq!(s1.as_str(), "POP");

        let s2: Symbol = String::from("joe").into();
        assert_eq!(s2.as_str(), "JOE");
    }

    #[test]
    fn symbol_hash_normalized() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Symbol::new("TEA"));
        set.insert(Symbol::new("tea"));
        set.insert(Symbol::new("GIN"));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn symbol_serde_roundtrip() {
        let s = Symbol::new("ALE");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "\"ALE\"");

        let parsed: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, s);
    }
}
