//! Amount input type for API boundary enforcement

use rust_decimal::prelude::*;
use serde::de::{self, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strict format Decimal - validates format during deserialization
///
/// Accepts a JSON string or a JSON number. String input is format-checked:
/// - Rejects `.5` (must be `0.5`)
/// - Rejects `5.` (must be `5.0` or `5`)
/// - Rejects empty strings
/// - Rejects scientific notation
/// - Rejects a `+` prefix
///
/// Sign and range are business rules and are checked by the transfer request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrictDecimal(Decimal);

impl StrictDecimal {
    /// Get the inner Decimal value
    pub fn inner(self) -> Decimal {
        self.0
    }

    /// Create from Decimal (for testing)
    #[cfg(test)]
    pub fn from_decimal(d: Decimal) -> Self {
        Self(d)
    }
}

impl std::ops::Deref for StrictDecimal {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn parse_strict(s: &str) -> Result<Decimal, String> {
    if s.is_empty() {
        return Err("Amount cannot be empty".to_string());
    }

    if s.starts_with('.') {
        return Err("Invalid format: use 0.5 not .5".to_string());
    }

    if s.ends_with('.') {
        return Err("Invalid format: use 5.0 not 5.".to_string());
    }

    if s.contains('e') || s.contains('E') {
        return Err("Invalid format: scientific notation not allowed".to_string());
    }

    if s.starts_with('+') {
        return Err("Invalid format: + prefix not allowed".to_string());
    }

    Decimal::from_str(s).map_err(|e| format!("Invalid decimal: {}", e))
}

struct StrictDecimalVisitor;

impl<'de> Visitor<'de> for StrictDecimalVisitor {
    type Value = StrictDecimal;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal amount as a string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        parse_strict(v).map(StrictDecimal).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(StrictDecimal(Decimal::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(StrictDecimal(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        // Shortest round-trip text, so 100.1 stays 100.1
        if !v.is_finite() {
            return Err(E::custom("Amount must be finite"));
        }
        Decimal::from_str(&v.to_string())
            .map(StrictDecimal)
            .map_err(|e| E::custom(format!("Invalid decimal: {}", e)))
    }
}

impl<'de> Deserialize<'de> for StrictDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(StrictDecimalVisitor)
    }
}

impl Serialize for StrictDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as string to preserve precision
        serializer.serialize_str(&self.0.to_string())
    }
}
