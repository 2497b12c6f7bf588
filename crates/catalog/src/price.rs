use serde::{Deserialize, Deserializer, Serialize, Serializer};

use shopcart_core::{DomainError, DomainResult, ValueObject};

/// Non-negative price in minor currency units (e.g., cents).
///
/// Storing minor units keeps line subtotals exact: `quantity * cents` never
/// needs rounding. Rounding happens once, when a major-unit decimal enters
/// the domain through [`Price::from_major`], and is round-half-up to the
/// nearest cent. On the wire a price is a major-unit decimal (`39.99`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price(u64);

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_major())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Price::from_major(value).map_err(serde::de::Error::custom)
    }
}

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Parse a major-unit decimal (e.g. `39.99`) into a price.
    ///
    /// Rejects negative and non-finite input. Fractions beyond the cent are
    /// rounded half-up: `f64::round` is half-away-from-zero, which is
    /// half-up for the non-negative values accepted here.
    pub fn from_major(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation(format!(
                "price must be a finite number, got {value}"
            )));
        }
        if value < 0.0 {
            return Err(DomainError::validation(format!(
                "price cannot be negative, got {value}"
            )));
        }
        Ok(Self((value * 100.0).round() as u64))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Major-unit decimal representation (cents / 100).
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
