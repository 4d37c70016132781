use crate::utils::error::{Result, ShippingError};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Rate identifier registered with the order pipeline.
pub const METHOD_ID: &str = "custom_shipping_method";

/// Label shown to the buyer when no title is configured.
pub const DEFAULT_TITLE: &str = "Custom Shipping";

/// Flat cost applied when no cost is configured: 10.00 currency units.
pub const DEFAULT_COST: Money = Money::from_cents(1000);

/// A buyer-submitted (region, city) pair. Both fields are untrusted external
/// input; the resolver validates them before any rate is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub region: String,
    pub city: String,
}

impl Selection {
    pub fn new(region: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            city: city.into(),
        }
    }
}

/// Non-negative fixed-point currency amount, stored in minor units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    // Above this the f64 inputs accepted by `from_major` no longer resolve
    // individual cents.
    const MAX_MAJOR: f64 = 10_000_000_000.0;

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    pub fn major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Converts a major-unit amount (e.g. `10.0` for 10.00) to fixed point,
    /// rounding to the nearest cent.
    pub fn from_major(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(ShippingError::AmountError {
                value: value.to_string(),
                reason: "amount must be a finite number".to_string(),
            });
        }
        if value < 0.0 {
            return Err(ShippingError::AmountError {
                value: value.to_string(),
                reason: "amount cannot be negative".to_string(),
            });
        }
        if value > Self::MAX_MAJOR {
            return Err(ShippingError::AmountError {
                value: value.to_string(),
                reason: "amount out of range".to_string(),
            });
        }
        Ok(Self((value * 100.0).round() as u64))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Money {
    type Err = ShippingError;

    fn from_str(s: &str) -> Result<Self> {
        let value: f64 = s.trim().parse().map_err(|_| ShippingError::AmountError {
            value: s.to_string(),
            reason: "not a decimal number".to_string(),
        })?;
        Self::from_major(value)
    }
}

// Serialized as a two-decimal string so downstream consumers never see
// floating-point artifacts; accepted back as either a number or a string.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Money::from_major(n).map_err(D::Error::custom),
            Raw::Text(s) => s.parse().map_err(D::Error::custom),
        }
    }
}

/// How tax is applied to the rate. Only item-level taxation is supported;
/// the wire form matches the order pipeline's `calc_tax` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxMode {
    #[default]
    PerItem,
}

/// Whether the resolver cross-checks the selected city against the catalog
/// (`Strict`) or only requires both fields to be non-empty (`Permissive`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    #[default]
    Strict,
    Permissive,
}

/// The computed shipping price and metadata returned to the order pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rate {
    pub id: &'static str,
    pub label: String,
    pub cost: Money,
    pub calc_tax: TaxMode,
}
