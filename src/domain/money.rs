use crate::error::LoanError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;

/// A quoted figure rounded to 2 decimal places.
///
/// Figures within `rust_decimal::Decimal`'s range are rounded exactly. Larger
/// finite figures (above roughly 7.9e28) cannot be held by `Decimal`; at that
/// magnitude every `f64` is already a whole number, so the float is carried
/// as is. Serialized as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Money {
    Exact(Decimal),
    Wide(f64),
}

impl Money {
    pub const SCALE: u32 = 2;

    /// Rounds a decimal to [`Money::SCALE`] places, half to even.
    pub fn new(value: Decimal) -> Self {
        Money::Exact(
            value.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointNearestEven),
        )
    }

    /// Converts a raw `f64` result into money.
    ///
    /// The float's exact binary value is kept before rounding, so `2.675`
    /// (stored as 2.67499999...) rounds to `2.67` just as a float-based
    /// `round(x, 2)` would. Non-finite values are rejected with the name of
    /// the field they were computed for.
    pub fn from_f64(value: f64, field: &'static str) -> Result<Self, LoanError> {
        if !value.is_finite() {
            return Err(LoanError::NonFiniteResult { field });
        }
        // from_f64_retain only fails past Decimal's range, far above 2^53
        Ok(Decimal::from_f64_retain(value).map_or(Money::Wide(value), Self::new))
    }

    /// The rounded value as a decimal, unless it is beyond `Decimal`'s range.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Money::Exact(d) => Some(*d),
            Money::Wide(_) => None,
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Money::Exact(d) => d.to_f64().unwrap_or(f64::NAN),
            Money::Wide(f) => *f,
        }
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Money::Exact(d) => rust_decimal::serde::float::serialize(d, serializer),
            Money::Wide(f) => serializer.serialize_f64(*f),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Money::Exact(d) => write!(f, "{:.2}", d),
            Money::Wide(v) => write!(f, "{:.2}", v),
        }
    }
}
