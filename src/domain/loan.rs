use super::money::Money;
use crate::error::LoanError;
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::Deserialize;
use std::fmt;

/// Repayment duration in months.
///
/// Only 3, 6 and 12 month tenors are offered; the sole way to build one from
/// an arbitrary integer is [`LoanTenor::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoanTenor {
    ThreeMonths,
    SixMonths,
    TwelveMonths,
}

impl LoanTenor {
    pub const ALL: [LoanTenor; 3] = [
        LoanTenor::ThreeMonths,
        LoanTenor::SixMonths,
        LoanTenor::TwelveMonths,
    ];

    pub fn months(self) -> u32 {
        match self {
            LoanTenor::ThreeMonths => 3,
            LoanTenor::SixMonths => 6,
            LoanTenor::TwelveMonths => 12,
        }
    }
}

impl TryFrom<i64> for LoanTenor {
    type Error = LoanError;

    fn try_from(months: i64) -> Result<Self, Self::Error> {
        match months {
            3 => Ok(LoanTenor::ThreeMonths),
            6 => Ok(LoanTenor::SixMonths),
            12 => Ok(LoanTenor::TwelveMonths),
            other => Err(LoanError::InvalidTenor(other)),
        }
    }
}

/// Inputs to a single quote, as submitted by the caller.
///
/// `loan_tenor` is left untyped here so that structural parsing and tenor
/// validation stay separate steps with separate error messages.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LoanRequest {
    /// Net monthly income.
    pub salary: f64,
    /// Interest per month, in percent (2.5 means 2.5%).
    pub monthly_interest: f64,
    /// Requested tenor in months.
    #[serde(deserialize_with = "deserialize_tenor")]
    pub loan_tenor: i64,
}

/// Accepts any integral JSON number as a tenor.
///
/// Whole floats such as `12.0` are taken as integers. Integers beyond `i64`
/// saturate to its bounds, which are never offered tenors, so they reach tenor
/// validation instead of failing as a malformed body. Fractions, strings and
/// other types are still rejected here.
fn deserialize_tenor<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct TenorVisitor;

    impl Visitor<'_> for TenorVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer number of months")
        }

        fn visit_i64<E: de::Error>(self, months: i64) -> Result<i64, E> {
            Ok(months)
        }

        fn visit_u64<E: de::Error>(self, months: u64) -> Result<i64, E> {
            Ok(i64::try_from(months).unwrap_or(i64::MAX))
        }

        fn visit_f64<E: de::Error>(self, months: f64) -> Result<i64, E> {
            if months.is_finite() && months.fract() == 0.0 {
                // `as` saturates at the i64 bounds
                Ok(months as i64)
            } else {
                Err(E::invalid_value(Unexpected::Float(months), &self))
            }
        }
    }

    deserializer.deserialize_any(TenorVisitor)
}

/// The calculator's output.
///
/// Field names are the corrected internal ones; the HTTP layer keeps the
/// legacy wire names.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanQuote {
    pub recommended_loan_amount: Money,
    pub principal: Money,
    /// Percentage points of interest over the whole tenor, not a currency amount.
    pub total_interest_rate: Money,
    pub monthly_repayment: Money,
}
