//! Application layer containing the quoting logic.
//!
//! `validator` turns a raw tenor into a `LoanTenor`; `calculator` defines the
//! stateless `LoanCalculator` which applies the loan formula and rounding.

pub mod calculator;
pub mod validator;
