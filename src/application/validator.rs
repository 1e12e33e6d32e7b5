use crate::domain::loan::LoanTenor;
use crate::error::Result;

/// Checks a requested tenor against the offered set and returns it typed.
pub fn validate(loan_tenor: i64) -> Result<LoanTenor> {
    LoanTenor::try_from(loan_tenor)
}
