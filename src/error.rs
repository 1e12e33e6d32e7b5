use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("Invalid request body: {0}")]
    MalformedRequest(String),
    #[error("Loan tenor must be 3, 6, or 12 months")]
    InvalidTenor(i64),
    #[error("Monthly interest must be non-zero")]
    ZeroInterest,
    #[error("Calculation of {field} overflowed or is undefined for these inputs")]
    NonFiniteResult { field: &'static str },
}

pub type Result<T> = std::result::Result<T, LoanError>;
