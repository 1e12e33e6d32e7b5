use crate::application::validator::validate;
use crate::domain::loan::{LoanQuote, LoanRequest, LoanTenor};
use crate::domain::money::Money;
use crate::error::{LoanError, Result};

/// Share of the net salary assumed to go to the monthly repayment.
pub const REPAYMENT_SHARE_OF_SALARY: f64 = 0.3;

/// Computes loan quotes from salary, monthly interest and tenor.
///
/// `LoanCalculator` holds no state: every call is an independent, pure
/// computation, so a single instance can be shared freely between requests
/// and threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoanCalculator;

impl LoanCalculator {
    /// Creates a new `LoanCalculator`.
    pub fn new() -> Self {
        Self
    }

    /// Validates the request's tenor and then calculates the quote.
    pub fn quote(&self, request: &LoanRequest) -> Result<LoanQuote> {
        let tenor = validate(request.loan_tenor)?;
        self.calculate(request.salary, request.monthly_interest, tenor)
    }

    /// Calculates a quote for an already validated tenor.
    ///
    /// The loan amount is the present value of `tenor` payments of 30% of the
    /// salary, discounted at the interest accumulated over the whole tenor.
    /// The principal deducts a single month's interest from it.
    ///
    /// # Errors
    ///
    /// * [`LoanError::ZeroInterest`] if `monthly_interest` is zero, since the
    ///   discount rate would be zero.
    /// * [`LoanError::NonFiniteResult`] if any output overflows or is NaN.
    pub fn calculate(
        &self,
        salary: f64,
        monthly_interest: f64,
        tenor: LoanTenor,
    ) -> Result<LoanQuote> {
        if monthly_interest == 0.0 {
            return Err(LoanError::ZeroInterest);
        }

        let months = f64::from(tenor.months());
        let monthly_repayment_limit = REPAYMENT_SHARE_OF_SALARY * salary;
        let cumulative_interest = (monthly_interest * months) / 100.0;

        // powf rather than powi keeps results identical to a libm `pow`
        let loan_amount = monthly_repayment_limit
            * ((1.0 - (1.0 + cumulative_interest).powf(-months)) / cumulative_interest);
        let principal = loan_amount - (monthly_interest / 100.0) * loan_amount;
        let total_interest_rate = monthly_interest * months;
        let monthly_repayment = loan_amount / months;

        tracing::debug!(
            salary,
            monthly_interest,
            tenor = tenor.months(),
            cumulative_interest,
            loan_amount,
            "calculated loan quote"
        );

        Ok(LoanQuote {
            recommended_loan_amount: Money::from_f64(loan_amount, "recommended_loan_amount")?,
            principal: Money::from_f64(principal, "principal")?,
            total_interest_rate: Money::from_f64(total_interest_rate, "total_interest")?,
            monthly_repayment: Money::from_f64(monthly_repayment, "monthly_repayment")?,
        })
    }
}
