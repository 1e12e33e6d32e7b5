use crate::domain::loan::LoanQuote;
use crate::domain::money::Money;
use serde::Serialize;

/// Response body of `POST /recommend_loan`.
///
/// The wire names predate this service and existing clients depend on them,
/// including the misspelled `"cummulative interest"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuoteResponse {
    pub recommended_loan_amount: Money,
    #[serde(rename = "principal amount")]
    pub principal: Money,
    #[serde(rename = "cummulative interest")]
    pub total_interest_rate: Money,
    #[serde(rename = "monthly installment")]
    pub monthly_repayment: Money,
}

impl From<LoanQuote> for QuoteResponse {
    fn from(quote: LoanQuote) -> Self {
        Self {
            recommended_loan_amount: quote.recommended_loan_amount,
            principal: quote.principal,
            total_interest_rate: quote.total_interest_rate,
            monthly_repayment: quote.monthly_repayment,
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}
