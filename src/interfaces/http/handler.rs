use super::dto::QuoteResponse;
use super::error::ApiError;
use crate::application::calculator::LoanCalculator;
use crate::domain::loan::LoanRequest;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

/// `POST /recommend_loan`
///
/// Structural errors in the body, an unsupported tenor and degenerate inputs
/// all come back as 400 with a `detail` message.
pub async fn recommend_loan(
    State(calculator): State<LoanCalculator>,
    payload: Result<Json<LoanRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let Json(request) = payload?;
    let quote = calculator.quote(&request)?;

    tracing::info!(
        loan_tenor = request.loan_tenor,
        recommended_loan_amount = %quote.recommended_loan_amount,
        "loan recommended"
    );

    Ok(Json(quote.into()))
}
