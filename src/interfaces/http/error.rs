use super::dto::ErrorBody;
use crate::error::LoanError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// A `LoanError` on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub LoanError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            LoanError::MalformedRequest(_)
            | LoanError::InvalidTenor(_)
            | LoanError::ZeroInterest
            | LoanError::NonFiniteResult { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<LoanError> for ApiError {
    fn from(err: LoanError) -> Self {
        Self(err)
    }
}

// axum answers type errors with 422; clients of this endpoint expect 400
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(LoanError::MalformedRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), error = %self.0, "request rejected");

        let body = ErrorBody {
            detail: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_errors_map_to_bad_request() {
        let errors = [
            LoanError::MalformedRequest("missing field `salary`".into()),
            LoanError::InvalidTenor(4),
            LoanError::ZeroInterest,
            LoanError::NonFiniteResult { field: "principal" },
        ];
        for err in errors {
            assert_eq!(ApiError(err).status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_response_body_carries_detail() {
        let response = ApiError(LoanError::InvalidTenor(4)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"detail": "Loan tenor must be 3, 6, or 12 months"})
        );
    }
}
