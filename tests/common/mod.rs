#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use loan_advisor::domain::loan::{LoanRequest, LoanTenor};
use loan_advisor::interfaces::http::router;
use rand::Rng;
use tower::ServiceExt;

/// Sends `body` to `POST /recommend_loan` on a fresh router and returns the
/// status with the parsed JSON body.
pub async fn post_recommend_loan(body: impl Into<Body>) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/recommend_loan")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    send(request).await
}

pub async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// A request with positive salary, positive interest and an offered tenor.
pub fn random_valid_request<R: Rng>(rng: &mut R) -> LoanRequest {
    let tenor = LoanTenor::ALL[rng.gen_range(0..LoanTenor::ALL.len())];
    LoanRequest {
        salary: rng.gen_range(1.0..1_000_000.0),
        monthly_interest: rng.gen_range(0.01..20.0),
        loan_tenor: i64::from(tenor.months()),
    }
}
