//! HTTP interface: a single `POST /recommend_loan` endpoint served by axum.

pub mod dto;
pub mod error;
pub mod handler;

use crate::application::calculator::LoanCalculator;
use axum::Router;
use axum::routing::post;
use tower_http::trace::TraceLayer;

/// Builds the service router.
///
/// The calculator is stateless, so it is handed to handlers by value and no
/// locking is involved between concurrent requests.
pub fn router() -> Router {
    Router::new()
        .route("/recommend_loan", post(handler::recommend_loan))
        .with_state(LoanCalculator::new())
        .layer(TraceLayer::new_for_http())
}
