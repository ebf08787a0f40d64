use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::engine::ScoringError;
use super::form::LoanApplicationForm;
use super::service::{CreditScoringService, CreditServiceError};

/// Router builder exposing HTTP endpoints for scoring and the price list.
pub fn credit_router(service: Arc<CreditScoringService>) -> Router {
    Router::new()
        .route("/api/v1/credit/evaluations", post(evaluate_handler))
        .route("/api/v1/credit/vehicles", get(vehicles_handler))
        .with_state(service)
}

pub(crate) async fn evaluate_handler(
    State(service): State<Arc<CreditScoringService>>,
    axum::Json(form): axum::Json<LoanApplicationForm>,
) -> Response {
    match service.evaluate(form) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => {
            let status = if error.is_input_error() {
                StatusCode::UNPROCESSABLE_ENTITY
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            let kind = match &error {
                CreditServiceError::Form(_) => "invalid_form",
                CreditServiceError::Scoring(ScoringError::UnknownCategory(_)) => "unknown_category",
                CreditServiceError::Scoring(ScoringError::SchemaMismatch(_)) => "schema_mismatch",
                CreditServiceError::Scoring(ScoringError::DivisionEdgeCase(_)) => "invalid_terms",
            };
            let payload = json!({
                "error": error.to_string(),
                "kind": kind,
            });
            (status, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn vehicles_handler(
    State(service): State<Arc<CreditScoringService>>,
) -> Response {
    let payload = json!({ "vehicles": service.catalog().listings() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
