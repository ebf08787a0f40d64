use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use credit_risk::underwriting::{credit_router, CreditScoringService};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_credit_routes(service: Arc<CreditScoringService>) -> axum::Router {
    credit_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Acquire);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "draining" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use credit_risk::underwriting::{ArtifactBundle, RiskEngine, ScoringConfig, VehicleCatalog};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    fn scoring_service() -> Arc<CreditScoringService> {
        let directory = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../artifacts");
        let bundle = ArtifactBundle::load(&directory).expect("bundled artifacts load");
        let engine = RiskEngine::new(Arc::new(bundle), ScoringConfig::default());
        Arc::new(CreditScoringService::new(
            Arc::new(engine),
            Arc::new(VehicleCatalog::standard()),
        ))
    }

    fn state(ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
        }
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_drops_once_shutdown_begins() {
        let app_state = state(true);
        let response = readiness_endpoint(Extension(app_state.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        app_state.readiness.store(false, Ordering::Release);
        let response = readiness_endpoint(Extension(app_state)).await.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn full_router_serves_health_and_scoring_routes() {
        let app = with_credit_routes(scoring_service()).layer(Extension(state(true)));

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/ready")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("ready responds");
        assert_eq!(response.status(), StatusCode::OK);

        let payload = json!({
            "vehicle_name": "Mazda 2",
            "monthly_income": 15_000_000.0,
            "occupation": "Kelompok A",
            "blacklist": "Tidak Ada",
            "debtor_type": "Lama",
            "housing": "Milik Sendiri"
        });
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/credit/evaluations")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("evaluation responds");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
