use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use skincircuit_core::Advisor;

#[derive(Clone)]
pub struct HealthState {
    advisor: Arc<Advisor>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub catalog: HealthCheck,
    pub classifier: HealthCheck,
    pub checked_at: String,
}

pub fn router(advisor: Arc<Advisor>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { advisor })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let catalog = catalog_check(&state.advisor);
    let ready = catalog.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "skincircuit-server runtime initialized".to_string(),
        },
        catalog,
        classifier: HealthCheck {
            status: "ready",
            detail: format!("{} rules loaded", state.advisor.classifier().table().len()),
        },
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

fn catalog_check(advisor: &Advisor) -> HealthCheck {
    let catalog = advisor.catalog();
    if catalog.is_empty() {
        return HealthCheck { status: "degraded", detail: "catalog has no categories".to_string() };
    }

    HealthCheck {
        status: "ready",
        detail: format!(
            "{} categories, {} products",
            catalog.len(),
            catalog.product_count()
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{extract::State, http::StatusCode, Json};
    use skincircuit_core::{Advisor, CatalogIndex, IntentClassifier};

    use crate::health::{health, HealthState};

    #[tokio::test]
    async fn health_returns_ready_with_builtin_tables() {
        let (status, Json(payload)) =
            health(State(HealthState { advisor: Arc::new(Advisor::builtin()) })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "ready");
        assert_eq!(payload.catalog.status, "ready");
        assert!(payload.catalog.detail.starts_with("8 categories"));
        assert_eq!(payload.classifier.detail, "9 rules loaded");
    }

    #[tokio::test]
    async fn health_returns_service_unavailable_for_empty_catalog() {
        let advisor = Advisor::new(CatalogIndex::default(), IntentClassifier::builtin());
        let (status, Json(payload)) = health(State(HealthState { advisor: Arc::new(advisor) })).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload.status, "degraded");
        assert_eq!(payload.catalog.status, "degraded");
        assert_eq!(payload.service.status, "ready");
    }
}
