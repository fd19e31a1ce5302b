//! JSON API routes.
//!
//! - `POST /api/products/recommend`: product links per requested category
//! - `POST /api/chat`: canned reply for a free-text question
//! - `POST /api/routine`: fixed routine annotated with skin type and concern

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Serialize;
use skincircuit_core::{
    Advisor, ChatRequest, Classification, InterfaceError, RecommendRequest, RecommendResponse,
    Routine, RoutineRequest, ValidationError,
};
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct ApiState {
    advisor: Arc<Advisor>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub error: String,
    pub correlation_id: String,
}

type ApiFailure = (StatusCode, Json<ApiError>);

pub fn router(advisor: Arc<Advisor>) -> Router {
    Router::new()
        .route("/api/products/recommend", post(recommend))
        .route("/api/chat", post(chat))
        .route("/api/routine", post(routine))
        .with_state(ApiState { advisor })
}

async fn recommend(
    State(state): State<ApiState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<RecommendResponse>, ApiFailure> {
    let Json(request) = payload.map_err(|rejection| malformed("recommend", rejection))?;
    let response =
        state.advisor.recommend(&request).map_err(|error| reject("recommend", error))?;

    info!(
        event_name = "api.recommend.completed",
        skin_type = %response.skin_type,
        categories = response.categories.len(),
        "recommendation resolved"
    );
    Ok(Json(response))
}

async fn chat(
    State(state): State<ApiState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<Classification>, ApiFailure> {
    let Json(request) = payload.map_err(|rejection| malformed("chat", rejection))?;
    let classification = state.advisor.chat(&request.text);

    info!(
        event_name = "api.chat.completed",
        rule_id = classification.matched.rule_id().unwrap_or("empty_input"),
        "chat reply selected"
    );
    Ok(Json(classification))
}

async fn routine(
    State(state): State<ApiState>,
    payload: Result<Json<RoutineRequest>, JsonRejection>,
) -> Result<Json<Routine>, ApiFailure> {
    let Json(request) = payload.map_err(|rejection| malformed("routine", rejection))?;
    let routine = state.advisor.routine(&request).map_err(|error| reject("routine", error))?;

    info!(
        event_name = "api.routine.completed",
        skin_type = %routine.skin_type,
        main_concern = %routine.main_concern,
        "routine built"
    );
    Ok(Json(routine))
}

fn malformed(route: &'static str, rejection: JsonRejection) -> ApiFailure {
    reject(route, ValidationError::MalformedBody(rejection.body_text()))
}

fn reject(route: &'static str, error: ValidationError) -> ApiFailure {
    let interface = error.into_interface(Uuid::new_v4().to_string());
    warn!(
        event_name = "api.request.rejected",
        route,
        correlation_id = %interface.correlation_id,
        error = %interface.message,
        "request failed validation"
    );
    interface_response(interface)
}

fn interface_response(interface: InterfaceError) -> ApiFailure {
    let body = ApiError { error: interface.message, correlation_id: interface.correlation_id };
    (StatusCode::BAD_REQUEST, Json(body))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use skincircuit_core::{
        classify::{EMPTY_INPUT_REPLY, FALLBACK_REPLY},
        Advisor,
    };
    use tower::ServiceExt;

    use crate::api::router;

    fn app() -> Router {
        router(Arc::new(Advisor::builtin()))
    }

    async fn post_json(uri: &str, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .expect("request should build");

        let response = app().oneshot(request).await.expect("router should respond");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body should collect");
        let payload = serde_json::from_slice(&bytes).expect("response should be JSON");
        (status, payload)
    }

    #[tokio::test]
    async fn recommend_returns_links_in_request_order() {
        let (status, payload) = post_json(
            "/api/products/recommend",
            json!({ "skinType": "dry", "categories": ["serum", "madeupkey"] }).to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["skinType"], "dry");
        assert_eq!(payload["categories"], json!(["serum", "madeupkey"]));
        assert_eq!(payload["linksByCategory"]["serum"][0]["label"], "Minimalist 10% Vitamin C Serum");
        assert_eq!(payload["linksByCategory"]["madeupkey"], json!([]));
    }

    #[tokio::test]
    async fn recommend_accepts_legacy_products_field() {
        let (status, payload) = post_json(
            "/api/products/recommend",
            json!({ "skinType": "oily", "products": ["toner"] }).to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["linksByCategory"]["toner"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn recommend_rejects_missing_categories() {
        let (status, payload) = post_json(
            "/api/products/recommend",
            json!({ "skinType": "oily", "categories": [] }).to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload["error"], "categories[] must contain at least one category");
        assert!(payload["correlationId"].as_str().map(|id| !id.is_empty()).unwrap_or(false));
    }

    #[tokio::test]
    async fn recommend_rejects_blank_skin_type() {
        let (status, payload) = post_json(
            "/api/products/recommend",
            json!({ "skinType": "  ", "categories": ["toner"] }).to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload["error"], "skinType is required");
    }

    #[tokio::test]
    async fn malformed_json_is_a_client_error() {
        let (status, payload) =
            post_json("/api/products/recommend", "{\"skinType\": ".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(payload["error"]
            .as_str()
            .map(|message| message.starts_with("malformed request body"))
            .unwrap_or(false));
    }

    #[tokio::test]
    async fn chat_answers_blank_text_with_prompt_reply() {
        let (status, payload) = post_json("/api/chat", json!({ "text": "   " }).to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["reply"], EMPTY_INPUT_REPLY);
        assert_eq!(payload["sources"], json!([]));
    }

    #[tokio::test]
    async fn chat_treats_byte_order_mark_as_blank() {
        let (status, payload) =
            post_json("/api/chat", json!({ "text": "\u{feff}" }).to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["reply"], EMPTY_INPUT_REPLY);
    }

    #[tokio::test]
    async fn chat_accepts_legacy_q_field() {
        let (status, payload) =
            post_json("/api/chat", json!({ "q": "What sunscreen should I use?" }).to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert!(payload["reply"].as_str().map(|reply| reply.contains("SPF 30+")).unwrap_or(false));
    }

    #[tokio::test]
    async fn chat_falls_back_for_unknown_questions() {
        let (_, payload) = post_json("/api/chat", json!({ "text": "asdkjasdkj" }).to_string()).await;
        assert_eq!(payload["reply"], FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn routine_builds_fixed_steps() {
        let (status, payload) = post_json(
            "/api/routine",
            json!({ "skinType": "oily", "concerns": ["Acne"] }).to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["mainConcern"], "Acne");
        assert_eq!(payload["steps"].as_array().map(Vec::len), Some(5));
        assert_eq!(payload["steps"][4]["name"], "Sunscreen");
        assert_eq!(payload["steps"][4]["timeOfDay"], "morningOnly");
    }

    #[tokio::test]
    async fn routine_rejects_missing_skin_type() {
        let (status, payload) =
            post_json("/api/routine", json!({ "concerns": ["Acne"] }).to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload["error"], "skinType is required");
    }
}
