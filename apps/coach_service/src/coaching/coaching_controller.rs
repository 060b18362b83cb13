use axum::{http::StatusCode, response::IntoResponse, routing::post, Extension, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::app_module::AppState;

#[derive(Debug, Deserialize)]
pub struct PolishRequest {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateScenarioRequest {
    pub history: Option<Value>,
    #[serde(rename = "scenarioTitle")]
    pub scenario_title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProcessReadingRequest {
    pub text: Option<String>,
}

pub fn coaching_router() -> Router {
    Router::new()
        .route("/api/polish", post(polish))
        .route("/api/evaluate-scenario", post(evaluate_scenario))
        .route("/api/process-reading", post(process_reading))
}

pub async fn polish(
    Extension(state): Extension<AppState>,
    Json(request): Json<PolishRequest>,
) -> impl IntoResponse {
    let Some(text) = request.text.filter(|text| !text.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Text is required" })),
        );
    };

    match state.service.coaching_service.polish(&text).await {
        Ok(result) => (StatusCode::OK, Json(result)),
        Err(e) => {
            tracing::error!("Error polishing text: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to polish text",
                    "details": format!("{:#}", e)
                })),
            )
        }
    }
}

pub async fn evaluate_scenario(
    Extension(state): Extension<AppState>,
    Json(request): Json<EvaluateScenarioRequest>,
) -> impl IntoResponse {
    // An empty history array is a valid (if short) transcript.
    let Some(history) = request.history.filter(Value::is_array) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Valid history array is required" })),
        );
    };
    let scenario_title = request.scenario_title.unwrap_or_default();

    match state
        .service
        .coaching_service
        .evaluate_scenario(&history, &scenario_title)
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result)),
        Err(e) => {
            tracing::error!("Error evaluating scenario: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to evaluate scenario",
                    "details": format!("{:#}", e)
                })),
            )
        }
    }
}

pub async fn process_reading(
    Extension(state): Extension<AppState>,
    Json(request): Json<ProcessReadingRequest>,
) -> impl IntoResponse {
    let Some(text) = request.text.filter(|text| !text.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Text is required" })),
        );
    };

    match state.service.coaching_service.process_reading(&text).await {
        Ok(result) => (StatusCode::OK, Json(result)),
        Err(e) => {
            tracing::error!("Error processing reading text: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to process text",
                    "details": format!("{:#}", e)
                })),
            )
        }
    }
}
