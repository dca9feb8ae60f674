use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::warn;

use crate::api::dtos::{requests::InsightRequest, responses::InsightResponse};
use crate::api::extractors::session::CurrentAccount;
use crate::error::AppError;
use crate::state::AppState;

const FALLBACK_MESSAGE: &str = "Insights currently unavailable.";

/// Generative-insight stub. Any failure, including a missing API key,
/// degrades to a fixed fallback string; nothing in the core flows depends
/// on this endpoint succeeding.
pub async fn generate_insight(
    State(state): State<Arc<AppState>>,
    _account: CurrentAccount,
    Json(payload): Json<InsightRequest>,
) -> Result<impl IntoResponse, AppError> {
    let content = match &state.config.gemini_api_key {
        Some(api_key) => state
            .insight_service
            .generate(api_key, &payload.prompt)
            .await
            .unwrap_or_else(|e| {
                warn!("Insight generation failed, serving fallback: {:?}", e);
                FALLBACK_MESSAGE.to_string()
            }),
        None => FALLBACK_MESSAGE.to_string(),
    };

    Ok(Json(InsightResponse { content }))
}
