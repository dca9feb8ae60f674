use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::api::dtos::{requests::BusinessSetupRequest, responses::AuthResponse};
use crate::error::AppError;
use crate::state::AppState;

pub async fn complete_business_setup(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BusinessSetupRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (account, session_state) = state
        .session_service
        .complete_business_setup(payload.category, payload.business_name)
        .await?;

    Ok(Json(AuthResponse {
        state: session_state,
        account: account.into(),
    }))
}
