use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use crate::api::dtos::{
    requests::{LoginRequest, SignupRequest},
    responses::{AuthResponse, SessionResponse},
};
use crate::error::AppError;
use crate::state::AppState;

pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return Err(AppError::Validation("Email and password are required".into()));
    }

    let (account, session_state) = state
        .session_service
        .signup(payload.name, payload.email, payload.password, payload.confirm_password)
        .await?;

    Ok(Json(AuthResponse {
        state: session_state,
        account: account.into(),
    }))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (account, session_state) = state
        .session_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(AuthResponse {
        state: session_state,
        account: account.into(),
    }))
}

pub async fn logout(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    state.session_service.logout().await?;
    Ok(StatusCode::OK)
}

pub async fn session(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let (account, session_state) = state.session_service.current().await?;

    Ok(Json(SessionResponse {
        state: session_state,
        account: account.map(Into::into),
    }))
}
