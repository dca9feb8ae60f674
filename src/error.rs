use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::infra::storage::json_store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Email already registered")]
    DuplicateEmail,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("No active session")]
    Unauthorized,
    #[error("Business setup incomplete")]
    SetupIncomplete,
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Store(e) => {
                error!("Storage error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::DuplicateEmail => (StatusCode::CONFLICT, "Email already registered. Please login.".to_string()),
            AppError::PasswordMismatch => (StatusCode::BAD_REQUEST, "Passwords do not match".to_string()),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password".to_string()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "No active session".to_string()),
            AppError::SetupIncomplete => (StatusCode::FORBIDDEN, "Business setup incomplete".to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
