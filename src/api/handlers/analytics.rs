use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::api::extractors::session::CurrentAccount;
use crate::domain::services::growth::monthly_growth;
use crate::error::AppError;
use crate::state::AppState;

pub async fn growth(
    State(state): State<Arc<AppState>>,
    _account: CurrentAccount,
) -> Result<impl IntoResponse, AppError> {
    let customers = state.customer_repo.list().await?;
    let series = monthly_growth(&customers, Utc::now().date_naive());

    Ok(Json(series))
}
