use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dtos::responses::DashboardResponse;
use crate::api::extractors::session::CurrentAccount;
use crate::domain::models::customer::SubscriptionStatus;
use crate::domain::services::filtering::{filter_customers, ExpiryWindow};
use crate::error::AppError;
use crate::state::AppState;

const EXPIRING_SOON_DAYS: i64 = 7;
const RECENT_LIMIT: usize = 5;

pub async fn overview(
    State(state): State<Arc<AppState>>,
    _account: CurrentAccount,
) -> Result<impl IntoResponse, AppError> {
    let customers = state.customer_repo.list().await?;
    let today = Utc::now().date_naive();

    let active_customers = customers
        .iter()
        .filter(|c| c.live_status(today) == SubscriptionStatus::Active)
        .count();

    let expiring_soon =
        filter_customers(&customers, "", ExpiryWindow::Within(EXPIRING_SOON_DAYS), today).len();

    let recent_customers = customers
        .iter()
        .take(RECENT_LIMIT)
        .map(|c| {
            let mut refreshed = c.clone();
            refreshed.status = c.live_status(today);
            refreshed
        })
        .collect();

    Ok(Json(DashboardResponse {
        total_customers: customers.len(),
        active_customers,
        expiring_soon,
        recent_customers,
    }))
}
