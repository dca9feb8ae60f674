use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CustomerListQuery, SaveCustomerRequest};
use crate::api::extractors::session::CurrentAccount;
use crate::domain::models::customer::{Customer, SubscriptionStatus};
use crate::domain::services::filtering::{filter_customers, ExpiryWindow};
use crate::error::AppError;
use crate::state::AppState;

fn validate(payload: &SaveCustomerRequest) -> Result<(), AppError> {
    if payload.full_name.trim().is_empty() {
        return Err(AppError::Validation("Full name is required".into()));
    }
    if payload.phone_number.is_empty()
        || payload.phone_number.len() > 10
        || !payload.phone_number.chars().all(|c| c.is_ascii_digit())
    {
        return Err(AppError::Validation("Phone number must be 1-10 digits".into()));
    }
    if payload.subscription_type.trim().is_empty() {
        return Err(AppError::Validation("Subscription type is required".into()));
    }
    if !payload.amount.is_finite() || payload.amount < 0.0 {
        return Err(AppError::Validation("Amount must be non-negative".into()));
    }
    Ok(())
}

pub async fn list_customers(
    State(state): State<Arc<AppState>>,
    _account: CurrentAccount,
    Query(query): Query<CustomerListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let customers = state.customer_repo.list().await?;
    let window = ExpiryWindow::parse(query.expires_within.as_deref());
    let today = Utc::now().date_naive();

    Ok(Json(filter_customers(&customers, &query.search, window, today)))
}

pub async fn create_customer(
    State(state): State<Arc<AppState>>,
    _account: CurrentAccount,
    Json(payload): Json<SaveCustomerRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate(&payload)?;

    let customer = Customer::new(
        payload.full_name,
        payload.phone_number,
        payload.joining_date,
        payload.subscription_end_date,
        payload.subscription_type,
        payload.amount,
        payload.notes,
        Utc::now().date_naive(),
    );

    let created = state.customer_repo.create(&customer).await?;
    info!("Customer created: {}", created.id);

    Ok(Json(created))
}

pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    _account: CurrentAccount,
    Path(customer_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut customer = state
        .customer_repo
        .find_by_id(&customer_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer not found".into()))?;

    customer.status = customer.live_status(Utc::now().date_naive());
    Ok(Json(customer))
}

/// Edits replace every field except the identifier and the creation-month
/// bucket, which survive unchanged. The status snapshot is recomputed at
/// this save point.
pub async fn update_customer(
    State(state): State<Arc<AppState>>,
    _account: CurrentAccount,
    Path(customer_id): Path<String>,
    Json(payload): Json<SaveCustomerRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate(&payload)?;

    let existing = state
        .customer_repo
        .find_by_id(&customer_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer not found".into()))?;

    let today = Utc::now().date_naive();
    let customer = Customer {
        id: existing.id,
        full_name: payload.full_name,
        phone_number: payload.phone_number,
        joining_date: payload.joining_date,
        subscription_end_date: payload.subscription_end_date,
        subscription_type: payload.subscription_type,
        amount: payload.amount,
        notes: payload.notes,
        status: SubscriptionStatus::evaluate(payload.subscription_end_date, today),
        created_month: existing.created_month,
    };

    let updated = state.customer_repo.update(&customer).await?;
    info!("Customer updated: {}", updated.id);

    Ok(Json(updated))
}
