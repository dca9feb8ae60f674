use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::sync::Arc;
use tracing::Span;

use crate::domain::models::account::Account;
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated, fully onboarded business owner. Rejects with 401 when
/// no session is active and 403 while business setup is still pending, so
/// the main application surface stays unreachable until onboarding is done.
pub struct CurrentAccount(pub Account);

impl<S> FromRequestParts<S> for CurrentAccount
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let account = app_state
            .session_repo
            .current()
            .await?
            .ok_or(AppError::Unauthorized)?;

        if !account.is_setup_complete() {
            return Err(AppError::SetupIncomplete);
        }

        Span::current().record("account_email", account.email.as_str());

        Ok(CurrentAccount(account))
    }
}
