use std::sync::Arc;

use tracing::info;

use crate::domain::models::account::{Account, BusinessCategory, SessionState};
use crate::domain::ports::{AccountRepository, SessionRepository};
use crate::error::AppError;

/// Owns the account directory and the single current-session pointer.
/// State machine: Anonymous -> AwaitingBusinessSetup | Active on
/// signup/login, AwaitingBusinessSetup -> Active once category and business
/// name are both set, any authenticated state -> Anonymous on logout.
pub struct SessionService {
    accounts: Arc<dyn AccountRepository>,
    session: Arc<dyn SessionRepository>,
}

impl SessionService {
    pub fn new(accounts: Arc<dyn AccountRepository>, session: Arc<dyn SessionRepository>) -> Self {
        Self { accounts, session }
    }

    pub async fn signup(
        &self,
        name: String,
        email: String,
        password: String,
        confirm_password: String,
    ) -> Result<(Account, SessionState), AppError> {
        if password != confirm_password {
            return Err(AppError::PasswordMismatch);
        }
        if self.accounts.find_by_email(&email).await?.is_some() {
            return Err(AppError::DuplicateEmail);
        }

        let account = self.accounts.append(&Account::new(email, name, password)).await?;
        self.session.set_current(&account).await?;

        info!("Account registered: {}", account.email);
        Ok((account.clone(), SessionState::for_account(Some(&account))))
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(Account, SessionState), AppError> {
        let account = match self.accounts.find_by_email(email).await? {
            Some(a) if a.password == password => a,
            // Session pointer stays untouched on a failed attempt.
            _ => return Err(AppError::InvalidCredentials),
        };

        self.session.set_current(&account).await?;

        info!("Account logged in: {}", account.email);
        Ok((account.clone(), SessionState::for_account(Some(&account))))
    }

    /// Clears the session pointer; the directory entry survives.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.session.clear().await?;
        info!("Session cleared");
        Ok(())
    }

    /// Completes onboarding. Rejected without a transition when either
    /// field is missing or blank. Patches both the session record and the
    /// matching directory entry so the two views stay consistent.
    pub async fn complete_business_setup(
        &self,
        category: Option<BusinessCategory>,
        business_name: Option<String>,
    ) -> Result<(Account, SessionState), AppError> {
        let mut account = self.session.current().await?.ok_or(AppError::Unauthorized)?;

        let category = category
            .ok_or_else(|| AppError::Validation("Business category is required".into()))?;
        let business_name = business_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::Validation("Business name is required".into()))?;

        account.category = Some(category);
        account.business_name = Some(business_name);

        let account = self.accounts.update(&account).await?;
        self.session.set_current(&account).await?;

        info!("Business setup completed: {}", account.email);
        Ok((account.clone(), SessionState::for_account(Some(&account))))
    }

    pub async fn current(&self) -> Result<(Option<Account>, SessionState), AppError> {
        let account = self.session.current().await?;
        let state = SessionState::for_account(account.as_ref());
        Ok((account, state))
    }
}
