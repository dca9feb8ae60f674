use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{models::account::Account, ports::AccountRepository};
use crate::error::AppError;
use crate::infra::storage::json_store::JsonStore;

const ACCOUNTS_KEY: &str = "accounts";

/// Account directory persisted as an ordered sequence under one store key,
/// unique by email.
pub struct JsonAccountRepo {
    store: Arc<JsonStore>,
}

impl JsonAccountRepo {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Vec<Account>, AppError> {
        Ok(self.store.get::<Vec<Account>>(ACCOUNTS_KEY)?.unwrap_or_default())
    }
}

#[async_trait]
impl AccountRepository for JsonAccountRepo {
    async fn append(&self, account: &Account) -> Result<Account, AppError> {
        let mut accounts = self.load()?;
        if accounts.iter().any(|a| a.email == account.email) {
            return Err(AppError::DuplicateEmail);
        }
        accounts.push(account.clone());
        self.store.set(ACCOUNTS_KEY, &accounts)?;
        Ok(account.clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        Ok(self.load()?.into_iter().find(|a| a.email == email))
    }

    async fn update(&self, account: &Account) -> Result<Account, AppError> {
        let mut accounts = self.load()?;
        let entry = accounts
            .iter_mut()
            .find(|a| a.email == account.email)
            .ok_or_else(|| AppError::NotFound(format!("Account not found: {}", account.email)))?;
        *entry = account.clone();
        self.store.set(ACCOUNTS_KEY, &accounts)?;
        Ok(account.clone())
    }

    async fn list(&self) -> Result<Vec<Account>, AppError> {
        self.load()
    }
}
