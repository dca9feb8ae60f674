use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{models::account::Account, ports::SessionRepository};
use crate::error::AppError;
use crate::infra::storage::json_store::JsonStore;

const SESSION_KEY: &str = "session";

/// Zero-or-one persisted account record: the current session pointer.
pub struct JsonSessionRepo {
    store: Arc<JsonStore>,
}

impl JsonSessionRepo {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionRepository for JsonSessionRepo {
    async fn current(&self) -> Result<Option<Account>, AppError> {
        Ok(self.store.get::<Account>(SESSION_KEY)?)
    }

    async fn set_current(&self, account: &Account) -> Result<(), AppError> {
        self.store.set(SESSION_KEY, account)?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), AppError> {
        self.store.remove(SESSION_KEY)?;
        Ok(())
    }
}
