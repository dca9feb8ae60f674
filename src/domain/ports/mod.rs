use crate::domain::models::{account::Account, customer::Customer};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn append(&self, account: &Account) -> Result<Account, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError>;
    async fn update(&self, account: &Account) -> Result<Account, AppError>;
    async fn list(&self) -> Result<Vec<Account>, AppError>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn current(&self) -> Result<Option<Account>, AppError>;
    async fn set_current(&self, account: &Account) -> Result<(), AppError>;
    async fn clear(&self) -> Result<(), AppError>;
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create(&self, customer: &Customer) -> Result<Customer, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, AppError>;
    async fn list(&self) -> Result<Vec<Customer>, AppError>;
    async fn update(&self, customer: &Customer) -> Result<Customer, AppError>;
}

#[async_trait]
pub trait InsightService: Send + Sync {
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, AppError>;
}
