use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{models::customer::Customer, ports::CustomerRepository};
use crate::error::AppError;
use crate::infra::storage::json_store::JsonStore;

const CUSTOMERS_KEY: &str = "customers";

/// Ordered customer collection, unique by id, mirrored to the store on
/// every mutation. Edit-only: there is no delete operation.
pub struct JsonCustomerRepo {
    store: Arc<JsonStore>,
}

impl JsonCustomerRepo {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Vec<Customer>, AppError> {
        Ok(self.store.get::<Vec<Customer>>(CUSTOMERS_KEY)?.unwrap_or_default())
    }
}

#[async_trait]
impl CustomerRepository for JsonCustomerRepo {
    async fn create(&self, customer: &Customer) -> Result<Customer, AppError> {
        let mut customers = self.load()?;
        if customers.iter().any(|c| c.id == customer.id) {
            return Err(AppError::Validation(format!("Duplicate customer id: {}", customer.id)));
        }
        customers.push(customer.clone());
        self.store.set(CUSTOMERS_KEY, &customers)?;
        Ok(customer.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, AppError> {
        Ok(self.load()?.into_iter().find(|c| c.id == id))
    }

    async fn list(&self) -> Result<Vec<Customer>, AppError> {
        self.load()
    }

    async fn update(&self, customer: &Customer) -> Result<Customer, AppError> {
        let mut customers = self.load()?;
        let entry = customers
            .iter_mut()
            .find(|c| c.id == customer.id)
            .ok_or_else(|| AppError::NotFound(format!("Customer not found: {}", customer.id)))?;
        *entry = customer.clone();
        self.store.set(CUSTOMERS_KEY, &customers)?;
        Ok(customer.clone())
    }
}
