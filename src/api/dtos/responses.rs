use serde::Serialize;

use crate::domain::models::account::{Account, BusinessCategory, SessionState};
use crate::domain::models::customer::Customer;

/// Account view handed to clients; the stored credential never leaves the
/// store.
#[derive(Serialize)]
pub struct AccountProfile {
    pub email: String,
    pub name: String,
    pub category: Option<BusinessCategory>,
    pub business_name: Option<String>,
}

impl From<Account> for AccountProfile {
    fn from(account: Account) -> Self {
        Self {
            email: account.email,
            name: account.name,
            category: account.category,
            business_name: account.business_name,
        }
    }
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub state: SessionState,
    pub account: AccountProfile,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub state: SessionState,
    pub account: Option<AccountProfile>,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub total_customers: usize,
    pub active_customers: usize,
    pub expiring_soon: usize,
    pub recent_customers: Vec<Customer>,
}

#[derive(Serialize)]
pub struct InsightResponse {
    pub content: String,
}
