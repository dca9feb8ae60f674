use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::models::account::BusinessCategory;

#[derive(Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Both fields optional so an incomplete selection surfaces as a rejected
/// submission rather than a deserialization failure.
#[derive(Deserialize)]
pub struct BusinessSetupRequest {
    pub category: Option<BusinessCategory>,
    pub business_name: Option<String>,
}

#[derive(Deserialize)]
pub struct SaveCustomerRequest {
    pub full_name: String,
    pub phone_number: String,
    pub joining_date: NaiveDate,
    pub subscription_end_date: NaiveDate,
    pub subscription_type: String,
    pub amount: f64,
    #[serde(default)]
    pub notes: String,
}

#[derive(Deserialize)]
pub struct CustomerListQuery {
    #[serde(default)]
    pub search: String,
    /// Days until expiry; "all", absent or unparsable means no window.
    pub expires_within: Option<String>,
}

#[derive(Deserialize)]
pub struct InsightRequest {
    pub prompt: String,
}
