use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscriptionStatus {
    Active,
    Expired,
}

impl SubscriptionStatus {
    /// Active iff the subscription end date has not passed. Both dates are
    /// plain calendar dates, so "expires today" still counts as Active.
    pub fn evaluate(end_date: NaiveDate, today: NaiveDate) -> Self {
        if end_date >= today {
            SubscriptionStatus::Active
        } else {
            SubscriptionStatus::Expired
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Customer {
    pub id: String,
    pub full_name: String,
    pub phone_number: String,
    pub joining_date: NaiveDate,
    pub subscription_end_date: NaiveDate,
    pub subscription_type: String,
    pub amount: f64,
    pub notes: String,
    /// Snapshot taken at save time. Read paths must use `live_status`.
    pub status: SubscriptionStatus,
    /// YYYY-MM bucket assigned at creation, never recomputed on edits.
    pub created_month: String,
}

impl Customer {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        full_name: String,
        phone_number: String,
        joining_date: NaiveDate,
        subscription_end_date: NaiveDate,
        subscription_type: String,
        amount: f64,
        notes: String,
        today: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            full_name,
            phone_number,
            joining_date,
            subscription_end_date,
            subscription_type,
            amount,
            notes,
            status: SubscriptionStatus::evaluate(subscription_end_date, today),
            created_month: today.format("%Y-%m").to_string(),
        }
    }

    pub fn live_status(&self, today: NaiveDate) -> SubscriptionStatus {
        SubscriptionStatus::evaluate(self.subscription_end_date, today)
    }

    /// Whole days until the subscription lapses. Negative once expired.
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        self.subscription_end_date.signed_duration_since(today).num_days()
    }
}
