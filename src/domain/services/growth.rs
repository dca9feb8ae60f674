use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::models::customer::Customer;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct MonthlyCount {
    pub month: String,
    pub new_customers: i64,
}

/// Groups customers by their creation month and returns an ascending
/// (month, count) series. The zero-padded YYYY-MM keys make the lexical
/// BTreeMap order the chronological one. An empty collection yields a
/// single zero entry for the current month so chart consumers never see
/// an empty series.
pub fn monthly_growth(customers: &[Customer], today: NaiveDate) -> Vec<MonthlyCount> {
    let mut buckets: BTreeMap<&str, i64> = BTreeMap::new();
    for customer in customers {
        *buckets.entry(customer.created_month.as_str()).or_insert(0) += 1;
    }

    if buckets.is_empty() {
        return vec![MonthlyCount {
            month: today.format("%Y-%m").to_string(),
            new_customers: 0,
        }];
    }

    buckets
        .into_iter()
        .map(|(month, count)| MonthlyCount {
            month: month.to_string(),
            new_customers: count,
        })
        .collect()
}
