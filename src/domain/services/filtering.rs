use chrono::NaiveDate;

use crate::domain::models::customer::{Customer, SubscriptionStatus};

/// Expiry-window selector for the customer list. `All` disables window
/// filtering entirely; `Within(n)` keeps only customers still active whose
/// subscription lapses within the next `n` days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryWindow {
    All,
    Within(i64),
}

impl ExpiryWindow {
    /// Anything that is not a plain number ("all", empty, garbage, absent)
    /// means "no window filtering". Unparsable input is a defined fallback,
    /// not an error.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => ExpiryWindow::All,
            Some(s) => match s.trim().parse::<i64>() {
                Ok(days) => ExpiryWindow::Within(days),
                Err(_) => ExpiryWindow::All,
            },
        }
    }
}

/// Applies the search-term filter and the optional expiry window, in
/// collection order. Returned records carry the status recomputed against
/// `today` rather than the persisted snapshot.
pub fn filter_customers(
    customers: &[Customer],
    search_term: &str,
    window: ExpiryWindow,
    today: NaiveDate,
) -> Vec<Customer> {
    let needle = search_term.to_lowercase();

    customers
        .iter()
        .filter(|c| {
            c.full_name.to_lowercase().contains(&needle) || c.phone_number.contains(search_term)
        })
        .filter(|c| match window {
            ExpiryWindow::All => true,
            ExpiryWindow::Within(days) => {
                if c.live_status(today) != SubscriptionStatus::Active {
                    return false;
                }
                let remaining = c.days_until_expiry(today);
                (0..=days).contains(&remaining)
            }
        })
        .map(|c| {
            let mut refreshed = c.clone();
            refreshed.status = c.live_status(today);
            refreshed
        })
        .collect()
}
