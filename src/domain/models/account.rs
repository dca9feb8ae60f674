use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessCategory {
    Gym,
    Salon,
    #[serde(rename = "Coaching Centre")]
    CoachingCentre,
    #[serde(rename = "Yoga Studio")]
    YogaStudio,
    #[serde(rename = "Dance Academy")]
    DanceAcademy,
    #[serde(rename = "Fitness Studio")]
    FitnessStudio,
    #[serde(rename = "Tuition Centre")]
    TuitionCentre,
    #[serde(rename = "Tiffin Service")]
    TiffinService,
    #[serde(rename = "Martial Arts")]
    MartialArts,
    #[serde(rename = "Custom Subscription")]
    CustomSubscription,
}

/// One registered business owner. The account directory is keyed by email;
/// the current session mirrors at most one of these records.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Account {
    pub email: String,
    pub name: String,
    /// Stored and compared as plaintext. API responses use `AccountProfile`
    /// and never include it.
    pub password: String,
    pub category: Option<BusinessCategory>,
    pub business_name: Option<String>,
}

impl Account {
    pub fn new(email: String, name: String, password: String) -> Self {
        let name = if name.trim().is_empty() {
            email.split('@').next().unwrap_or(&email).to_string()
        } else {
            name
        };
        Self {
            email,
            name,
            password,
            category: None,
            business_name: None,
        }
    }

    /// Category and business name are set together, so either both are
    /// present or onboarding is still pending.
    pub fn is_setup_complete(&self) -> bool {
        self.category.is_some() && self.business_name.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Anonymous,
    AwaitingBusinessSetup,
    Active,
}

impl SessionState {
    pub fn for_account(account: Option<&Account>) -> Self {
        match account {
            None => SessionState::Anonymous,
            Some(a) if a.is_setup_complete() => SessionState::Active,
            Some(_) => SessionState::AwaitingBusinessSetup,
        }
    }
}
