pub mod analytics;
pub mod auth;
pub mod customer;
pub mod dashboard;
pub mod health;
pub mod insight;
pub mod onboarding;
