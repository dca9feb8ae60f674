pub mod json_account_repo;
pub mod json_customer_repo;
pub mod json_session_repo;
