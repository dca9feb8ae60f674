use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::domain::services::session_service::SessionService;
use crate::infra::ai::gemini_insight_service::GeminiInsightService;
use crate::infra::repositories::{
    json_account_repo::JsonAccountRepo, json_customer_repo::JsonCustomerRepo,
    json_session_repo::JsonSessionRepo,
};
use crate::infra::storage::json_store::JsonStore;
use crate::state::AppState;

pub fn bootstrap_state(config: &Config) -> AppState {
    info!("Opening JSON store at {}", config.data_path);

    let store = Arc::new(
        JsonStore::open(&config.data_path).expect("Failed to open data store"),
    );

    let account_repo = Arc::new(JsonAccountRepo::new(store.clone()));
    let session_repo = Arc::new(JsonSessionRepo::new(store.clone()));
    let session_service = Arc::new(SessionService::new(account_repo.clone(), session_repo.clone()));

    AppState {
        config: config.clone(),
        account_repo,
        session_repo,
        customer_repo: Arc::new(JsonCustomerRepo::new(store.clone())),
        session_service,
        insight_service: Arc::new(GeminiInsightService::new()),
    }
}
