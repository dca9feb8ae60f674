use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{
    AccountRepository, CustomerRepository, InsightService, SessionRepository,
};
use crate::domain::services::session_service::SessionService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub account_repo: Arc<dyn AccountRepository>,
    pub session_repo: Arc<dyn SessionRepository>,
    pub customer_repo: Arc<dyn CustomerRepository>,
    pub session_service: Arc<SessionService>,
    pub insight_service: Arc<dyn InsightService>,
}
