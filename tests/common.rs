use pulsemate_backend::{
    api::router::create_router,
    config::Config,
    domain::ports::InsightService,
    domain::services::session_service::SessionService,
    error::AppError,
    infra::repositories::{
        json_account_repo::JsonAccountRepo, json_customer_repo::JsonCustomerRepo,
        json_session_repo::JsonSessionRepo,
    },
    infra::storage::json_store::JsonStore,
    state::AppState,
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub struct MockInsightService;

#[async_trait]
impl InsightService for MockInsightService {
    async fn generate(&self, _api_key: &str, _prompt: &str) -> Result<String, AppError> {
        Ok("Mock insight: growth looks steady.".to_string())
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub data_path: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::build_at(format!("test_{}.json", Uuid::new_v4()), None)
    }

    /// A second instance over the same store file, simulating a restart.
    #[allow(dead_code)]
    pub fn reopen(&self) -> Self {
        Self::build_at(self.data_path.clone(), None)
    }

    /// Same fixture with an API key configured, so the insight endpoint
    /// reaches the (mock) generation service instead of the fallback.
    #[allow(dead_code)]
    pub fn with_api_key() -> Self {
        Self::build_at(format!("test_{}.json", Uuid::new_v4()), Some("test-key".to_string()))
    }

    fn build_at(data_path: String, gemini_api_key: Option<String>) -> Self {
        let config = Config {
            port: 0,
            data_path: data_path.clone(),
            gemini_api_key,
        };

        let store = Arc::new(JsonStore::open(&data_path).expect("Failed to open test store"));
        let account_repo = Arc::new(JsonAccountRepo::new(store.clone()));
        let session_repo = Arc::new(JsonSessionRepo::new(store.clone()));
        let session_service =
            Arc::new(SessionService::new(account_repo.clone(), session_repo.clone()));

        let state = Arc::new(AppState {
            config,
            account_repo,
            session_repo,
            customer_repo: Arc::new(JsonCustomerRepo::new(store.clone())),
            session_service,
            insight_service: Arc::new(MockInsightService),
        });

        let router = create_router(state.clone());

        Self {
            router,
            data_path,
            state,
        }
    }

    pub async fn post(&self, uri: &str, payload: &Value) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn put(&self, uri: &str, payload: &Value) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    /// Signs up the default owner and finishes business setup, leaving the
    /// session in the Active state most tests need.
    pub async fn signup_and_onboard(&self) {
        let signup = self
            .post(
                "/api/v1/auth/signup",
                &json!({
                    "name": "Priya",
                    "email": "owner@test.example",
                    "password": "secret",
                    "confirm_password": "secret"
                }),
            )
            .await;
        assert!(signup.status().is_success(), "signup failed: {}", signup.status());

        let setup = self
            .post(
                "/api/v1/onboarding/business",
                &json!({ "category": "Gym", "business_name": "Iron Gym" }),
            )
            .await;
        assert!(setup.status().is_success(), "setup failed: {}", setup.status());
    }

    #[allow(dead_code)]
    pub async fn create_customer(&self, name: &str, phone: &str, end_date: &str) -> Value {
        let response = self
            .post(
                "/api/v1/customers",
                &json!({
                    "full_name": name,
                    "phone_number": phone,
                    "joining_date": "2024-01-10",
                    "subscription_end_date": end_date,
                    "subscription_type": "Monthly",
                    "amount": 1200.0,
                    "notes": ""
                }),
            )
            .await;
        assert!(
            response.status().is_success(),
            "create customer failed: {}",
            response.status()
        );
        parse_body(response).await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.data_path);
    }
}

pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
