use axum::{
    body::Body,
    extract::Request,
    response::Redirect,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

use crate::api::handlers::{analytics, auth, customer, dashboard, health, insight, onboarding};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Onboarding: signup/login, then business-category selection
        .route("/api/v1/auth/signup", post(auth::signup))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/session", get(auth::session))
        .route("/api/v1/onboarding/business", post(onboarding::complete_business_setup))

        // Main application surface, gated by CurrentAccount
        .route("/", get(dashboard::overview))
        .route("/api/v1/dashboard", get(dashboard::overview))
        .route("/api/v1/customers", get(customer::list_customers).post(customer::create_customer))
        .route("/api/v1/customers/{customer_id}", get(customer::get_customer).put(customer::update_customer))
        .route("/api/v1/analytics/growth", get(analytics::growth))
        .route("/api/v1/insights", post(insight::generate_insight))

        // Unknown paths land back on the overview
        .fallback(|| async { Redirect::to("/") })

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        account_email = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
