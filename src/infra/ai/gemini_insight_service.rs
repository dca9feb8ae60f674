use crate::domain::ports::InsightService;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, instrument, warn};

const MAX_RETRIES: u32 = 3;
const INITIAL_BACKOFF_MS: u64 = 500;

/// Thin client for the Gemini generateContent API. Callers treat any error
/// as "insights unavailable"; nothing in the core flows depends on it.
pub struct GeminiInsightService {
    client: Client,
}

impl Default for GeminiInsightService {
    fn default() -> Self {
        Self::new()
    }
}

impl GeminiInsightService {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    async fn send_request_with_retry(
        &self,
        url: &str,
        api_key: &str,
        payload: &Value,
    ) -> Result<String, AppError> {
        let mut retries = 0;
        let mut backoff = INITIAL_BACKOFF_MS;

        loop {
            let res = self
                .client
                .post(url)
                .header("x-goog-api-key", api_key)
                .header("Content-Type", "application/json")
                .json(payload)
                .send()
                .await;

            match res {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body: Value = response.json().await.map_err(|e| {
                            error!("Failed to parse Gemini response JSON: {:?}", e);
                            AppError::Internal
                        })?;
                        return self.extract_content(body);
                    } else if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
                        if retries >= MAX_RETRIES {
                            error!("Gemini API failed after {} retries. Status: {}", retries, status);
                            return Err(AppError::Internal);
                        }
                        warn!("Gemini API transient error {}. Retrying in {}ms...", status, backoff);
                    } else {
                        let text = response.text().await.unwrap_or_default();
                        error!("Gemini API terminal error {}: {}", status, text);
                        return Err(AppError::Internal);
                    }
                }
                Err(e) => {
                    if retries >= MAX_RETRIES {
                        error!("Gemini network error after {} retries: {:?}", retries, e);
                        return Err(AppError::Internal);
                    }
                    warn!("Gemini network error. Retrying in {}ms... {:?}", backoff, e);
                }
            }

            sleep(Duration::from_millis(backoff)).await;
            retries += 1;
            backoff *= 2;
        }
    }

    fn extract_content(&self, body: Value) -> Result<String, AppError> {
        let text = body
            .get("candidates")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|first| first.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|p| p.as_array())
            .and_then(|parts| parts.first())
            .and_then(|part| part.get("text"))
            .and_then(|t| t.as_str());

        match text {
            Some(t) => Ok(t.trim().to_string()),
            None => {
                error!("Unexpected response structure from Gemini: {:?}", body);
                Err(AppError::Internal)
            }
        }
    }
}

#[async_trait]
impl InsightService for GeminiInsightService {
    #[instrument(skip(self, api_key), fields(prompt_len = prompt.len()))]
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, AppError> {
        let url = "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

        let payload = json!({
            "contents": [{
                "parts": [{"text": prompt}]
            }]
        });

        self.send_request_with_retry(url, api_key, &payload).await
    }
}
