use std::env;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: String,
    pub gemini_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            data_path: env::var("DATA_PATH").unwrap_or_else(|_| "./pulsemate.json".to_string()),
            gemini_api_key: env::var("GEMINI_API_KEY").ok(),
        }
    }
}
