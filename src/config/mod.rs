use std::env;
use tracing::{error, info};

pub const DEFAULT_GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// `None` when `GOOGLE_API_KEY` is unset or empty. The service still
    /// starts; AI recommendations stay unavailable for the process lifetime.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base_url: String,
}

impl Config {
    pub fn load() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_port(env::var("PORT").ok());

        let gemini_api_key = env::var("GOOGLE_API_KEY").ok().filter(|key| !key.is_empty());
        match &gemini_api_key {
            Some(_) => info!("Found GOOGLE_API_KEY, AI recommendations enabled"),
            None => error!("GOOGLE_API_KEY not found in environment variables"),
        }

        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());
        let gemini_api_base_url = env::var("GEMINI_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE_URL.to_string());

        Config {
            host,
            port,
            gemini_api_key,
            gemini_model,
            gemini_api_base_url,
        }
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|value| value.parse().ok()).unwrap_or(5000)
}
