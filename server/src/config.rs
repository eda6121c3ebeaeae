use policy_service_cli::ai::DEFAULT_MODEL;
use std::env;

const DEFAULT_CLIENT_URL: &str = "http://localhost:5173";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Process-wide configuration, read from the environment once at startup and
/// passed into the components that need it.
#[derive(Debug, Clone)]
pub struct Config {
    pub openrouter_api_key: String,
    pub breach_api_key: String,
    pub model: String,
    pub client_url: String,
    pub bind_addr: String,
}

impl Config {
    /// Missing credentials are fatal; everything else has a default.
    pub fn from_env() -> Self {
        Self {
            openrouter_api_key: env::var("OPENROUTER_API_KEY")
                .expect("OPENROUTER_API_KEY must be set"),
            breach_api_key: env::var("BREACH_API_KEY").expect("BREACH_API_KEY must be set"),
            model: env::var("POLICY_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            client_url: env::var("CLIENT_URL").unwrap_or_else(|_| DEFAULT_CLIENT_URL.to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}
