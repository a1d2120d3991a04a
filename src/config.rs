use std::env;

/// Application-level constants
pub const APP_NAME: &str = "Sehat";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Socket address the API server binds to.
pub fn bind_addr() -> String {
    env::var("SEHAT_ADDR").unwrap_or_else(|_| "127.0.0.1:8700".to_string())
}

/// Base URL of the Ollama instance backing the advisory flows.
pub fn ollama_base_url() -> String {
    env::var("SEHAT_OLLAMA_URL").unwrap_or_else(|_| "http://localhost:11434".to_string())
}

/// Model used for both advisory flows.
pub fn ollama_model() -> String {
    env::var("SEHAT_OLLAMA_MODEL").unwrap_or_else(|_| "llama3:8b".to_string())
}

/// Upper bound on a single generation call, in seconds.
pub fn llm_timeout_secs() -> u64 {
    env::var("SEHAT_LLM_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(120)
}

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "sehat=info,tower_http=warn".to_string()
}
