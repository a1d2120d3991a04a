use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use sehat::advisory::{LlmClient, OllamaClient};
use sehat::api::{api_router, ApiContext};
use sehat::config;
use sehat::directory::Roster;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let llm: Arc<dyn LlmClient> = Arc::new(OllamaClient::new(
        &config::ollama_base_url(),
        config::llm_timeout_secs(),
    ));
    let model = config::ollama_model();

    // Advisory endpoints degrade to 502s when the model is missing; warn
    // early instead of failing startup, the directory features still work.
    {
        let llm = llm.clone();
        let model = model.clone();
        tokio::task::spawn_blocking(move || match llm.is_model_available(&model) {
            Ok(true) => tracing::info!(model = %model, "advisory model confirmed"),
            Ok(false) => tracing::warn!(model = %model, "advisory model not installed on Ollama"),
            Err(e) => tracing::warn!(error = %e, "cannot reach Ollama, advisory flows unavailable"),
        });
    }

    let ctx = ApiContext::new(Arc::new(Roster::aligarh_sample()), llm, model);
    let app = api_router(ctx);

    let addr = config::bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, "failed to bind: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(addr = %addr, "API server listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }
}
