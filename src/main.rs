use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use polyglot_backend::controllers::translate::TranslateController;
use polyglot_backend::domain::translation::TranslationService;
use polyglot_backend::infrastructure::config::{Config, LogFormat};
use polyglot_backend::infrastructure::http::start_http_server;
use polyglot_backend::infrastructure::repositories::{
    GeminiRepository, GoogleTranslateTtsRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Polyglot Backend on {}:{}",
        config.host,
        config.port
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    tracing::info!(model = %config.gemini_model, "Instantiating repositories...");
    let llm_repo = Arc::new(GeminiRepository::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    ));
    let tts_repo = Arc::new(GoogleTranslateTtsRepository::new());

    // 2. Instantiate services (inject repositories)
    let translation_service = Arc::new(TranslationService::new(llm_repo, tts_repo));

    // 3. Instantiate controllers (inject services)
    let translate_controller = Arc::new(TranslateController::new(translation_service));

    // Start HTTP server with all routes
    start_http_server(config, translate_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "polyglot_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "polyglot_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
