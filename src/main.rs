use cinevoice_backend::controllers::{health::HealthState, tts::TtsController};
use cinevoice_backend::domain::tts::TtsService;
use cinevoice_backend::infrastructure::config::{Config, LogFormat};
use cinevoice_backend::infrastructure::http::start_http_server;
use cinevoice_backend::infrastructure::repositories::{GeminiTtsRepository, TtsRepository};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting CineVoice Backend on {}:{}",
        config.host,
        config.port
    );

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Speech provider
    tracing::info!(
        model = %config.gemini_model,
        base_url = %config.gemini_base_url,
        "Initializing Gemini TTS repository"
    );
    let tts_repo: Arc<dyn TtsRepository> = Arc::new(GeminiTtsRepository::new(
        config.gemini_base_url.clone(),
        config.gemini_model.clone(),
        config.gemini_api_key.clone(),
    ));

    // 2. Services
    let tts_service = Arc::new(TtsService::new(tts_repo.clone(), config.max_text_chars));

    // 3. Controllers
    let tts_controller = Arc::new(TtsController::new(
        tts_service,
        config.download_filename.clone(),
    ));
    let health_state = Arc::new(HealthState {
        provider: tts_repo.name(),
        model: config.gemini_model.clone(),
        provider_configured: !config.gemini_api_key.is_empty(),
    });

    let config = Arc::new(config);

    // Start HTTP server with all routes
    start_http_server(config, health_state, tts_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cinevoice_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
