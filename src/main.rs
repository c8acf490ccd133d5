use std::sync::Arc;

use tokio::net::TcpListener;

use asr_gateway::application::ports::TranscriptionError;
use asr_gateway::application::services::TranscriptionService;
use asr_gateway::infrastructure::audio::{WhisperEngine, resolve_model_path};
use asr_gateway::infrastructure::observability::{TracingConfig, init_tracing};
use asr_gateway::infrastructure::storage::TempScratchStore;
use asr_gateway::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing(&TracingConfig::from_env());

    let settings = Settings::load()?;

    tracing::info!(model = %settings.model, "Loading Whisper model");
    let engine = load_engine(settings.clone()).await?;

    let scratch_store = TempScratchStore::new(settings.scratch_dir())?;
    tracing::debug!(dir = %scratch_store.dir().display(), "Scratch directory ready");

    let transcription_service = TranscriptionService::new(
        Arc::new(engine),
        Arc::new(scratch_store),
        settings.decode_options(),
    );

    let addr = settings.socket_addr()?;
    let router = create_router(AppState::new(transcription_service, settings));

    let listener = TcpListener::bind(addr).await?;
    let port = addr.port();
    tracing::info!(%addr, "Starting Whisper server");
    tracing::info!("Health: http://localhost:{}/health", port);
    tracing::info!("Transcribe: http://localhost:{}/asr", port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves and loads the model off the async runtime; both steps block.
async fn load_engine(settings: Settings) -> anyhow::Result<WhisperEngine> {
    let engine = tokio::task::spawn_blocking(move || -> Result<_, TranscriptionError> {
        let model_path = resolve_model_path(&settings.model, settings.model_path.as_deref())?;
        WhisperEngine::load(&settings.model, &model_path, settings.use_gpu)
    })
    .await??;

    Ok(engine)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
