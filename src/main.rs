use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use showscribe::application::services::ShowNoteService;
use showscribe::infrastructure::llm::LlmClientFactory;
use showscribe::infrastructure::media::{YtDlpSource, verify_host_tools};
use showscribe::infrastructure::observability::{TracingConfig, init_tracing};
use showscribe::infrastructure::storage::LocalArtifactStore;
use showscribe::infrastructure::transcription::TranscriptionEngineFactory;
use showscribe::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(TracingConfig::default(), settings.server.port);

    // The pipeline shells out for acquisition; fail before accepting jobs if
    // the host is missing either tool.
    verify_host_tools(&["yt-dlp", "ffmpeg"]).await?;

    let media = Arc::new(YtDlpSource::default());
    let artifacts = Arc::new(LocalArtifactStore::new(PathBuf::from(
        &settings.artifacts.base_dir,
    ))?);
    let transcribers = Arc::new(TranscriptionEngineFactory::new(
        settings.transcription.clone(),
    ));
    let llm_clients = Arc::new(LlmClientFactory::new(settings.llm.clone()));

    let show_note_service = Arc::new(ShowNoteService::new(
        media,
        artifacts,
        transcribers,
        llm_clients,
    ));

    let state = AppState {
        show_note_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let host: IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::from((host, settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
