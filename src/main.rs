use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use orato::application::ports::AudioDecoder;
use orato::application::services::AnalysisService;
use orato::infrastructure::audio::SymphoniaAudioDecoder;
use orato::infrastructure::observability::{init_tracing, TracingConfig};
use orato::infrastructure::sentiment::{SentimentProvider, SentimentScorerFactory};
use orato::infrastructure::speech::{RecognizerFactory, RecognizerProvider};
use orato::presentation::{
    create_router, AppState, RecognizerProviderSetting, SentimentProviderSetting, Settings,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    let decoder: Arc<dyn AudioDecoder> = Arc::new(SymphoniaAudioDecoder);

    let recognizer_provider = match settings.recognizer.provider {
        RecognizerProviderSetting::OpenAi => RecognizerProvider::OpenAi,
        RecognizerProviderSetting::Mock => RecognizerProvider::Mock,
    };
    let recognizer = RecognizerFactory::create(
        recognizer_provider,
        settings.recognizer.api_key.clone(),
        settings.recognizer.base_url.clone(),
        Some(settings.recognizer.model.clone()),
        Duration::from_secs(settings.recognizer.timeout_secs),
    )?;

    let sentiment_provider = match settings.sentiment.provider {
        SentimentProviderSetting::Remote => SentimentProvider::Remote,
        SentimentProviderSetting::Mock => SentimentProvider::Mock,
    };
    let sentiment_scorer = SentimentScorerFactory::create(
        sentiment_provider,
        settings.sentiment.url.clone(),
        Duration::from_secs(settings.sentiment.timeout_secs),
    )?;

    let analysis_service = Arc::new(AnalysisService::new(decoder, recognizer, sentiment_scorer));

    let state = AppState { analysis_service };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
