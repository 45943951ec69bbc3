use async_trait::async_trait;

use crate::domain::NormalizedAudio;

/// External speech-to-text capability. Implementations receive the canonical
/// waveform and are responsible for whatever payload framing their provider
/// expects.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(&self, audio: &NormalizedAudio) -> Result<String, RecognizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecognizerError {
    #[error("speech recognition could not understand the audio")]
    Unintelligible,
    #[error("recognition request failed: {0}")]
    ServiceFailed(String),
    #[error("recognition service timed out")]
    Timeout,
}
