use std::sync::Arc;

use crate::application::ports::{
    AudioDecoder, AudioDecoderError, RecognizerError, SentimentError, SentimentScorer,
    SpeechRecognizer,
};
use crate::application::services::metrics::{self, MetricsError};
use crate::domain::{AnalysisReport, AudioClip, AudioFormat, TranscriptResult};

/// Orchestrates one analysis request: validate, normalize, transcribe,
/// score, compute metrics. Stateless; shared across requests behind `Arc`.
pub struct AnalysisService {
    decoder: Arc<dyn AudioDecoder>,
    recognizer: Arc<dyn SpeechRecognizer>,
    sentiment_scorer: Arc<dyn SentimentScorer>,
}

impl AnalysisService {
    pub fn new(
        decoder: Arc<dyn AudioDecoder>,
        recognizer: Arc<dyn SpeechRecognizer>,
        sentiment_scorer: Arc<dyn SentimentScorer>,
    ) -> Self {
        Self {
            decoder,
            recognizer,
            sentiment_scorer,
        }
    }

    pub async fn analyze(&self, clip: AudioClip) -> Result<AnalysisReport, AnalysisError> {
        if clip.data.is_empty() {
            return Err(AnalysisError::InvalidInput(
                "No audio data provided".to_string(),
            ));
        }

        let format = clip.declared_format().ok_or_else(|| {
            AnalysisError::InvalidInput(format!(
                "Invalid file type. Supported formats: {}",
                AudioFormat::SUPPORTED_EXTENSIONS.join(", ")
            ))
        })?;

        tracing::debug!(
            filename = %clip.filename,
            format = format.extension(),
            bytes = clip.data.len(),
            "Starting analysis"
        );

        let normalized = self.decoder.decode(&clip.data)?;

        // Duration must come from the waveform actually sent to the
        // provider, never from anything in the provider's response.
        let duration_seconds = normalized.duration_seconds();

        let text = match self.recognizer.recognize(&normalized).await {
            Ok(text) => text,
            Err(RecognizerError::Unintelligible) => {
                return Err(AnalysisError::UnintelligibleAudio);
            }
            Err(e) => return Err(AnalysisError::TranscriptionService(e.to_string())),
        };

        let transcript = TranscriptResult {
            text,
            duration_seconds,
        };

        let speech = metrics::speech_metrics(&transcript.text, transcript.duration_seconds)?;
        let polarity = self.sentiment_scorer.score(&transcript.text).await?;
        let tone = metrics::classify_tone(polarity);

        tracing::info!(
            words_per_minute = speech.words_per_minute,
            filler_count = speech.filler_words.len(),
            pace = speech.pace.as_str(),
            tone = tone.as_str(),
            duration_seconds,
            "Analysis complete"
        );

        Ok(AnalysisReport {
            text: transcript.text,
            words_per_minute: speech.words_per_minute,
            filler_words: speech.filler_words,
            tone,
            pace: speech.pace,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("audio conversion failed: {0}")]
    Conversion(#[from] AudioDecoderError),
    #[error("speech recognition could not understand the audio")]
    UnintelligibleAudio,
    #[error("speech recognition service failed: {0}")]
    TranscriptionService(String),
    #[error("sentiment scoring failed: {0}")]
    Sentiment(#[from] SentimentError),
    #[error("invalid audio duration: {0} seconds")]
    InvalidDuration(f64),
}

impl From<MetricsError> for AnalysisError {
    fn from(e: MetricsError) -> Self {
        match e {
            MetricsError::InvalidDuration(seconds) => AnalysisError::InvalidDuration(seconds),
        }
    }
}
