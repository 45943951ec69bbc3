use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{RecognizerError, SpeechRecognizer};
use crate::domain::NormalizedAudio;
use crate::infrastructure::audio::encode_wav;

/// Speech recognition over an OpenAI-compatible `/audio/transcriptions`
/// endpoint. The waveform is framed as WAV and uploaded as multipart; the
/// request is bounded by the client timeout so a stalled provider cannot
/// hang the request.
pub struct WhisperHttpRecognizer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl WhisperHttpRecognizer {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RecognizerError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RecognizerError::ServiceFailed(format!("client init: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "whisper-1".to_string()),
        })
    }
}

#[async_trait]
impl SpeechRecognizer for WhisperHttpRecognizer {
    async fn recognize(&self, audio: &NormalizedAudio) -> Result<String, RecognizerError> {
        let wav = encode_wav(audio)
            .map_err(|e| RecognizerError::ServiceFailed(format!("wav payload: {}", e)))?;

        let url = format!("{}/audio/transcriptions", self.base_url);

        let file_part = multipart::Part::bytes(wav)
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .map_err(|e| RecognizerError::ServiceFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "text")
            .part("file", file_part);

        tracing::debug!(
            model = %self.model,
            duration_seconds = audio.duration_seconds(),
            "Sending waveform to recognition service"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RecognizerError::Timeout
                } else {
                    RecognizerError::ServiceFailed(format!("request: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RecognizerError::ServiceFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let transcript = response
            .text()
            .await
            .map_err(|e| RecognizerError::ServiceFailed(format!("body: {}", e)))?;

        let transcript = transcript.trim().to_string();
        if transcript.is_empty() {
            // The provider answered but extracted no speech.
            return Err(RecognizerError::Unintelligible);
        }

        tracing::info!(chars = transcript.len(), "Transcription completed");

        Ok(transcript)
    }
}
