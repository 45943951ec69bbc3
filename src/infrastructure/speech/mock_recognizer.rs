use async_trait::async_trait;

use crate::application::ports::{RecognizerError, SpeechRecognizer};
use crate::domain::NormalizedAudio;

/// Fixed-transcript recognizer for scaffold mode and tests.
pub struct MockSpeechRecognizer {
    transcript: String,
}

impl MockSpeechRecognizer {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }
}

impl Default for MockSpeechRecognizer {
    fn default() -> Self {
        Self::new("this is a mock transcript")
    }
}

#[async_trait]
impl SpeechRecognizer for MockSpeechRecognizer {
    async fn recognize(&self, _audio: &NormalizedAudio) -> Result<String, RecognizerError> {
        Ok(self.transcript.clone())
    }
}
