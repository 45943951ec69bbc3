use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{RecognizerError, SpeechRecognizer};

use super::mock_recognizer::MockSpeechRecognizer;
use super::whisper_http_recognizer::WhisperHttpRecognizer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecognizerProvider {
    OpenAi,
    Mock,
}

pub struct RecognizerFactory;

impl RecognizerFactory {
    pub fn create(
        provider: RecognizerProvider,
        api_key: Option<String>,
        base_url: Option<String>,
        model: Option<String>,
        timeout: Duration,
    ) -> Result<Arc<dyn SpeechRecognizer>, RecognizerError> {
        match provider {
            RecognizerProvider::OpenAi => {
                let key = api_key.ok_or_else(|| {
                    RecognizerError::ServiceFailed(
                        "API key required for the OpenAI recognizer".to_string(),
                    )
                })?;
                let engine = WhisperHttpRecognizer::new(key, base_url, model, timeout)?;
                Ok(Arc::new(engine))
            }
            RecognizerProvider::Mock => Ok(Arc::new(MockSpeechRecognizer::default())),
        }
    }
}
