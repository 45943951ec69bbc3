mod mock_recognizer;
mod recognizer_factory;
mod whisper_http_recognizer;

pub use mock_recognizer::MockSpeechRecognizer;
pub use recognizer_factory::{RecognizerFactory, RecognizerProvider};
pub use whisper_http_recognizer::WhisperHttpRecognizer;
