mod audio_decoder;
mod sentiment_scorer;
mod speech_recognizer;

pub use audio_decoder::{AudioDecoder, AudioDecoderError};
pub use sentiment_scorer::{SentimentError, SentimentScorer};
pub use speech_recognizer::{RecognizerError, SpeechRecognizer};
