use std::sync::Arc;

use orato::application::ports::{
    AudioDecoder, AudioDecoderError, RecognizerError, SentimentError, SentimentScorer,
    SpeechRecognizer,
};
use orato::application::services::{AnalysisError, AnalysisService};
use orato::domain::{AudioClip, NormalizedAudio, Pace, Tone};

struct FixedDecoder {
    seconds: f64,
}

impl AudioDecoder for FixedDecoder {
    fn decode(&self, _data: &[u8]) -> Result<NormalizedAudio, AudioDecoderError> {
        let frames = (16_000.0 * self.seconds) as usize;
        Ok(NormalizedAudio::new(16_000, vec![0i16; frames]))
    }
}

struct FailingDecoder;

impl AudioDecoder for FailingDecoder {
    fn decode(&self, _data: &[u8]) -> Result<NormalizedAudio, AudioDecoderError> {
        Err(AudioDecoderError::DecodingFailed(
            "truncated stream".to_string(),
        ))
    }
}

struct FixedRecognizer {
    transcript: &'static str,
}

#[async_trait::async_trait]
impl SpeechRecognizer for FixedRecognizer {
    async fn recognize(&self, _audio: &NormalizedAudio) -> Result<String, RecognizerError> {
        Ok(self.transcript.to_string())
    }
}

struct UnintelligibleRecognizer;

#[async_trait::async_trait]
impl SpeechRecognizer for UnintelligibleRecognizer {
    async fn recognize(&self, _audio: &NormalizedAudio) -> Result<String, RecognizerError> {
        Err(RecognizerError::Unintelligible)
    }
}

struct TimedOutRecognizer;

#[async_trait::async_trait]
impl SpeechRecognizer for TimedOutRecognizer {
    async fn recognize(&self, _audio: &NormalizedAudio) -> Result<String, RecognizerError> {
        Err(RecognizerError::Timeout)
    }
}

struct FixedScorer {
    polarity: f32,
}

#[async_trait::async_trait]
impl SentimentScorer for FixedScorer {
    async fn score(&self, _text: &str) -> Result<f32, SentimentError> {
        Ok(self.polarity)
    }
}

struct FailingScorer;

#[async_trait::async_trait]
impl SentimentScorer for FailingScorer {
    async fn score(&self, _text: &str) -> Result<f32, SentimentError> {
        Err(SentimentError::ApiRequestFailed("connection refused".to_string()))
    }
}

fn service(
    decoder: Arc<dyn AudioDecoder>,
    recognizer: Arc<dyn SpeechRecognizer>,
    scorer: Arc<dyn SentimentScorer>,
) -> AnalysisService {
    AnalysisService::new(decoder, recognizer, scorer)
}

fn wav_clip(data: Vec<u8>) -> AudioClip {
    AudioClip::new("talk.wav".to_string(), data)
}

#[tokio::test]
async fn given_valid_clip_when_analyzing_then_report_assembled_from_all_stages() {
    let service = service(
        Arc::new(FixedDecoder { seconds: 4.0 }),
        Arc::new(FixedRecognizer {
            transcript: "um so I think it was uh great",
        }),
        Arc::new(FixedScorer { polarity: -0.5 }),
    );

    let report = service.analyze(wav_clip(vec![1, 2, 3])).await.unwrap();

    assert_eq!(report.text, "um so I think it was uh great");
    // 8 words over 4 seconds
    assert_eq!(report.words_per_minute, 120);
    assert_eq!(report.filler_words, vec!["um", "so", "uh"]);
    assert_eq!(report.pace, Pace::Medium);
    assert_eq!(report.tone, Tone::Negative);
}

#[tokio::test]
async fn given_empty_payload_when_analyzing_then_invalid_input() {
    let service = service(
        Arc::new(FixedDecoder { seconds: 4.0 }),
        Arc::new(FixedRecognizer { transcript: "hi" }),
        Arc::new(FixedScorer { polarity: 0.0 }),
    );

    let result = service.analyze(wav_clip(Vec::new())).await;

    assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
}

#[tokio::test]
async fn given_unrecognized_extension_when_analyzing_then_rejected_before_decoding() {
    // The decoder would fail if reached; the extension gate must run first.
    let service = service(
        Arc::new(FailingDecoder),
        Arc::new(FixedRecognizer { transcript: "hi" }),
        Arc::new(FixedScorer { polarity: 0.0 }),
    );

    let clip = AudioClip::new("notes.txt".to_string(), vec![1, 2, 3]);
    let result = service.analyze(clip).await;

    match result {
        Err(AnalysisError::InvalidInput(message)) => {
            assert!(message.starts_with("Invalid file type."));
        }
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

#[tokio::test]
async fn given_undecodable_payload_when_analyzing_then_conversion_error() {
    let service = service(
        Arc::new(FailingDecoder),
        Arc::new(FixedRecognizer { transcript: "hi" }),
        Arc::new(FixedScorer { polarity: 0.0 }),
    );

    let result = service.analyze(wav_clip(vec![0xFF; 16])).await;

    assert!(matches!(result, Err(AnalysisError::Conversion(_))));
}

#[tokio::test]
async fn given_unintelligible_audio_when_analyzing_then_unintelligible_error() {
    let service = service(
        Arc::new(FixedDecoder { seconds: 4.0 }),
        Arc::new(UnintelligibleRecognizer),
        Arc::new(FixedScorer { polarity: 0.0 }),
    );

    let result = service.analyze(wav_clip(vec![1, 2, 3])).await;

    assert!(matches!(result, Err(AnalysisError::UnintelligibleAudio)));
}

#[tokio::test]
async fn given_recognizer_timeout_when_analyzing_then_transcription_service_error() {
    let service = service(
        Arc::new(FixedDecoder { seconds: 4.0 }),
        Arc::new(TimedOutRecognizer),
        Arc::new(FixedScorer { polarity: 0.0 }),
    );

    let result = service.analyze(wav_clip(vec![1, 2, 3])).await;

    assert!(matches!(
        result,
        Err(AnalysisError::TranscriptionService(_))
    ));
}

#[tokio::test]
async fn given_scorer_failure_when_analyzing_then_sentiment_error() {
    let service = service(
        Arc::new(FixedDecoder { seconds: 4.0 }),
        Arc::new(FixedRecognizer { transcript: "hi there" }),
        Arc::new(FailingScorer),
    );

    let result = service.analyze(wav_clip(vec![1, 2, 3])).await;

    assert!(matches!(result, Err(AnalysisError::Sentiment(_))));
}

#[tokio::test]
async fn given_zero_length_waveform_when_analyzing_then_invalid_duration() {
    let service = service(
        Arc::new(FixedDecoder { seconds: 0.0 }),
        Arc::new(FixedRecognizer { transcript: "words exist" }),
        Arc::new(FixedScorer { polarity: 0.0 }),
    );

    let result = service.analyze(wav_clip(vec![1, 2, 3])).await;

    assert!(matches!(result, Err(AnalysisError::InvalidDuration(_))));
}

#[tokio::test]
async fn given_decoded_waveform_when_analyzing_then_rate_uses_decoder_duration() {
    // 2 seconds of decoded audio and a 4-word transcript: the rate metrics
    // must come from the waveform duration, not anything provider-side.
    let service = service(
        Arc::new(FixedDecoder { seconds: 2.0 }),
        Arc::new(FixedRecognizer {
            transcript: "four words right here",
        }),
        Arc::new(FixedScorer { polarity: 0.5 }),
    );

    let report = service.analyze(wav_clip(vec![1, 2, 3])).await.unwrap();

    assert_eq!(report.words_per_minute, 120);
    assert_eq!(report.pace, Pace::Medium);
    assert_eq!(report.tone, Tone::Positive);
}
