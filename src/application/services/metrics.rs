use crate::domain::{Pace, Tone};

/// Hesitation vocabulary, matched case-insensitively against single
/// whitespace-delimited tokens. Multi-word entries ("you know") are kept for
/// parity with the upstream vocabulary but can never match a single token;
/// changing that needs product sign-off.
pub const FILLER_VOCABULARY: &[&str] = &[
    "um", "uh", "like", "you know", "so", "actually", "basically",
];

const FAST_WORDS_PER_SECOND: f64 = 2.5;
const SLOW_WORDS_PER_SECOND: f64 = 1.5;
const POSITIVE_POLARITY: f32 = 0.1;
const NEGATIVE_POLARITY: f32 = -0.1;

/// Rate and filler metrics derived from a transcript and its duration.
/// Pure data; tone is attached separately once polarity is known.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechMetrics {
    pub words_per_minute: u32,
    pub filler_words: Vec<String>,
    pub pace: Pace,
}

#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("audio duration must be positive, got {0} seconds")]
    InvalidDuration(f64),
}

/// A word is any maximal non-whitespace run; punctuation stays attached so
/// counts line up with the provider's raw tokenization.
pub fn word_count(transcript: &str) -> usize {
    transcript.split_whitespace().count()
}

pub fn words_per_minute(transcript: &str, duration_seconds: f64) -> Result<u32, MetricsError> {
    if duration_seconds <= 0.0 {
        return Err(MetricsError::InvalidDuration(duration_seconds));
    }
    let words = word_count(transcript) as f64;
    Ok((words / (duration_seconds / 60.0)).round() as u32)
}

/// Scans lowercased tokens in transcript order, keeping duplicates.
pub fn filler_words(transcript: &str) -> Vec<String> {
    transcript
        .to_lowercase()
        .split_whitespace()
        .filter(|token| FILLER_VOCABULARY.contains(token))
        .map(str::to_string)
        .collect()
}

/// Buckets words-per-second, a different scale than the WPM metric.
/// Boundary rates fall into Medium.
pub fn classify_pace(transcript: &str, duration_seconds: f64) -> Result<Pace, MetricsError> {
    if duration_seconds <= 0.0 {
        return Err(MetricsError::InvalidDuration(duration_seconds));
    }
    let rate = word_count(transcript) as f64 / duration_seconds;
    Ok(if rate > FAST_WORDS_PER_SECOND {
        Pace::Fast
    } else if rate < SLOW_WORDS_PER_SECOND {
        Pace::Slow
    } else {
        Pace::Medium
    })
}

/// Buckets a polarity score in [-1.0, 1.0]. Boundary polarities are Neutral.
pub fn classify_tone(polarity: f32) -> Tone {
    if polarity > POSITIVE_POLARITY {
        Tone::Positive
    } else if polarity < NEGATIVE_POLARITY {
        Tone::Negative
    } else {
        Tone::Neutral
    }
}

pub fn speech_metrics(transcript: &str, duration_seconds: f64) -> Result<SpeechMetrics, MetricsError> {
    Ok(SpeechMetrics {
        words_per_minute: words_per_minute(transcript, duration_seconds)?,
        filler_words: filler_words(transcript),
        pace: classify_pace(transcript, duration_seconds)?,
    })
}
