use crate::domain::NormalizedAudio;

/// Decodes an arbitrary audio container into the canonical waveform.
/// Decoding is CPU-bound and synchronous; no I/O happens behind this trait.
pub trait AudioDecoder: Send + Sync {
    fn decode(&self, data: &[u8]) -> Result<NormalizedAudio, AudioDecoderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioDecoderError {
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
}
