use async_trait::async_trait;

/// External sentiment capability: maps transcript text to a polarity score
/// in [-1.0, 1.0].
#[async_trait]
pub trait SentimentScorer: Send + Sync {
    async fn score(&self, text: &str) -> Result<f32, SentimentError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SentimentError {
    #[error("sentiment api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid sentiment response: {0}")]
    InvalidResponse(String),
}
