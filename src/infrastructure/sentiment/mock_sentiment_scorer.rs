use async_trait::async_trait;

use crate::application::ports::{SentimentError, SentimentScorer};

/// Fixed-polarity scorer for scaffold mode and tests.
pub struct MockSentimentScorer {
    polarity: f32,
}

impl MockSentimentScorer {
    pub fn new(polarity: f32) -> Self {
        Self { polarity }
    }
}

impl Default for MockSentimentScorer {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[async_trait]
impl SentimentScorer for MockSentimentScorer {
    async fn score(&self, _text: &str) -> Result<f32, SentimentError> {
        Ok(self.polarity)
    }
}
