use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{SentimentError, SentimentScorer};

use super::mock_sentiment_scorer::MockSentimentScorer;
use super::remote_sentiment_scorer::RemoteSentimentScorer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SentimentProvider {
    Remote,
    Mock,
}

pub struct SentimentScorerFactory;

impl SentimentScorerFactory {
    pub fn create(
        provider: SentimentProvider,
        url: Option<String>,
        timeout: Duration,
    ) -> Result<Arc<dyn SentimentScorer>, SentimentError> {
        match provider {
            SentimentProvider::Remote => {
                let url = url.ok_or_else(|| {
                    SentimentError::ApiRequestFailed(
                        "URL required for the remote sentiment scorer".to_string(),
                    )
                })?;
                let scorer = RemoteSentimentScorer::new(url, timeout)?;
                Ok(Arc::new(scorer))
            }
            SentimentProvider::Mock => Ok(Arc::new(MockSentimentScorer::default())),
        }
    }
}
