use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{SentimentError, SentimentScorer};

#[derive(Serialize)]
struct ScoreRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct ScoreResponse {
    polarity: f32,
}

/// Polarity scoring over a remote HTTP service. Out-of-range provider
/// values are clamped to [-1.0, 1.0].
pub struct RemoteSentimentScorer {
    client: reqwest::Client,
    url: String,
}

impl RemoteSentimentScorer {
    pub fn new(url: String, timeout: Duration) -> Result<Self, SentimentError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SentimentError::ApiRequestFailed(format!("client init: {}", e)))?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl SentimentScorer for RemoteSentimentScorer {
    async fn score(&self, text: &str) -> Result<f32, SentimentError> {
        let response = self
            .client
            .post(&self.url)
            .json(&ScoreRequest { text })
            .send()
            .await
            .map_err(|e| SentimentError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SentimentError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: ScoreResponse = response
            .json()
            .await
            .map_err(|e| SentimentError::InvalidResponse(e.to_string()))?;

        let polarity = parsed.polarity.clamp(-1.0, 1.0);

        tracing::debug!(polarity, "Sentiment scored");

        Ok(polarity)
    }
}
