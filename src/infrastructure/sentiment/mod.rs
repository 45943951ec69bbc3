mod mock_sentiment_scorer;
mod remote_sentiment_scorer;
mod scorer_factory;

pub use mock_sentiment_scorer::MockSentimentScorer;
pub use remote_sentiment_scorer::RemoteSentimentScorer;
pub use scorer_factory::{SentimentProvider, SentimentScorerFactory};
