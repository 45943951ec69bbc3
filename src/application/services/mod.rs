mod analysis_service;
pub mod metrics;

pub use analysis_service::{AnalysisError, AnalysisService};
pub use metrics::{MetricsError, SpeechMetrics};
