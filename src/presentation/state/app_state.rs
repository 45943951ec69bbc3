use std::sync::Arc;

use crate::application::services::AnalysisService;

#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AnalysisService>,
}
