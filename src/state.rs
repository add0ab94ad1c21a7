use crate::config::AppConfig;
use crate::domain::analysis::AnalysisService;

/// 핸들러 공용 상태. 변경 가능한 공유 상태는 없음
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub analysis_service: AnalysisService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let analysis_service = AnalysisService::from_config(&config);
        Self {
            config,
            analysis_service,
        }
    }
}
