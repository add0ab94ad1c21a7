use rand::rngs::StdRng;
use rand::SeedableRng;

use super::analyzer::{AnalysisResult, Analyzer};
use super::dto::AnalyzeRequest;
use crate::config::AppConfig;

/// HTTP 계층에서 쓰는 분석 서비스
///
/// 요청마다 새 난수원을 만듭니다. 시드가 설정되어 있으면 항상 같은 추천이 나옵니다.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    analyzer: Analyzer,
    recommendation_seed: Option<u64>,
}

impl AnalysisService {
    pub fn new(analyzer: Analyzer, recommendation_seed: Option<u64>) -> Self {
        Self {
            analyzer,
            recommendation_seed,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Analyzer::new(config.max_text_length),
            config.recommendation_seed,
        )
    }

    pub fn analyze(&self, request: &AnalyzeRequest) -> AnalysisResult {
        let mut rng = self.rng();
        self.analyzer
            .analyze(&request.text, &request.history, &mut rng)
    }

    fn rng(&self) -> StdRng {
        match self.recommendation_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
