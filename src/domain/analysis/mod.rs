//! 일기 분석 코어
//!
//! 감정 키워드 점수, 감성 점수, 키워드 추출, 번아웃 점수와 위험도,
//! 추천/요약 생성을 담당합니다. 모든 연산은 동기식이며 상태를 갖지 않습니다.

pub mod analyzer;
pub mod burnout;
pub mod dto;
pub mod emotion;
pub mod handler;
pub mod keyword;
pub mod recommendation;
pub mod sentiment;
pub mod service;

pub use analyzer::{AnalysisResult, Analyzer};
pub use burnout::{
    analyze_risk, calculate_trend, classify_risk, compute_burnout, RiskAnalysis, RiskLevel,
    SentimentSample, Trend,
};
pub use emotion::{detect_emotions, Emotion, EmotionScores, EntryEmotions};
pub use keyword::extract_keywords;
pub use recommendation::{build_recommendations, summarize, RecommendationSet};
pub use sentiment::{score_sentiment, SentimentLabel};
pub use service::AnalysisService;

/// 0.5는 양의 무한대 방향으로 올리는 반올림 (음수에서도 -12.5 -> -12)
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
